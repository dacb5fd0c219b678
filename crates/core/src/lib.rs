pub mod config;
pub mod error;
pub mod highlight;
pub mod logging;
pub mod text;

pub use error::Result;
pub use highlight::{Target, document_highlights, highlights_at};
