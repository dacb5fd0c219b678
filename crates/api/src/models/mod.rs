pub mod highlight;
pub mod language;
pub mod symbol;
pub mod syntax;

pub use highlight::*;
pub use language::*;
pub use symbol::*;
pub use syntax::*;
