//! Document highlights: every occurrence of the symbol under the cursor,
//! tagged as a read or a write.
//!
//! A request runs in two steps. [`locate`] descends from the root to the node
//! under the cursor and turns it into a [`Target`]; [`collect`] then walks the
//! whole tree once and asks the target to classify every node.

mod collect;
mod locate;
mod target;

pub use collect::collect;
pub use locate::locate;
pub use target::Target;

use crate::config::HighlightOptions;
use glint_api::{Highlight, SyntaxNode};

/// Highlights for the symbol at `offset`, in traversal order. Empty when the
/// offset does not land on a highlightable symbol.
pub fn document_highlights(root: &SyntaxNode, offset: usize) -> Vec<Highlight> {
    highlights_at(root, offset, &HighlightOptions::default())
}

pub fn highlights_at(root: &SyntaxNode, offset: usize, options: &HighlightOptions) -> Vec<Highlight> {
    let target = locate(root, offset).or_else(|| {
        if options.word_end_fallback && offset > 0 {
            locate(root, offset - 1)
        } else {
            None
        }
    });

    let Some(target) = target else {
        tracing::trace!(offset, "no highlight target");
        return Vec::new();
    };

    let highlights = collect(root, &target);
    tracing::debug!(
        offset,
        symbol = %target.symbol(),
        count = highlights.len(),
        "collected document highlights"
    );
    highlights
}
