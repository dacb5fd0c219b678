use super::target::Target;
use glint_api::{Highlight, SyntaxNode};

/// Walks every node under `root` (root included) in pre-order and records one
/// highlight per occurrence of the target's symbol.
pub fn collect(root: &SyntaxNode, target: &Target<'_>) -> Vec<Highlight> {
    root.preorder()
        .filter_map(|node| {
            target
                .classify(node)
                .map(|kind| Highlight::new(node.span(), kind))
        })
        .collect()
}
