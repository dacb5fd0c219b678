use super::target::Target;
use glint_api::{NodeKind, SyntaxNode};
use std::cmp::Ordering;

/// Finds the highlightable symbol enclosing `offset`.
///
/// The descent binary-searches the children of the current node for the one
/// containing the offset. Variable and constant leaves and binding sites are
/// targets on their own. A bare identifier is ambiguous on its own, so the
/// node that holds it (`current`) is promoted instead. Anything else is
/// descended into. The root itself is never a candidate.
pub fn locate(root: &SyntaxNode, offset: usize) -> Option<Target<'_>> {
    let mut current = root;
    loop {
        let matched = child_at(current, offset)?;
        let resolved = match matched.kind() {
            NodeKind::GlobalVariable(_)
            | NodeKind::InstanceVariable(_)
            | NodeKind::ClassVariable(_)
            | NodeKind::Constant(_)
            | NodeKind::VarField => matched,
            NodeKind::Identifier(_) => current,
            NodeKind::VarRef | NodeKind::Other(_) => {
                current = matched;
                continue;
            }
        };
        return Target::new(resolved);
    }
}

/// Child of `node` whose span contains `offset`. Relies on children being
/// sorted and non-overlapping.
fn child_at(node: &SyntaxNode, offset: usize) -> Option<&SyntaxNode> {
    let children = node.children();
    children
        .binary_search_by(|child| {
            let span = child.span();
            if span.contains(offset) {
                Ordering::Equal
            } else if span.start > offset {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        })
        .ok()
        .map(|index| &children[index])
}
