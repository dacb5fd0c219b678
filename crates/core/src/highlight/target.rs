use glint_api::{HighlightKind, NodeKind, Symbol, SyntaxNode};

/// The symbol the cursor resolved to, borrowed from the tree for the duration
/// of one request.
#[derive(Debug, Clone)]
pub struct Target<'tree> {
    node: &'tree SyntaxNode,
    symbol: Symbol,
}

impl<'tree> Target<'tree> {
    /// `None` when the node names no variable-like symbol.
    pub fn new(node: &'tree SyntaxNode) -> Option<Self> {
        let symbol = node.symbol()?;
        Some(Self { node, symbol })
    }

    pub fn node(&self) -> &'tree SyntaxNode {
        self.node
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Read/write role of `candidate` if it is an occurrence of this symbol.
    ///
    /// Only occurrence nodes are reported. Name leaves are reached through the
    /// binding or reference site wrapping them, which has the same span.
    pub fn classify(&self, candidate: &SyntaxNode) -> Option<HighlightKind> {
        let kind = match candidate.kind() {
            NodeKind::VarField => HighlightKind::Write,
            NodeKind::VarRef => HighlightKind::Read,
            NodeKind::GlobalVariable(_)
            | NodeKind::InstanceVariable(_)
            | NodeKind::ClassVariable(_)
            | NodeKind::Constant(_)
            | NodeKind::Identifier(_)
            | NodeKind::Other(_) => return None,
        };
        (candidate.symbol().as_ref() == Some(&self.symbol)).then_some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;

    #[test]
    fn binding_site_of_same_symbol_is_a_write() {
        let anchor = read("@x", 20);
        let target = Target::new(&anchor).unwrap();
        assert_eq!(target.classify(&write("@x", 0)), Some(HighlightKind::Write));
    }

    #[test]
    fn reference_of_same_symbol_is_a_read() {
        let anchor = write("$count", 0);
        let target = Target::new(&anchor).unwrap();
        assert_eq!(target.classify(&read("$count", 40)), Some(HighlightKind::Read));
        // The anchor classifies itself.
        assert_eq!(target.classify(&anchor), Some(HighlightKind::Write));
    }

    #[test]
    fn same_name_in_another_namespace_does_not_match() {
        let anchor = name("@x", 0);
        let target = Target::new(&anchor).unwrap();
        assert_eq!(target.classify(&read("$x", 10)), None);
        assert_eq!(target.classify(&read("@@x", 10)), None);
        assert_eq!(target.classify(&read("x", 10)), None);
    }

    #[test]
    fn different_name_does_not_match() {
        let anchor = name("@x", 0);
        let target = Target::new(&anchor).unwrap();
        assert_eq!(target.classify(&read("@y", 10)), None);
    }

    #[test]
    fn bare_leaves_and_other_nodes_are_not_occurrences() {
        let anchor = name("FOO", 0);
        let target = Target::new(&anchor).unwrap();
        assert_eq!(target.classify(&name("FOO", 10)), None);
        assert_eq!(
            target.classify(&other("scope_resolution", 10..13, vec![read("FOO", 10)])),
            None
        );
    }

    #[test]
    fn nodes_without_identity_are_not_targets() {
        assert!(Target::new(&token("integer", 0..1)).is_none());
        assert!(Target::new(&other("method", 0..10, vec![name("foo", 4)])).is_none());
    }
}
