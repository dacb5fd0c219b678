use super::symbol::{Symbol, SymbolKind};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Write as _;

/// Half-open byte range `[start, end)` into the source text.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {} past end {}", start, end);
        Self { start, end }
    }

    /// True when `offset` lies inside the span. The end is exclusive.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

/// Kind tag of a syntax node.
///
/// Name leaves carry their source text. `VarField` and `VarRef` are occurrence
/// nodes: each wraps exactly one name leaf and shares its span, marking the
/// name as written or read at that position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// `$name`
    GlobalVariable(SmolStr),
    /// `@name`
    InstanceVariable(SmolStr),
    /// `@@name`
    ClassVariable(SmolStr),
    /// `NAME`
    Constant(SmolStr),
    /// Bare identifier; a local variable, method name or selector.
    Identifier(SmolStr),
    /// Binding site: the wrapped name is assigned to here.
    VarField,
    /// Reference site: the wrapped name is read here.
    VarRef,
    /// Any other construct, tagged with the producer's node kind.
    Other(&'static str),
}

impl NodeKind {
    /// Symbol named by a leaf kind. Occurrence and `Other` kinds name nothing
    /// on their own.
    pub fn leaf_symbol(&self) -> Option<Symbol> {
        let (kind, name) = match self {
            NodeKind::GlobalVariable(name) => (SymbolKind::Global, name),
            NodeKind::InstanceVariable(name) => (SymbolKind::Instance, name),
            NodeKind::ClassVariable(name) => (SymbolKind::Class, name),
            NodeKind::Constant(name) => (SymbolKind::Constant, name),
            NodeKind::Identifier(name) => (SymbolKind::Local, name),
            NodeKind::VarField | NodeKind::VarRef | NodeKind::Other(_) => return None,
        };
        Some(Symbol::new(kind, name.clone()))
    }

    pub fn is_name(&self) -> bool {
        self.leaf_symbol().is_some()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::GlobalVariable(_) => "global_variable",
            NodeKind::InstanceVariable(_) => "instance_variable",
            NodeKind::ClassVariable(_) => "class_variable",
            NodeKind::Constant(_) => "constant",
            NodeKind::Identifier(_) => "identifier",
            NodeKind::VarField => "var_field",
            NodeKind::VarRef => "var_ref",
            NodeKind::Other(kind) => *kind,
        }
    }
}

/// An immutable node of a parsed source tree.
///
/// Children are sorted by `span.start` and do not overlap. Positional lookups
/// binary-search over them, so producers must keep that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    kind: NodeKind,
    span: Span,
    children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(kind: NodeKind, span: Span, children: Vec<SyntaxNode>) -> Self {
        debug_assert!(
            children_are_ordered(&children),
            "children of `{}` must be sorted and non-overlapping",
            kind.as_str()
        );
        Self {
            kind,
            span,
            children,
        }
    }

    pub fn leaf(kind: NodeKind, span: Span) -> Self {
        Self::new(kind, span, Vec::new())
    }

    /// Wraps a name leaf as a binding site.
    pub fn write(name: SyntaxNode) -> Self {
        let span = name.span;
        Self::new(NodeKind::VarField, span, vec![name])
    }

    /// Wraps a name leaf as a reference site.
    pub fn read(name: SyntaxNode) -> Self {
        let span = name.span;
        Self::new(NodeKind::VarRef, span, vec![name])
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }

    /// Symbolic identity of the node, if it denotes a variable-like name.
    pub fn symbol(&self) -> Option<Symbol> {
        match &self.kind {
            NodeKind::VarField | NodeKind::VarRef => self
                .children
                .iter()
                .find_map(|child| child.kind.leaf_symbol()),
            kind => kind.leaf_symbol(),
        }
    }

    /// Pre-order walk over this node and all of its descendants.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }

    /// Renders the tree as an s-expression, e.g.
    /// `(assignment (var_field (constant FOO)) (integer))`.
    pub fn to_sexp(&self) -> String {
        let mut out = String::new();
        self.write_sexp(&mut out);
        out
    }

    fn write_sexp(&self, out: &mut String) {
        out.push('(');
        out.push_str(self.kind.as_str());
        if let Some(symbol) = self.kind.leaf_symbol() {
            let _ = write!(out, " {}", symbol.name);
        }
        for child in &self.children {
            out.push(' ');
            child.write_sexp(out);
        }
        out.push(')');
    }
}

fn children_are_ordered(children: &[SyntaxNode]) -> bool {
    children
        .windows(2)
        .all(|pair| pair[0].span.end <= pair[1].span.start)
}

/// Iterator returned by [`SyntaxNode::preorder`].
pub struct Preorder<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(name: &str, start: usize) -> SyntaxNode {
        SyntaxNode::leaf(
            NodeKind::Constant(name.into()),
            Span::new(start, start + name.len()),
        )
    }

    #[test]
    fn span_end_is_exclusive() {
        let span = Span::new(3, 6);
        assert!(!span.contains(2));
        assert!(span.contains(3));
        assert!(span.contains(5));
        assert!(!span.contains(6));
        assert!(!Span::new(4, 4).contains(4));
    }

    #[test]
    fn occurrence_nodes_take_the_symbol_of_their_name() {
        let field = SyntaxNode::write(constant("FOO", 0));
        let reference = SyntaxNode::read(constant("FOO", 10));

        let expected = Some(Symbol::new(SymbolKind::Constant, "FOO"));
        assert_eq!(field.symbol(), expected);
        assert_eq!(reference.symbol(), expected);
        assert_eq!(field.span(), Span::new(0, 3));
    }

    #[test]
    fn other_nodes_have_no_symbol() {
        let node = SyntaxNode::new(
            NodeKind::Other("program"),
            Span::new(0, 3),
            vec![constant("FOO", 0)],
        );
        assert_eq!(node.symbol(), None);
    }

    #[test]
    fn preorder_visits_parents_before_children_in_source_order() {
        let tree = SyntaxNode::new(
            NodeKind::Other("program"),
            Span::new(0, 20),
            vec![
                SyntaxNode::new(
                    NodeKind::Other("assignment"),
                    Span::new(0, 7),
                    vec![
                        SyntaxNode::write(constant("A", 0)),
                        SyntaxNode::leaf(NodeKind::Other("integer"), Span::new(4, 5)),
                    ],
                ),
                SyntaxNode::read(constant("A", 10)),
            ],
        );

        let kinds: Vec<&str> = tree.preorder().map(|n| n.kind().as_str()).collect();
        assert_eq!(
            kinds,
            vec![
                "program",
                "assignment",
                "var_field",
                "constant",
                "integer",
                "var_ref",
                "constant"
            ]
        );
    }

    #[test]
    fn sexp_shows_names_of_leaves() {
        let node = SyntaxNode::write(SyntaxNode::leaf(
            NodeKind::InstanceVariable("@x".into()),
            Span::new(0, 2),
        ));
        assert_eq!(node.to_sexp(), "(var_field (instance_variable @x))");
    }
}
