use glint_api::{ApiError, ApiResult, NodeKind, Span, SyntaxNode};
use smol_str::SmolStr;
use tree_sitter::{Node, Tree, TreeCursor};

/// How a name leaf is used at its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    /// Assigned to: wrapped in a binding site.
    Write,
    /// Read: wrapped in a reference site.
    Read,
    /// Method name or call selector: left bare.
    Selector,
    /// Pattern position: a local name is bound, anything else is matched
    /// against and therefore read.
    Capture,
}

/// Role of a name leaf, decided by the kind of its parent and the field it
/// occupies there.
pub(crate) fn role_of(parent: &str, field: Option<&str>) -> Role {
    match (parent, field) {
        ("assignment" | "operator_assignment", Some("left")) => Role::Write,
        ("for", Some("pattern")) => Role::Write,
        ("in_clause" | "match_pattern" | "test_pattern", Some("pattern")) => Role::Capture,
        ("as_pattern", Some("name")) => Role::Capture,
        ("keyword_pattern", Some("value")) => Role::Capture,
        ("array_pattern" | "find_pattern", _) => Role::Capture,
        (
            "left_assignment_list"
            | "destructured_left_assignment"
            | "rest_assignment"
            | "method_parameters"
            | "block_parameters"
            | "lambda_parameters"
            | "destructured_parameter"
            | "exception_variable",
            _,
        ) => Role::Write,
        (
            "optional_parameter"
            | "splat_parameter"
            | "hash_splat_parameter"
            | "block_parameter"
            | "keyword_parameter",
            Some("name"),
        ) => Role::Write,
        ("class" | "module", Some("name")) => Role::Write,
        ("call", Some("method")) => Role::Selector,
        ("method" | "singleton_method", Some("name")) => Role::Selector,
        ("setter" | "alias" | "undef", _) => Role::Selector,
        _ => Role::Read,
    }
}

pub(crate) fn lower_tree(tree: &Tree, source: &str) -> ApiResult<SyntaxNode> {
    let mut cursor = tree.walk();
    lower_node(&mut cursor, source, Role::Read)
}

fn lower_node(cursor: &mut TreeCursor<'_>, source: &str, role: Role) -> ApiResult<SyntaxNode> {
    let node = cursor.node();
    let span = Span::new(node.start_byte(), node.end_byte());

    if let Some(kind) = name_kind(node, source)? {
        let role = match (role, &kind) {
            (Role::Capture, NodeKind::Identifier(_)) => Role::Write,
            (Role::Capture, _) => Role::Read,
            (role, _) => role,
        };
        let leaf = SyntaxNode::leaf(kind, span);
        return Ok(match role {
            Role::Write => SyntaxNode::write(leaf),
            Role::Read | Role::Capture => SyntaxNode::read(leaf),
            Role::Selector => leaf,
        });
    }

    let kind = node.kind();
    // `in {name:}` binds `name` through the key itself.
    let shorthand = kind == "keyword_pattern" && node.child_by_field_name("value").is_none();
    let mut children = Vec::new();
    if cursor.goto_first_child() {
        loop {
            let child = cursor.node();
            // Anonymous tokens and comments are dropped, leaving gaps.
            if child.is_named() && !child.is_extra() && !child.is_missing() {
                let field = cursor.field_name();
                if shorthand && field == Some("key") && child.kind() == "hash_key_symbol" {
                    children.push(shorthand_capture(child, source)?);
                } else {
                    let role = match (kind, field) {
                        // `A::B = 1` assigns `B`; the scope stays a read.
                        ("scope_resolution", Some("name")) if role == Role::Write => Role::Write,
                        _ => role_of(kind, field),
                    };
                    children.push(lower_node(cursor, source, role)?);
                }
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
        cursor.goto_parent();
    }
    // Heredoc bodies may be attached after later siblings.
    children.sort_by_key(|child| child.span().start);

    Ok(SyntaxNode::new(NodeKind::Other(kind), span, children))
}

fn shorthand_capture(key: Node<'_>, source: &str) -> ApiResult<SyntaxNode> {
    let name = node_text(key, source)?;
    let span = Span::new(key.start_byte(), key.end_byte());
    Ok(SyntaxNode::write(SyntaxNode::leaf(
        NodeKind::Identifier(SmolStr::new(name)),
        span,
    )))
}

fn name_kind(node: Node<'_>, source: &str) -> ApiResult<Option<NodeKind>> {
    let make: fn(SmolStr) -> NodeKind = match node.kind() {
        "identifier" => NodeKind::Identifier,
        "constant" => NodeKind::Constant,
        "instance_variable" => NodeKind::InstanceVariable,
        "class_variable" => NodeKind::ClassVariable,
        "global_variable" => NodeKind::GlobalVariable,
        _ => return Ok(None),
    };
    let text = node_text(node, source)?;
    Ok(Some(make(SmolStr::new(text))))
}

fn node_text<'s>(node: Node<'_>, source: &'s str) -> ApiResult<&'s str> {
    node.utf8_text(source.as_bytes()).map_err(|e| {
        ApiError::Parsing(format!(
            "invalid UTF-8 in `{}` at byte {}: {}",
            node.kind(),
            node.start_byte(),
            e
        ))
    })
}
