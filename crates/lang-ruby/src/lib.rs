mod lower;

use glint_api::{ApiError, ApiResult, SyntaxNode};
use tree_sitter::Tree;

/// Parses Ruby sources with tree-sitter and lowers the concrete tree into
/// [`SyntaxNode`]s with explicit binding and reference sites.
#[derive(Clone)]
pub struct RubyParser {
    pub language: tree_sitter::Language,
}

impl RubyParser {
    pub fn new() -> ApiResult<Self> {
        let language: tree_sitter::Language = tree_sitter_ruby::LANGUAGE.into();
        // Fail early on an ABI mismatch instead of on the first document.
        tree_sitter::Parser::new()
            .set_language(&language)
            .map_err(|e| ApiError::Parsing(format!("failed to load Ruby grammar: {}", e)))?;
        Ok(Self { language })
    }

    pub fn parse(&self, source: &str) -> ApiResult<SyntaxNode> {
        let tree = self.parse_tree(source)?;
        if tree.root_node().has_error() {
            tracing::debug!("source has syntax errors, lowering the recovered tree");
        }
        lower::lower_tree(&tree, source)
    }

    pub fn parse_tree(&self, source: &str) -> ApiResult<Tree> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ApiError::Parsing(format!("failed to load Ruby grammar: {}", e)))?;
        parser
            .parse(source, None)
            .ok_or_else(|| ApiError::Parsing("parser returned no tree".to_string()))
    }
}
