use glint_api::{HighlightKind, Language, SyntaxNode};
use glint_core::text::{LineIndex, TextPosition, TextRange};
use glint_ruby::RubyParser;
use std::sync::Arc;
use tower_lsp::lsp_types::{
    DocumentHighlightKind, Position, Range, TextDocumentContentChangeEvent, Url,
};

/// Snapshot of an open document. Replaced as a whole on every change, so
/// text, line index and tree always agree.
pub struct Document {
    pub language: Language,
    pub version: i32,
    pub index: LineIndex,
    /// `None` for non-Ruby documents and when parsing failed.
    pub tree: Option<Arc<SyntaxNode>>,
}

impl Document {
    pub fn new(content: String, language: Language, version: i32, parser: &RubyParser) -> Self {
        let tree = if language == Language::RUBY {
            match parser.parse(&content) {
                Ok(tree) => Some(Arc::new(tree)),
                Err(e) => {
                    tracing::warn!("failed to parse document (version {}): {}", version, e);
                    None
                }
            }
        } else {
            None
        };

        Self {
            language,
            version,
            index: LineIndex::new(content),
            tree,
        }
    }

    pub fn content(&self) -> &str {
        self.index.text()
    }

    /// True when a change for `version` predates this snapshot.
    pub fn is_stale(&self, version: i32) -> bool {
        version < self.version
    }

    /// Applies content changes in order. Ranged changes are positioned against
    /// the text produced by the changes before them.
    pub fn apply_changes(
        &self,
        changes: &[TextDocumentContentChangeEvent],
        version: i32,
        parser: &RubyParser,
    ) -> Self {
        let mut content = self.content().to_string();
        for change in changes {
            match change.range {
                Some(range) => {
                    let index = LineIndex::new(content.as_str());
                    let start = index.offset_at(to_text_position(range.start));
                    let end = index.offset_at(to_text_position(range.end)).max(start);
                    content.replace_range(start..end, &change.text);
                }
                None => content = change.text.clone(),
            }
        }
        Self::new(content, self.language.clone(), version, parser)
    }
}

/// Language of a newly opened document, from its `languageId` or, failing
/// that, from its path.
pub fn detect_language(uri: &Url, language_id: &str) -> Language {
    let language = Language::from_language_id(language_id);
    if language == Language::UNKNOWN {
        Language::from_path(uri.path())
    } else {
        language
    }
}

pub fn to_text_position(position: Position) -> TextPosition {
    TextPosition::new(position.line, position.character)
}

pub fn to_lsp_range(range: TextRange) -> Range {
    Range {
        start: Position::new(range.start.line, range.start.character),
        end: Position::new(range.end.line, range.end.character),
    }
}

pub fn to_lsp_kind(kind: HighlightKind) -> DocumentHighlightKind {
    match kind {
        HighlightKind::Read => DocumentHighlightKind::READ,
        HighlightKind::Write => DocumentHighlightKind::WRITE,
    }
}
