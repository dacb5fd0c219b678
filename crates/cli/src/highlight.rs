use glint_api::Language;
use glint_core::config::HighlightOptions;
use glint_core::text::{LineIndex, TextPosition};
use glint_lsp::util;
use glint_ruby::RubyParser;
use std::path::Path;
use tower_lsp::lsp_types::DocumentHighlight;
use tracing::info;

/// Where the cursor sits in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Zero-based line and UTF-16 column.
    Position { line: u32, character: u32 },
    /// Byte offset.
    Offset(usize),
}

pub fn run(path: &Path, cursor: Cursor, word_end_fallback: bool) -> glint_core::Result<()> {
    let options = HighlightOptions { word_end_fallback };
    let highlights = highlight_file(path, cursor, &options)?;
    info!(
        "{} highlights in {} at {:?}",
        highlights.len(),
        path.display(),
        cursor
    );
    println!("{}", serde_json::to_string_pretty(&highlights)?);
    Ok(())
}

pub fn highlight_file(
    path: &Path,
    cursor: Cursor,
    options: &HighlightOptions,
) -> glint_core::Result<Vec<DocumentHighlight>> {
    let content = std::fs::read_to_string(path)?;
    if Language::from_path(&path.to_string_lossy()) != Language::RUBY {
        tracing::warn!("{} does not look like Ruby; parsing anyway", path.display());
    }

    let parser = RubyParser::new()?;
    let tree = parser.parse(&content)?;
    let index = LineIndex::new(content);

    let offset = match cursor {
        Cursor::Position { line, character } => {
            index.offset_at(TextPosition::new(line, character))
        }
        Cursor::Offset(offset) => offset,
    };

    Ok(glint_core::highlights_at(&tree, offset, options)
        .into_iter()
        .map(|h| DocumentHighlight {
            range: util::to_lsp_range(index.range_of(h.range)),
            kind: Some(util::to_lsp_kind(h.kind)),
        })
        .collect())
}
