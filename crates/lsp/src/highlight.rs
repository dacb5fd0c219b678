use crate::util::{self, Document};
use crate::LspServer;
use glint_core::config::HighlightOptions;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;

pub async fn highlight(
    server: &LspServer,
    params: DocumentHighlightParams,
) -> Result<Option<Vec<DocumentHighlight>>> {
    let uri = params.text_document_position_params.text_document.uri;
    let position = params.text_document_position_params.position;

    let doc = match server.documents.get(&uri) {
        Some(d) => d.clone(),
        None => return Ok(None),
    };
    let options = *server.options.read().await;

    Ok(document_highlights(&doc, position, &options))
}

/// Highlights for `position` in `doc`, or `None` when there are none.
pub fn document_highlights(
    doc: &Document,
    position: Position,
    options: &HighlightOptions,
) -> Option<Vec<DocumentHighlight>> {
    let tree = doc.tree.as_ref()?;
    let offset = doc.index.offset_at(util::to_text_position(position));

    let lsp_highlights: Vec<DocumentHighlight> = glint_core::highlights_at(tree, offset, options)
        .into_iter()
        .map(|h| DocumentHighlight {
            range: util::to_lsp_range(doc.index.range_of(h.range)),
            kind: Some(util::to_lsp_kind(h.kind)),
        })
        .collect();

    if lsp_highlights.is_empty() {
        None
    } else {
        Some(lsp_highlights)
    }
}
