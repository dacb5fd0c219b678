pub mod capabilities;
pub mod highlight;
pub mod util;

use crate::util::Document;
use dashmap::DashMap;
use glint_core::config::HighlightOptions;
use glint_ruby::RubyParser;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

pub struct LspServer {
    client: Client,
    parser: Arc<RubyParser>,
    pub documents: DashMap<Url, Arc<Document>>,
    pub options: RwLock<HighlightOptions>,
}

impl LspServer {
    pub fn new(client: Client, parser: Arc<RubyParser>) -> Self {
        Self {
            client,
            parser,
            documents: DashMap::new(),
            options: RwLock::new(HighlightOptions::default()),
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for LspServer {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        match HighlightOptions::from_initialization_options(params.initialization_options.as_ref())
        {
            Ok(options) => {
                tracing::info!("highlight options: {:?}", options);
                *self.options.write().await = options;
            }
            Err(e) => {
                tracing::warn!("{}; using defaults", e);
                self.client
                    .log_message(MessageType::WARNING, format!("{}; using defaults", e))
                    .await;
            }
        }

        Ok(InitializeResult {
            server_info: Some(ServerInfo {
                name: "Glint".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
            capabilities: capabilities::server_capabilities(),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "Glint language server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        self.documents.clear();
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let language = util::detect_language(&uri, &params.text_document.language_id);
        tracing::debug!("did_open {} ({})", uri, language);

        let doc = Document::new(
            params.text_document.text,
            language,
            params.text_document.version,
            &self.parser,
        );
        self.documents.insert(uri, Arc::new(doc));
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        if let Some(mut doc_ref) = self.documents.get_mut(&uri) {
            let doc = doc_ref.value_mut();
            if doc.is_stale(version) {
                tracing::debug!("ignoring stale change {} < {} for {}", version, doc.version, uri);
                return;
            }
            *doc = Arc::new(doc.apply_changes(&params.content_changes, version, &self.parser));
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.client
            .log_message(
                MessageType::LOG,
                format!("LSP Event: did_close uri={}", params.text_document.uri),
            )
            .await;
        self.documents.remove(&params.text_document.uri);
    }

    async fn document_highlight(
        &self,
        params: DocumentHighlightParams,
    ) -> Result<Option<Vec<DocumentHighlight>>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let pos = params.text_document_position_params.position;
        self.client
            .log_message(
                MessageType::LOG,
                format!(
                    "LSP Request: textDocument/documentHighlight uri={} pos={}:{}",
                    uri, pos.line, pos.character
                ),
            )
            .await;
        let result = highlight::highlight(self, params).await;
        match &result {
            Ok(Some(h)) => {
                self.client
                    .log_message(
                        MessageType::LOG,
                        format!("LSP Response: found {} highlights", h.len()),
                    )
                    .await
            }
            Ok(None) => {
                self.client
                    .log_message(MessageType::LOG, "LSP Response: no highlights")
                    .await
            }
            Err(e) => {
                self.client
                    .log_message(MessageType::ERROR, format!("LSP Error: {}", e))
                    .await
            }
        }
        result
    }
}

pub async fn run_server() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let parser = Arc::new(RubyParser::new()?);

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) =
        tower_lsp::LspService::new(move |client| LspServer::new(client, parser.clone()));
    tower_lsp::Server::new(stdin, stdout, socket)
        .serve(service)
        .await;

    Ok(())
}
