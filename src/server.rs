//! LSP server trait implementation.
//!
//! This module contains the `impl LanguageServer for Backend` block:
//! initialize/initialized, document sync, and diagnostics publishing.
//! Completion and navigation are intentionally not provided; the
//! server's job is to keep the document model and service index fresh
//! for the extraction engine.

use tower_lsp::LanguageServer;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;

use crate::Backend;
use crate::config::Settings;

impl Backend {
    async fn publish_diagnostics_for(&self, uri: Url) {
        let diagnostics = self.diagnostics_for_uri(uri.as_ref());
        if let Some(client) = self.client() {
            client.publish_diagnostics(uri, diagnostics, None).await;
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        // Extract and store the workspace root path
        let workspace_root = params
            .root_uri
            .as_ref()
            .and_then(|uri| uri.to_file_path().ok());

        if let Some(root) = workspace_root {
            // initializationOptions win over the workspace config file.
            let settings = params
                .initialization_options
                .and_then(Settings::from_initialization_options)
                .unwrap_or_else(|| Settings::load(&root));
            self.set_workspace(root, settings);
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                ..ServerCapabilities::default()
            },
            server_info: Some(ServerInfo {
                name: self.get_name().to_string(),
                version: Some(self.get_version().to_string()),
            }),
            offset_encoding: None,
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.rebuild_index();
        let count = self.indexed_service_count();
        tracing::info!(services = count, "workspace index built");

        self.log(
            MessageType::INFO,
            format!("SymtagsLSP initialized! Indexed {} service(s)", count),
        )
        .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let doc = params.text_document;
        let uri = doc.uri;

        self.update_document(uri.as_ref(), &doc.text);
        self.publish_diagnostics_for(uri.clone()).await;

        self.log(MessageType::INFO, format!("Opened file: {}", uri))
            .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;

        // Full sync: the last change carries the whole document.
        if let Some(change) = params.content_changes.into_iter().last() {
            self.update_document(uri.as_ref(), &change.text);
            self.publish_diagnostics_for(uri).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;

        self.remove_document(uri.as_ref());

        // Clear any published diagnostics for the closed file.
        if let Some(client) = self.client() {
            client.publish_diagnostics(uri.clone(), Vec::new(), None).await;
        }

        self.log(MessageType::INFO, format!("Closed file: {}", uri))
            .await;
    }

    async fn did_change_watched_files(&self, _: DidChangeWatchedFilesParams) {
        // Service files changed on disk; rescan rather than patch.
        self.rebuild_index();
        tracing::debug!(
            services = self.indexed_service_count(),
            "workspace index rebuilt"
        );
    }
}
