//! Symfony service-container intelligence for YAML configs.
//!
//! The core of the crate is the tag extraction engine in [`tags`]:
//! given a parsed YAML syntax tree, it locates a service definition,
//! walks its `tags` sequence, and hands structured [`ServiceTag`]
//! records to a visitor closure, tolerating bare, single-quoted, and
//! double-quoted scalars. [`document`] supplies the document model
//! (owned text + tree, offset-to-node resolution), [`services`] the
//! workspace-wide service discovery and index, and [`server`] the LSP
//! surface that keeps both fed.

pub mod config;
pub mod diagnostics;
pub mod document;
pub mod node;
pub mod scalar;
mod server;
pub mod services;
pub mod tags;
pub mod types;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use tower_lsp::Client;
use tower_lsp::lsp_types::{Diagnostic, MessageType};

pub use config::Settings;
pub use document::YamlDocument;
pub use scalar::strip_scalar_quotes;
pub use tags::{
    ServiceTag, collect_service_tags, find_service_in_context, visit_tags_on_service_definition,
    yaml_key_value_as_string,
};
pub use types::ServiceRecord;

pub struct Backend {
    name: String,
    version: String,
    client: Option<Client>,
    /// Maps a file URI to its parsed document (text + syntax tree).
    documents: Arc<Mutex<HashMap<String, YamlDocument>>>,
    workspace_root: Arc<Mutex<Option<PathBuf>>>,
    settings: Arc<Mutex<Settings>>,
    /// Maps a service id to its indexed definition, built by scanning
    /// the workspace's service directories.
    service_index: Arc<Mutex<HashMap<String, ServiceRecord>>>,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self::with_client(Some(client))
    }

    pub fn new_test() -> Self {
        Self::with_client(None)
    }

    /// Test constructor with a pre-set workspace root; builds the
    /// service index immediately instead of waiting for `initialized`.
    pub fn new_test_with_workspace(root: PathBuf, settings: Settings) -> Self {
        let backend = Self::with_client(None);
        *backend.workspace_root.lock() = Some(root);
        *backend.settings.lock() = settings;
        backend.rebuild_index();
        backend
    }

    fn with_client(client: Option<Client>) -> Self {
        Self {
            name: "SymtagsLSP".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            client,
            documents: Arc::new(Mutex::new(HashMap::new())),
            workspace_root: Arc::new(Mutex::new(None)),
            settings: Arc::new(Mutex::new(Settings::default())),
            service_index: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }

    pub(crate) fn client(&self) -> Option<&Client> {
        self.client.as_ref()
    }

    pub(crate) fn set_workspace(&self, root: PathBuf, settings: Settings) {
        *self.workspace_root.lock() = Some(root);
        *self.settings.lock() = settings;
    }

    /// Re-parse a file's content and refresh its document-map entry.
    pub(crate) fn update_document(&self, uri: &str, text: &str) {
        match YamlDocument::parse(text) {
            Some(doc) => {
                self.documents.lock().insert(uri.to_string(), doc);
            }
            None => {
                // Text that no longer parses must not leave a stale tree behind.
                self.documents.lock().remove(uri);
            }
        }
    }

    pub(crate) fn remove_document(&self, uri: &str) {
        self.documents.lock().remove(uri);
    }

    /// Rescan the workspace's service directories into the index.
    pub(crate) fn rebuild_index(&self) {
        let Some(root) = self.workspace_root.lock().clone() else {
            return;
        };
        let settings = self.settings.lock().clone();
        *self.service_index.lock() = services::scan_workspace(&root, &settings);
    }

    /// Public helper for tests: whether a URI has a parsed document.
    pub fn has_document(&self, uri: &str) -> bool {
        self.documents.lock().contains_key(uri)
    }

    /// Public helper for tests: `(service id, tag names)` for every
    /// service defined in an open document.
    pub fn service_tags_for_uri(&self, uri: &str) -> Option<Vec<(String, Vec<String>)>> {
        let documents = self.documents.lock();
        let doc = documents.get(uri)?;
        let source = doc.source();

        let mut result = Vec::new();
        services::visit_service_definitions(source, doc.root(), |id, service| {
            let tags = collect_service_tags(source, service)
                .into_iter()
                .map(str::to_string)
                .collect();
            result.push((id.to_string(), tags));
        });
        Some(result)
    }

    /// Current diagnostics for an open document.
    pub fn diagnostics_for_uri(&self, uri: &str) -> Vec<Diagnostic> {
        let documents = self.documents.lock();
        documents
            .get(uri)
            .map(diagnostics::missing_tag_name_diagnostics)
            .unwrap_or_default()
    }

    /// Look up an indexed service definition by id.
    pub fn get_service(&self, id: &str) -> Option<ServiceRecord> {
        self.service_index.lock().get(id).cloned()
    }

    /// Number of services in the workspace index.
    pub fn indexed_service_count(&self) -> usize {
        self.service_index.lock().len()
    }

    pub(crate) async fn log(&self, typ: MessageType, message: String) {
        if let Some(client) = &self.client {
            client.log_message(typ, message).await;
        }
    }
}
