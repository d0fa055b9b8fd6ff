//! Data types used throughout the SymtagsLSP server.

use serde::Serialize;

/// An indexed service definition.
///
/// Unlike the borrowed views the extraction helpers hand out, records
/// are owned snapshots so the index can outlive the syntax trees it
/// was built from.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceRecord {
    /// The service id (the key under `services:`), e.g. `app.loader`.
    pub id: String,
    /// The `class` attribute, if the definition has one.
    pub class: Option<String>,
    /// Distinct tag names attached to the service, in document order.
    pub tags: Vec<String>,
    /// URI of the file the definition lives in.
    pub uri: String,
    /// Zero-based line of the service key.
    pub line: u32,
}
