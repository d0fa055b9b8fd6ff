//! Service-definition discovery and the workspace service index.
//!
//! Discovery walks a parsed document for key/value pairs under a
//! top-level `services:` key, including environment-scoped
//! `when@<env>:` blocks and multi-document streams. The index side
//! scans the workspace's configured service directories and builds a
//! map from service id to an owned [`ServiceRecord`], so lookups keep
//! working without the originating trees.

use std::collections::HashMap;
use std::path::Path;

use ignore::WalkBuilder;
use tree_sitter::Node;

use crate::config::Settings;
use crate::document::YamlDocument;
use crate::node::{as_mapping, document_contents, key_text, mapping_pairs, pair_value};
use crate::tags::{collect_service_tags, yaml_key_value_as_string};
use crate::types::ServiceRecord;

/// Invoke `visit` with `(service id, key/value pair)` for every
/// service definition in the stream, in document order.
pub fn visit_service_definitions<'a, F>(source: &'a str, stream: Node<'a>, mut visit: F)
where
    F: FnMut(&'a str, Node<'a>),
{
    for content in document_contents(stream) {
        if let Some(mapping) = as_mapping(content) {
            visit_config_mapping(source, mapping, &mut visit);
        }
    }
}

fn visit_config_mapping<'a, F>(source: &'a str, mapping: Node<'a>, visit: &mut F)
where
    F: FnMut(&'a str, Node<'a>),
{
    for pair in mapping_pairs(mapping) {
        let Some(key) = key_text(source, pair) else {
            continue;
        };

        if key == "services" {
            let Some(services) = pair_value(pair).and_then(as_mapping) else {
                continue;
            };
            for service in mapping_pairs(services) {
                let Some(id) = key_text(source, service) else {
                    continue;
                };
                // `_defaults`, `_instanceof` and friends configure the
                // container, they do not define services.
                if id.is_empty() || id.starts_with('_') {
                    continue;
                }
                visit(id, service);
            }
        } else if key.starts_with("when@") {
            // Environment-scoped config: `when@dev:` holds its own
            // `services:` mapping one level down.
            if let Some(nested) = pair_value(pair).and_then(as_mapping) {
                visit_config_mapping(source, nested, visit);
            }
        }
    }
}

/// Extract owned records for every service definition in a document.
pub fn service_records(doc: &YamlDocument, uri: &str) -> Vec<ServiceRecord> {
    let source = doc.source();
    let mut records = Vec::new();
    visit_service_definitions(source, doc.root(), |id, service| {
        let class = pair_value(service)
            .and_then(|value| yaml_key_value_as_string(source, value, "class"))
            .map(str::to_string);
        let tags = collect_service_tags(source, service)
            .into_iter()
            .map(str::to_string)
            .collect();

        records.push(ServiceRecord {
            id: id.to_string(),
            class,
            tags,
            uri: uri.to_string(),
            line: service.start_position().row as u32,
        });
    });
    records
}

/// Scan the workspace's service directories for YAML files and build
/// the service index. Unreadable or unparseable files are skipped.
pub fn scan_workspace(root: &Path, settings: &Settings) -> HashMap<String, ServiceRecord> {
    let mut index = HashMap::new();

    for dir in &settings.service_dirs {
        let base = root.join(dir);
        if !base.is_dir() {
            continue;
        }

        for entry in WalkBuilder::new(&base).build().flatten() {
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let path = entry.path();
            if !is_yaml_file(path) {
                continue;
            }
            let Ok(content) = std::fs::read_to_string(path) else {
                continue;
            };
            let Some(doc) = YamlDocument::parse(content) else {
                continue;
            };

            let uri = format!("file://{}", path.display());
            for record in service_records(&doc, &uri) {
                index.insert(record.id.clone(), record);
            }
        }
    }

    index
}

fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext, "yaml" | "yml"))
}
