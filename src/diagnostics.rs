//! Inspections over YAML service definitions.

use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity};

use crate::document::{YamlDocument, node_range};
use crate::node::{as_mapping, as_sequence, key_text, mapping_pairs, pair_value, sequence_values};
use crate::services::visit_service_definitions;
use crate::tags::yaml_key_value_as_string;

/// Diagnostic source reported to the client.
pub const DIAGNOSTIC_SOURCE: &str = "symtags";

/// Flag tag blocks that the container will silently drop: entries in a
/// `tags` sequence whose `name` key is missing or empty.
///
/// This mirrors the walker's skip policy, so every warned block is
/// exactly one that [`crate::tags::visit_tags_on_service_definition`]
/// refuses to emit.
pub fn missing_tag_name_diagnostics(doc: &YamlDocument) -> Vec<Diagnostic> {
    let source = doc.source();
    let mut diagnostics = Vec::new();

    visit_service_definitions(source, doc.root(), |id, service| {
        let Some(body) = pair_value(service).and_then(as_mapping) else {
            return;
        };
        let Some(tags_pair) = mapping_pairs(body)
            .into_iter()
            .find(|pair| key_text(source, *pair) == Some("tags"))
        else {
            return;
        };
        let Some(sequence) = pair_value(tags_pair).and_then(as_sequence) else {
            return;
        };

        for entry in sequence_values(sequence) {
            let Some(block) = as_mapping(entry) else {
                continue;
            };
            match yaml_key_value_as_string(source, block, "name") {
                Some(name) if !name.is_empty() => {}
                _ => diagnostics.push(Diagnostic {
                    range: node_range(block),
                    severity: Some(DiagnosticSeverity::WARNING),
                    source: Some(DIAGNOSTIC_SOURCE.to_string()),
                    message: format!("tag on service \"{id}\" has no name and will be ignored"),
                    ..Diagnostic::default()
                }),
            }
        }
    });

    diagnostics
}
