//! Service-tag extraction from Symfony YAML service definitions.
//!
//! A service definition is a key/value pair whose value mapping may
//! carry a `tags` sequence:
//!
//! ```yaml
//! services:
//!   app.loader:
//!     class: App\Routing\Loader
//!     tags:
//!       - { name: routing.loader, method: load }
//! ```
//!
//! [`visit_tags_on_service_definition`] walks that sequence and hands
//! one [`ServiceTag`] per well-formed tag block to a caller-supplied
//! closure. Blocks without a `name` key are not tags as far as the
//! container is concerned and are skipped. Malformed structure (no
//! `tags` key, `tags` not a sequence, entries that are not mappings)
//! results in zero visits rather than an error, so the walker stays
//! usable on half-typed documents.

use tree_sitter::Node;

use crate::node::{
    as_mapping, as_sequence, key_text, mapping_pairs, pair_value, scalar_text, sequence_values,
};

/// One tag block attached to a service definition.
///
/// A borrowed view: the record holds the tag-block mapping node and the
/// document source, and resolves attributes lazily against the tree.
/// The name is the tag's own `name` attribute value (e.g.
/// `kernel.event_listener`), not the id of the owning service.
#[derive(Debug, Clone, Copy)]
pub struct ServiceTag<'a> {
    name: &'a str,
    node: Node<'a>,
    source: &'a str,
}

impl<'a> ServiceTag<'a> {
    pub fn new(name: &'a str, node: Node<'a>, source: &'a str) -> Self {
        Self { name, node, source }
    }

    /// The tag name this record was constructed with.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Look up an attribute on the tag block by exact key match.
    ///
    /// Returns the normalized scalar value, or `None` when the key is
    /// not present. A key mapped to `''` yields `Some("")`, distinct
    /// from an absent key.
    pub fn attribute(&self, key: &str) -> Option<&'a str> {
        yaml_key_value_as_string(self.source, self.node, key)
    }

    /// The tag-block mapping node, for callers that need positions.
    pub fn node(&self) -> Node<'a> {
        self.node
    }
}

/// Walk the `tags` sequence of a service definition and invoke
/// `visit` once per tag block that carries a non-empty `name`, in
/// document order.
///
/// `service` is the service's key/value pair node (as returned by
/// [`find_service_in_context`] or service discovery). Anything that is
/// not shaped like a tagged service definition yields zero visits.
pub fn visit_tags_on_service_definition<'a, F>(source: &'a str, service: Node<'a>, mut visit: F)
where
    F: FnMut(ServiceTag<'a>),
{
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
        let Some(name) = yaml_key_value_as_string(source, block, "name") else {
            continue;
        };
        if name.is_empty() {
            continue;
        }
        visit(ServiceTag::new(name, block, source));
    }
}

/// Distinct tag names attached to a service definition, in first-seen
/// document order.
pub fn collect_service_tags<'a>(source: &'a str, service: Node<'a>) -> Vec<&'a str> {
    let mut names: Vec<&'a str> = Vec::new();
    visit_tags_on_service_definition(source, service, |tag| {
        if !names.contains(&tag.name()) {
            names.push(tag.name());
        }
    });
    names
}

/// Look up `key` among the direct entries of a mapping node and return
/// the normalized scalar value.
///
/// Key comparison is exact text match after quote stripping; no anchor
/// or alias resolution. Returns `None` when the key is absent, has no
/// value, or maps to a non-scalar.
pub fn yaml_key_value_as_string<'a>(source: &'a str, mapping: Node<'a>, key: &str) -> Option<&'a str> {
    let mapping = as_mapping(mapping)?;
    let pair = mapping_pairs(mapping)
        .into_iter()
        .find(|pair| key_text(source, *pair) == Some(key))?;
    scalar_text(source, pair_value(pair)?)
}

/// Climb from a node at some document offset to the enclosing service
/// definition: the nearest ancestor key/value pair that sits directly
/// inside a mapping owned by a key literally named `services`.
///
/// The climb does not stop at intermediate mappings, so a cursor deep
/// inside a `tags` block and a cursor inside a sibling `class` value
/// both resolve to the same service pair. Returns `None` when no
/// ancestor qualifies, e.g. outside any `services` root.
pub fn find_service_in_context<'a>(source: &str, node: Node<'a>) -> Option<Node<'a>> {
    let mut current = Some(node);
    while let Some(candidate) = current {
        if matches!(candidate.kind(), "block_mapping_pair" | "flow_pair")
            && enclosing_pair(candidate)
                .is_some_and(|owner| key_text(source, owner) == Some("services"))
        {
            return Some(candidate);
        }
        current = candidate.parent();
    }
    None
}

/// The nearest strictly-enclosing key/value pair of a node, skipping
/// the mapping and container nodes in between.
fn enclosing_pair(node: Node) -> Option<Node> {
    let mut current = node.parent();
    while let Some(candidate) = current {
        if matches!(candidate.kind(), "block_mapping_pair" | "flow_pair") {
            return Some(candidate);
        }
        current = candidate.parent();
    }
    None
}
