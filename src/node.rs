//! Helpers for walking tree-sitter YAML syntax trees.
//!
//! The tree-sitter grammar wraps every value in a `block_node` or
//! `flow_node` container and splits mappings, sequences, and scalars
//! into block and flow variants. These helpers hide that split so the
//! extraction code can ask for "the mapping here" or "the scalar text
//! here" without caring which concrete syntax was used.
//!
//! All functions take nodes by value (`Node` is a cheap copyable view
//! into the externally-owned tree) and never mutate the tree.

use tree_sitter::Node;

use crate::scalar::strip_scalar_quotes;

/// Raw source text covered by a node. Returns `""` for ranges that are
/// not valid UTF-8 slices, which cannot happen for trees parsed from a
/// Rust `&str`.
pub fn node_text<'s>(source: &'s str, node: Node) -> &'s str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// Resolve a node to the mapping it represents, unwrapping one
/// `block_node`/`flow_node` container if needed.
///
/// Returns `None` when the node is not mapping-shaped, so structurally
/// broken documents simply produce no results.
pub fn as_mapping(node: Node) -> Option<Node> {
    match node.kind() {
        "block_mapping" | "flow_mapping" => Some(node),
        "block_node" | "flow_node" => {
            let mut cursor = node.walk();
            node.named_children(&mut cursor)
                .find(|child| matches!(child.kind(), "block_mapping" | "flow_mapping"))
        }
        _ => None,
    }
}

/// Resolve a node to the sequence it represents, unwrapping one
/// `block_node`/`flow_node` container if needed.
pub fn as_sequence(node: Node) -> Option<Node> {
    match node.kind() {
        "block_sequence" | "flow_sequence" => Some(node),
        "block_node" | "flow_node" => {
            let mut cursor = node.walk();
            node.named_children(&mut cursor)
                .find(|child| matches!(child.kind(), "block_sequence" | "flow_sequence"))
        }
        _ => None,
    }
}

/// All key/value pairs of a mapping node, in document order.
pub fn mapping_pairs(mapping: Node) -> Vec<Node> {
    let mut cursor = mapping.walk();
    mapping
        .named_children(&mut cursor)
        .filter(|child| matches!(child.kind(), "block_mapping_pair" | "flow_pair"))
        .collect()
}

/// The element value nodes of a sequence, in document order.
///
/// For block sequences each `- item` line contributes the node after
/// the dash; for flow sequences (`[a, b]`) the entries themselves.
pub fn sequence_values(sequence: Node) -> Vec<Node> {
    let mut values = Vec::new();
    let mut cursor = sequence.walk();
    match sequence.kind() {
        "block_sequence" => {
            for item in sequence.named_children(&mut cursor) {
                if item.kind() != "block_sequence_item" {
                    continue;
                }
                let mut item_cursor = item.walk();
                if let Some(value) = item
                    .named_children(&mut item_cursor)
                    .find(|child| matches!(child.kind(), "block_node" | "flow_node"))
                {
                    values.push(value);
                }
            }
        }
        "flow_sequence" => {
            for entry in sequence.named_children(&mut cursor) {
                if matches!(entry.kind(), "flow_node" | "flow_pair") {
                    values.push(entry);
                }
            }
        }
        _ => {}
    }
    values
}

/// The key side of a key/value pair node.
pub fn pair_key(pair: Node) -> Option<Node> {
    pair.child_by_field_name("key")
}

/// The value side of a key/value pair node. `None` for keys without a
/// value (`foo:` followed by nothing).
pub fn pair_value(pair: Node) -> Option<Node> {
    pair.child_by_field_name("value")
}

/// Normalized text of a pair's key. Quoted keys (`'foo':`) compare
/// equal to their bare spelling.
pub fn key_text<'s>(source: &'s str, pair: Node) -> Option<&'s str> {
    let key = pair_key(pair)?;
    let scalar = scalar_node(key)?;
    Some(strip_scalar_quotes(node_text(source, scalar)))
}

/// Resolve a node to the scalar it represents, unwrapping one
/// `block_node`/`flow_node` container if needed. Mappings and
/// sequences yield `None`.
pub fn scalar_node(node: Node) -> Option<Node> {
    match node.kind() {
        "plain_scalar" | "single_quote_scalar" | "double_quote_scalar" | "block_scalar" => {
            Some(node)
        }
        "block_node" | "flow_node" => {
            let mut cursor = node.walk();
            node.named_children(&mut cursor).find(|child| {
                matches!(
                    child.kind(),
                    "plain_scalar" | "single_quote_scalar" | "double_quote_scalar" | "block_scalar"
                )
            })
        }
        _ => None,
    }
}

/// Normalized scalar text of a node, or `None` when the node is not
/// scalar-shaped.
pub fn scalar_text<'s>(source: &'s str, node: Node) -> Option<&'s str> {
    let scalar = scalar_node(node)?;
    Some(strip_scalar_quotes(node_text(source, scalar)))
}

/// Content nodes of every document in a stream, in order. YAML files
/// may hold several documents separated by `---`.
pub fn document_contents(stream: Node) -> Vec<Node> {
    let mut contents = Vec::new();
    let mut cursor = stream.walk();
    for document in stream.named_children(&mut cursor) {
        if document.kind() != "document" {
            continue;
        }
        let mut doc_cursor = document.walk();
        if let Some(content) = document
            .named_children(&mut doc_cursor)
            .find(|child| matches!(child.kind(), "block_node" | "flow_node"))
        {
            contents.push(content);
        }
    }
    contents
}

/// Content node of the first document in a stream.
pub fn first_document(stream: Node) -> Option<Node> {
    document_contents(stream).into_iter().next()
}

/// Key/value pairs of the first document's top-level mapping. This is
/// the entry point tests and callers use to grab a key/value pair out
/// of a freshly parsed snippet.
pub fn top_level_pairs(stream: Node) -> Vec<Node> {
    first_document(stream)
        .and_then(as_mapping)
        .map(mapping_pairs)
        .unwrap_or_default()
}
