//! YAML document model.
//!
//! [`YamlDocument`] owns a file's source text together with its parsed
//! tree-sitter syntax tree and hands out borrowed [`Node`] views for
//! the extraction helpers. It also carries the LSP position/offset
//! conversions that turn editor cursors into tree nodes.

use memchr::{memchr, memchr_iter};
use tower_lsp::lsp_types::{Position, Range};
use tree_sitter::{Node, Parser, Point, Tree};

use crate::tags;

/// A parsed YAML file: source text plus syntax tree.
pub struct YamlDocument {
    text: String,
    tree: Tree,
}

impl YamlDocument {
    /// Parse YAML source into a document.
    ///
    /// Returns `None` only when the grammar cannot be loaded or the
    /// parse is aborted; syntactically broken YAML still yields a tree
    /// (with error nodes) and stays queryable.
    pub fn parse(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_yaml::LANGUAGE.into()).ok()?;
        let tree = parser.parse(&text, None)?;
        Some(Self { text, tree })
    }

    /// The document's source text.
    pub fn source(&self) -> &str {
        &self.text
    }

    /// The root `stream` node of the syntax tree.
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// The smallest syntax node covering a byte offset. This is the
    /// document-model resolver that turns a cursor into a tree node.
    pub fn node_at_offset(&self, offset: usize) -> Option<Node<'_>> {
        self.root().descendant_for_byte_range(offset, offset)
    }

    /// The service definition enclosing a byte offset, if the offset
    /// sits anywhere inside one (its `tags` block, its `class` line,
    /// or the service key itself).
    pub fn service_at_offset(&self, offset: usize) -> Option<Node<'_>> {
        let node = self.node_at_offset(offset)?;
        tags::find_service_in_context(&self.text, node)
    }
}

/// Convert an LSP Position (line, character) to a byte offset.
///
/// LSP characters are UTF-16 code units; columns are treated as
/// single-character here, which is accurate for the ASCII that makes
/// up service config files. Positions past the end of a line or past
/// the last line clamp to the nearest valid offset.
pub fn position_to_offset(text: &str, position: Position) -> usize {
    let mut line_start = 0usize;
    if position.line > 0 {
        let mut line = 0u32;
        let mut found = false;
        for newline in memchr_iter(b'\n', text.as_bytes()) {
            line += 1;
            if line == position.line {
                line_start = newline + 1;
                found = true;
                break;
            }
        }
        if !found {
            return text.len();
        }
    }

    let line_end = memchr(b'\n', &text.as_bytes()[line_start..])
        .map(|i| line_start + i)
        .unwrap_or(text.len());
    let line_text = &text[line_start..line_end];

    let byte_col = line_text
        .char_indices()
        .nth(position.character as usize)
        .map(|(idx, _)| idx)
        .unwrap_or(line_text.len());
    line_start + byte_col
}

/// Convert a tree-sitter point to an LSP position. Both are zero-based
/// line/column, so this is a straight field mapping.
pub fn point_to_position(point: Point) -> Position {
    Position {
        line: point.row as u32,
        character: point.column as u32,
    }
}

/// The LSP range covered by a syntax node.
pub fn node_range(node: Node) -> Range {
    Range {
        start: point_to_position(node.start_position()),
        end: point_to_position(node.end_position()),
    }
}
