//! # unadf
//!
//! Atlassian Document Format (ADF) conversion to readable plain text.
//!
//! ADF is the recursive, typed JSON tree Jira and Confluence use for
//! rich-text fields such as issue descriptions and comments. This library
//! decodes such a tree into a closed set of node types and renders it as
//! formatted plain text: headings, bullet and numbered lists, block quotes,
//! fenced code blocks, width-aligned tables and media placeholders.
//!
//! ## Quick Start
//!
//! ```
//! let json = r#"{
//!     "type": "doc",
//!     "version": 1,
//!     "content": [
//!         {"type": "paragraph", "content": [{"type": "text", "text": "hello"}]}
//!     ]
//! }"#;
//!
//! let text = unadf::render_str(json).unwrap();
//! assert_eq!(text, "hello");
//! ```
//!
//! ## Behavior
//!
//! - **Unknown nodes never break a document.** A node whose `type` is not in
//!   the known set renders as a `[未知のノード: …]` placeholder, so future ADF
//!   extensions degrade gracefully.
//! - **Known nodes are decoded strictly.** A `heading` without a level or a
//!   `media` reference without its collection fails the whole decode with a
//!   path-tagged [`Error::MalformedNode`]; there is no partial output.
//! - **Rendering is pure.** No I/O, no shared state; documents can be
//!   rendered concurrently from any number of threads.

pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Block, Document, Inline, ListItem, ListNode, Media, MediaGroupNode, MediaKind, MediaLayout,
    Table, TableCell, TableRow,
};
pub use render::to_text;

use serde_json::Value;
use std::path::Path;

/// Decode an ADF document from a JSON value.
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let value = json!({"type": "doc", "version": 1, "content": []});
/// let doc = unadf::decode_value(&value).unwrap();
/// assert!(doc.is_empty());
/// ```
pub fn decode_value(value: &Value) -> Result<Document> {
    model::decode_document(value)
}

/// Decode an ADF document from a JSON string.
pub fn decode_str(json: &str) -> Result<Document> {
    let value: Value = serde_json::from_str(json)?;
    decode_value(&value)
}

/// Decode and render an ADF document from a JSON value.
pub fn render_value(value: &Value) -> Result<String> {
    Ok(to_text(&decode_value(value)?))
}

/// Decode and render an ADF document from a JSON string.
///
/// # Example
///
/// ```
/// let json = r#"{"type": "doc", "version": 1, "content": [
///     {"type": "rule"}
/// ]}"#;
/// assert_eq!(unadf::render_str(json).unwrap(), "---");
/// ```
pub fn render_str(json: &str) -> Result<String> {
    Ok(to_text(&decode_str(json)?))
}

/// Read an ADF JSON file and render it to plain text.
pub fn render_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let json = std::fs::read_to_string(path)?;
    render_str(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_str_trivial() {
        let json = r#"{"type":"doc","version":1,"content":[
            {"type":"paragraph","content":[{"type":"text","text":"hello"}]}
        ]}"#;
        assert_eq!(render_str(json).unwrap(), "hello");
    }

    #[test]
    fn test_render_str_invalid_json() {
        let result = render_str("{not json");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_render_value_malformed_node() {
        let value = json!({
            "type": "doc",
            "version": 1,
            "content": [{"type": "expand", "content": []}]
        });
        let result = render_value(&value);
        assert!(matches!(result, Err(Error::MalformedNode { .. })));
    }

    #[test]
    fn test_decode_then_render_separately() {
        let value = json!({
            "type": "doc",
            "version": 1,
            "content": [{"type": "heading", "attrs": {"level": 2},
                         "content": [{"type": "text", "text": "t"}]}]
        });
        let doc = decode_value(&value).unwrap();
        assert_eq!(doc.block_count(), 1);
        assert_eq!(to_text(&doc), "## t");
        // Renders are independent and deterministic.
        assert_eq!(to_text(&doc), doc.to_plain_text());
    }
}
