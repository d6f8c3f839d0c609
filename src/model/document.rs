//! Document-level types.

use serde::{Deserialize, Deserializer};
use serde_json::{json, Value};

use super::{decode, Block};
use crate::render;

/// A decoded ADF document.
///
/// This is the root of the node tree: an ordered sequence of top-level block
/// nodes plus the format version. The tree is immutable once decoded; each
/// render walks it without mutating or caching anything.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// ADF version; carried through but not enforced beyond being present
    pub version: i64,

    /// Top-level blocks in reading order
    pub content: Vec<Block>,
}

impl Document {
    /// Create a document from top-level blocks.
    pub fn new(content: Vec<Block>) -> Self {
        Self {
            version: 1,
            content,
        }
    }

    /// Check if the document has no content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get the number of top-level blocks.
    pub fn block_count(&self) -> usize {
        self.content.len()
    }

    /// Convert this document to formatted plain text.
    pub fn to_plain_text(&self) -> String {
        render::to_text(self)
    }

    /// Build the one-paragraph ADF payload used when writing a rich-text
    /// field (e.g. a ticket description at creation time).
    ///
    /// This is the only write path; there is no general serializer.
    pub fn simple(text: impl Into<String>) -> Value {
        json!({
            "type": "doc",
            "version": 1,
            "content": [
                {
                    "type": "paragraph",
                    "content": [
                        {
                            "type": "text",
                            "text": text.into(),
                        }
                    ]
                }
            ]
        })
    }
}

// Deserialization goes through the strict tree decoder so that response-shape
// structs can embed `Option<Document>` with plain derives while keeping the
// unknown-node fallback and path-tagged errors.
impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decode::document(&value).map_err(serde::de::Error::custom)
    }
}
