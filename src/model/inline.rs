//! Inline node types.

use super::Media;

/// Inline content within a paragraph or heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// A literal text run
    Text(String),

    /// A forced line break within the paragraph
    HardBreak,

    /// A smart-link card, rendered as an angle-bracketed URL
    InlineCard {
        /// Target URL
        url: String,
    },

    /// An inline media reference
    MediaInline(Media),

    /// An inline node with an unrecognized `type` discriminator
    Unknown {
        /// The original discriminator value
        node_type: String,
    },
}

impl Inline {
    /// Create a text run.
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text(text.into())
    }

    /// The literal text of a [`Inline::Text`] run, or `None`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Inline::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The ADF wire name of this node's discriminator.
    pub fn type_name(&self) -> &str {
        match self {
            Inline::Text(_) => "text",
            Inline::HardBreak => "hardBreak",
            Inline::InlineCard { .. } => "inlineCard",
            Inline::MediaInline(_) => "mediaInline",
            Inline::Unknown { node_type } => node_type,
        }
    }
}
