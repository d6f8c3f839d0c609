//! Block-level node types.

use super::{Inline, Media, MediaLayout, Table};

/// A block-level ADF node.
///
/// Unrecognized `type` discriminators decode to [`Block::Unknown`] instead of
/// failing the document, so future ADF extensions degrade to a placeholder
/// rather than breaking rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// A paragraph of inline content
    Paragraph {
        /// Inline children in reading order
        content: Vec<Inline>,
    },

    /// A heading (level 1-6)
    Heading {
        /// Heading level
        level: u8,
        /// Inline children; only text runs contribute to output
        content: Vec<Inline>,
    },

    /// An unordered list
    BulletList {
        /// List entries
        items: Vec<ListNode>,
    },

    /// An ordered list, numbered from 1 in source order
    OrderedList {
        /// List entries
        items: Vec<ListNode>,
    },

    /// A block quote with recursive block content
    Blockquote {
        /// Quoted blocks
        content: Vec<Block>,
    },

    /// A horizontal divider
    Rule,

    /// A collapsible panel, always rendered open
    Expand {
        /// Panel title
        title: String,
        /// Panel body
        content: Vec<Block>,
    },

    /// A fenced code block; content is preserved verbatim
    CodeBlock {
        /// Syntax language, `None` when the node carries no attrs
        language: Option<String>,
        /// Inline children; only text runs contribute to output
        content: Vec<Inline>,
    },

    /// A table
    Table(Table),

    /// A single media item with a layout hint
    MediaSingle {
        /// Layout from `attrs.layout`
        layout: MediaLayout,
        /// Wrapped media nodes (the schema says exactly one; tolerated as a list)
        media: Vec<Media>,
    },

    /// A group of media items and inline nodes
    MediaGroup {
        /// Group children
        content: Vec<MediaGroupNode>,
    },

    /// A block node with an unrecognized `type` discriminator
    Unknown {
        /// The original discriminator value
        node_type: String,
    },
}

impl Block {
    /// Create a paragraph with a single text run.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph {
            content: vec![Inline::text(text)],
        }
    }

    /// Create a heading with a single text run.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            content: vec![Inline::text(text)],
        }
    }
}

/// A child of a bullet or ordered list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListNode {
    /// A proper `listItem` node
    Item(ListItem),

    /// A list child with an unrecognized `type` discriminator
    Unknown {
        /// The original discriminator value
        node_type: String,
    },
}

/// A list item with recursive block content.
///
/// Items may contain nested lists, paragraphs, tables and so on.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    /// Item content in reading order
    pub content: Vec<Block>,
}

impl ListItem {
    /// Create a list item.
    pub fn new(content: Vec<Block>) -> Self {
        Self { content }
    }
}

/// A child of a `mediaGroup` node.
///
/// The group mixes block-ish `media` nodes with paragraph-level inline
/// nodes; both are carried as decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaGroupNode {
    /// A bare media node
    Media(Media),

    /// An inline node (text, hard break, inline card, inline media)
    Inline(Inline),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_constructor() {
        let block = Block::paragraph("hello");
        match block {
            Block::Paragraph { content } => {
                assert_eq!(content, vec![Inline::text("hello")]);
            }
            other => panic!("expected paragraph, got {other:?}"),
        }
    }

    #[test]
    fn test_heading_constructor() {
        let block = Block::heading(2, "title");
        assert!(matches!(block, Block::Heading { level: 2, .. }));
    }
}
