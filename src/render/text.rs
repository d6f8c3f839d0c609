//! Plain text rendering for ADF documents.
//!
//! A pure, deterministic depth-first walk over the decoded tree. Each node
//! contributes zero or more output lines; indentation is two spaces per
//! nesting level, prefixed onto every emitted line. The final output joins
//! the lines with `\n` and adds nothing else.

use crate::model::{Block, Document, Inline, ListNode, Media, MediaGroupNode};

use super::table::render_table;

/// Convert a document to formatted plain text.
///
/// Rendering never fails on a decoded tree: every variant, including the
/// unknown-node placeholder and all empty-content cases, has a defined
/// output.
pub fn to_text(doc: &Document) -> String {
    render_blocks(&doc.content, 0).join("\n")
}

/// Render a block sequence into output lines at the given indent level.
pub(crate) fn render_blocks(blocks: &[Block], indent: usize) -> Vec<String> {
    let indent_str = "  ".repeat(indent);
    let mut lines = Vec::new();

    for block in blocks {
        match block {
            Block::Paragraph { content } => {
                let buffer = inline_buffer(content);
                let trimmed = buffer.trim();
                if trimmed.is_empty() {
                    // Empty paragraphs keep their vertical spacing.
                    lines.push(indent_str.clone());
                } else {
                    for line in trimmed.lines() {
                        lines.push(format!("{indent_str}{}", line.trim()));
                    }
                }
            }

            Block::Heading { level, content } => {
                let text: String = content.iter().filter_map(Inline::as_text).collect();
                let marks = "#".repeat(*level as usize);
                lines.push(format!("{indent_str}{marks} {}", text.trim()));
            }

            Block::MediaSingle { layout, media } => {
                let info: String = media
                    .iter()
                    .map(|m| format!("<{}> ({})", m.url_or_id(), m.kind.as_str()))
                    .collect();
                lines.push(format!(
                    "{indent_str}[メディア: {} (レイアウト: {})]",
                    info.trim(),
                    layout.as_str()
                ));
            }

            Block::Blockquote { content } => {
                lines.push(format!("{indent_str}>"));
                lines.extend(render_blocks(content, indent + 1));
            }

            Block::Rule => lines.push(format!("{indent_str}---")),

            Block::BulletList { items } => {
                for node in items {
                    match node {
                        ListNode::Item(item) => {
                            let mut item_lines = render_blocks(&item.content, indent + 1);
                            // Bullet replaces the first line's own indent;
                            // continuation lines realign under the bullet.
                            if let Some(first) = item_lines.first_mut() {
                                *first = format!("{indent_str}● {}", first.trim_start());
                            }
                            for line in item_lines.iter_mut().skip(1) {
                                *line = format!("{indent_str}  {}", line.trim_start());
                            }
                            lines.extend(item_lines);
                        }
                        ListNode::Unknown { node_type } => {
                            lines.push(unknown_placeholder(&indent_str, node_type));
                        }
                    }
                }
            }

            Block::OrderedList { items } => {
                for (index, node) in items.iter().enumerate() {
                    match node {
                        ListNode::Item(item) => {
                            let mut item_lines = render_blocks(&item.content, indent + 1);
                            if let Some(first) = item_lines.first_mut() {
                                *first =
                                    format!("{indent_str}{}. {}", index + 1, first.trim_start());
                            }
                            // Continuation padding stays three spaces even past
                            // item 9; downstream consumers rely on the fixed width.
                            for line in item_lines.iter_mut().skip(1) {
                                *line = format!("{indent_str}   {}", line.trim_start());
                            }
                            lines.extend(item_lines);
                        }
                        ListNode::Unknown { node_type } => {
                            lines.push(unknown_placeholder(&indent_str, node_type));
                        }
                    }
                }
            }

            Block::Expand { title, content } => {
                lines.push(format!("{indent_str}--- 展開パネル: {title} ---"));
                lines.extend(render_blocks(content, indent + 1));
                lines.push(format!("{indent_str}--- 展開パネル終了 ---"));
            }

            Block::CodeBlock { language, content } => {
                let lang = language
                    .as_deref()
                    .filter(|l| !l.is_empty())
                    .unwrap_or("plaintext");
                let code: String = content.iter().filter_map(Inline::as_text).collect();
                lines.push(format!("{indent_str}``` {lang}"));
                for line in code.lines() {
                    // Verbatim: no trimming inside the fence.
                    lines.push(format!("{indent_str}{line}"));
                }
                lines.push(format!("{indent_str}```"));
            }

            Block::Table(table) => lines.extend(render_table(table, indent)),

            Block::MediaGroup { content } => {
                let inner_indent = "  ".repeat(indent + 1);
                lines.push(format!("{indent_str}--- メディアグループ ---"));
                for child in content {
                    lines.push(media_group_line(&inner_indent, child));
                }
                lines.push(format!("{indent_str}--- メディアグループ終了 ---"));
            }

            Block::Unknown { node_type } => {
                lines.push(unknown_placeholder(&indent_str, node_type));
            }
        }
    }

    lines
}

/// Concatenate a paragraph's inline children into one text buffer.
fn inline_buffer(content: &[Inline]) -> String {
    let mut buffer = String::new();
    for node in content {
        match node {
            Inline::Text(text) => buffer.push_str(text),
            Inline::HardBreak => buffer.push('\n'),
            Inline::InlineCard { url } => {
                buffer.push('<');
                buffer.push_str(url);
                buffer.push('>');
            }
            Inline::MediaInline(media) => buffer.push_str(&inline_media_label(media)),
            Inline::Unknown { node_type } => {
                buffer.push_str(&format!("[未知のノード: {node_type}]"));
            }
        }
    }
    buffer
}

/// The bracketed placeholder for inline media and bare media in groups.
fn inline_media_label(media: &Media) -> String {
    let locator = match &media.url {
        Some(url) => url.clone(),
        None => format!("ID:{}", media.id),
    };
    format!("[インラインメディア: {locator} ({})]", media.kind.as_str())
}

/// One line for a `mediaGroup` child: media references get the inline-media
/// placeholder, everything else falls back to the unknown-node placeholder.
fn media_group_line(indent_str: &str, node: &MediaGroupNode) -> String {
    match node {
        MediaGroupNode::Media(media) => format!("{indent_str}{}", inline_media_label(media)),
        MediaGroupNode::Inline(Inline::MediaInline(media)) => {
            format!("{indent_str}{}", inline_media_label(media))
        }
        MediaGroupNode::Inline(other) => unknown_placeholder(indent_str, other.type_name()),
    }
}

fn unknown_placeholder(indent_str: &str, node_type: &str) -> String {
    format!("{indent_str}[未知のノード: {node_type}]")
}
