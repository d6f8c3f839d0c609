//! Strict decoder from raw JSON values into the typed node tree.
//!
//! Variant discrimination is by the node's `type` field. Unknown
//! discriminators never fail the document: they decode to `Unknown`
//! placeholder nodes so an evolving ADF schema degrades gracefully. A known
//! discriminator with missing or malformed required attributes is a hard
//! failure, reported with the node type and its index path from the root.
//! Decoding stops at the first malformed child.

use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::{
    Block, Document, Inline, ListItem, ListNode, Media, MediaGroupNode, MediaLayout, Table,
    TableCell, TableRow,
};
use crate::error::{Error, Result};

/// Decode a full ADF document from a JSON value.
pub(crate) fn document(value: &Value) -> Result<Document> {
    let obj = as_object(value, "doc")?;
    let node_type = type_of(obj, "doc")?;
    if node_type != "doc" {
        return Err(Error::malformed(
            node_type,
            "expected top-level `type` to be \"doc\"",
            "doc",
        ));
    }
    let version = obj
        .get("version")
        .and_then(Value::as_i64)
        .ok_or_else(|| Error::malformed("doc", "missing required integer `version`", "doc"))?;
    let content = required_content(obj, "doc", "doc")?
        .iter()
        .enumerate()
        .map(|(i, child)| block(child, &child_path("doc", i)))
        .collect::<Result<Vec<_>>>()?;

    Ok(Document { version, content })
}

/// Decode one block-level node.
fn block(value: &Value, path: &str) -> Result<Block> {
    let obj = as_object(value, path)?;
    let node_type = type_of(obj, path)?;

    match node_type {
        "paragraph" => Ok(Block::Paragraph {
            content: inline_children(obj, path)?,
        }),
        "heading" => {
            let attrs: HeadingAttrs = required_attrs(obj, node_type, path)?;
            let content = required_content(obj, node_type, path)?
                .iter()
                .enumerate()
                .map(|(i, child)| inline(child, &child_path(path, i)))
                .collect::<Result<Vec<_>>>()?;
            Ok(Block::Heading {
                level: attrs.level,
                content,
            })
        }
        "bulletList" => Ok(Block::BulletList {
            items: list_children(obj, node_type, path)?,
        }),
        "orderedList" => Ok(Block::OrderedList {
            items: list_children(obj, node_type, path)?,
        }),
        "blockquote" => Ok(Block::Blockquote {
            content: block_children(obj, node_type, path)?,
        }),
        "rule" => Ok(Block::Rule),
        "expand" => {
            let attrs: ExpandAttrs = required_attrs(obj, node_type, path)?;
            Ok(Block::Expand {
                title: attrs.title,
                content: block_children(obj, node_type, path)?,
            })
        }
        "codeBlock" => {
            let attrs: Option<CodeBlockAttrs> = optional_attrs(obj, node_type, path)?;
            let content = required_content(obj, node_type, path)?
                .iter()
                .enumerate()
                .map(|(i, child)| inline(child, &child_path(path, i)))
                .collect::<Result<Vec<_>>>()?;
            Ok(Block::CodeBlock {
                language: attrs.and_then(|a| a.language),
                content,
            })
        }
        "table" => {
            let attrs: Option<TableAttrs> = optional_attrs(obj, node_type, path)?;
            let rows = required_content(obj, node_type, path)?
                .iter()
                .enumerate()
                .map(|(i, child)| table_row(child, &child_path(path, i)))
                .collect::<Result<Vec<_>>>()?;
            Ok(Block::Table(Table {
                rows,
                layout: attrs.map(|a| a.layout),
            }))
        }
        "mediaSingle" => {
            let attrs: MediaSingleAttrs = required_attrs(obj, node_type, path)?;
            let media = required_content(obj, node_type, path)?
                .iter()
                .enumerate()
                .map(|(i, child)| media_node(child, &child_path(path, i)))
                .collect::<Result<Vec<_>>>()?;
            Ok(Block::MediaSingle {
                layout: attrs.layout,
                media,
            })
        }
        "mediaGroup" => {
            let content = required_content(obj, node_type, path)?
                .iter()
                .enumerate()
                .map(|(i, child)| media_group_node(child, &child_path(path, i)))
                .collect::<Result<Vec<_>>>()?;
            Ok(Block::MediaGroup { content })
        }
        other => {
            debug!("unknown block node `{other}` at {path}, keeping as placeholder");
            Ok(Block::Unknown {
                node_type: other.to_string(),
            })
        }
    }
}

/// Decode one inline node.
fn inline(value: &Value, path: &str) -> Result<Inline> {
    let obj = as_object(value, path)?;
    let node_type = type_of(obj, path)?;

    match node_type {
        "text" => {
            let text = obj.get("text").and_then(Value::as_str).ok_or_else(|| {
                Error::malformed(node_type, "missing required string `text`", path)
            })?;
            Ok(Inline::Text(text.to_string()))
        }
        "hardBreak" => Ok(Inline::HardBreak),
        "inlineCard" => {
            let attrs: InlineCardAttrs = required_attrs(obj, node_type, path)?;
            Ok(Inline::InlineCard { url: attrs.url })
        }
        "mediaInline" => {
            let media: Media = required_attrs(obj, node_type, path)?;
            Ok(Inline::MediaInline(media))
        }
        other => {
            debug!("unknown inline node `{other}` at {path}, keeping as placeholder");
            Ok(Inline::Unknown {
                node_type: other.to_string(),
            })
        }
    }
}

/// Decode a `media` node (the media reference lives in its attrs).
fn media_node(value: &Value, path: &str) -> Result<Media> {
    let obj = as_object(value, path)?;
    let node_type = type_of(obj, path)?;
    if node_type != "media" {
        return Err(Error::malformed(
            node_type,
            "expected a `media` node",
            path,
        ));
    }
    required_attrs(obj, node_type, path)
}

/// Decode a `mediaGroup` child: a bare media node or any inline node.
fn media_group_node(value: &Value, path: &str) -> Result<MediaGroupNode> {
    let obj = as_object(value, path)?;
    if type_of(obj, path)? == "media" {
        return media_node(value, path).map(MediaGroupNode::Media);
    }
    inline(value, path).map(MediaGroupNode::Inline)
}

/// Decode a `tableRow` node.
fn table_row(value: &Value, path: &str) -> Result<TableRow> {
    let obj = as_object(value, path)?;
    let node_type = type_of(obj, path)?;
    if node_type != "tableRow" {
        return Err(Error::malformed(
            node_type,
            "expected a `tableRow` node",
            path,
        ));
    }
    let cells = required_content(obj, node_type, path)?
        .iter()
        .enumerate()
        .map(|(i, child)| table_cell(child, &child_path(path, i)))
        .collect::<Result<Vec<_>>>()?;
    Ok(TableRow { cells })
}

/// Decode a `tableCell` or `tableHeader` node.
fn table_cell(value: &Value, path: &str) -> Result<TableCell> {
    let obj = as_object(value, path)?;
    let node_type = type_of(obj, path)?;
    let header = match node_type {
        "tableCell" => false,
        "tableHeader" => true,
        other => {
            return Err(Error::malformed(
                other,
                "expected a `tableCell` or `tableHeader` node",
                path,
            ));
        }
    };
    let content = block_children(obj, node_type, path)?;
    Ok(TableCell { content, header })
}

/// Decode the required `content` array of a node into blocks.
fn block_children(obj: &Map<String, Value>, node_type: &str, path: &str) -> Result<Vec<Block>> {
    required_content(obj, node_type, path)?
        .iter()
        .enumerate()
        .map(|(i, child)| block(child, &child_path(path, i)))
        .collect()
}

/// Decode a paragraph's inline children; a missing `content` means an empty
/// paragraph, not an error.
fn inline_children(obj: &Map<String, Value>, path: &str) -> Result<Vec<Inline>> {
    optional_content(obj, "paragraph", path)?
        .iter()
        .enumerate()
        .map(|(i, child)| inline(child, &child_path(path, i)))
        .collect()
}

/// Decode list children. Anything that is not a `listItem` degrades to an
/// unknown placeholder instead of failing the document.
fn list_children(obj: &Map<String, Value>, node_type: &str, path: &str) -> Result<Vec<ListNode>> {
    required_content(obj, node_type, path)?
        .iter()
        .enumerate()
        .map(|(i, child)| {
            let item_path = child_path(path, i);
            let child_obj = as_object(child, &item_path)?;
            let child_type = type_of(child_obj, &item_path)?;
            if child_type != "listItem" {
                debug!("unknown list child `{child_type}` at {item_path}, keeping as placeholder");
                return Ok(ListNode::Unknown {
                    node_type: child_type.to_string(),
                });
            }
            let content = block_children(child_obj, child_type, &item_path)?;
            Ok(ListNode::Item(ListItem { content }))
        })
        .collect()
}

// --- attrs shapes -----------------------------------------------------------

#[derive(Deserialize)]
struct HeadingAttrs {
    level: u8,
}

#[derive(Deserialize)]
struct ExpandAttrs {
    title: String,
}

#[derive(Deserialize)]
struct CodeBlockAttrs {
    #[serde(default)]
    language: Option<String>,
}

#[derive(Deserialize)]
struct TableAttrs {
    layout: String,
}

#[derive(Deserialize)]
struct MediaSingleAttrs {
    layout: MediaLayout,
}

#[derive(Deserialize)]
struct InlineCardAttrs {
    url: String,
}

// --- shared helpers ---------------------------------------------------------

fn child_path(parent: &str, index: usize) -> String {
    format!("{parent}.content[{index}]")
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| Error::malformed("node", "expected a JSON object", path))
}

fn type_of<'a>(obj: &'a Map<String, Value>, path: &str) -> Result<&'a str> {
    obj.get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::malformed("node", "missing `type` discriminator", path))
}

fn required_content<'a>(
    obj: &'a Map<String, Value>,
    node_type: &str,
    path: &str,
) -> Result<&'a [Value]> {
    match obj.get("content") {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(Error::malformed(
            node_type,
            "`content` must be an array",
            path,
        )),
        None => Err(Error::malformed(
            node_type,
            "missing required `content`",
            path,
        )),
    }
}

fn optional_content<'a>(
    obj: &'a Map<String, Value>,
    node_type: &str,
    path: &str,
) -> Result<&'a [Value]> {
    match obj.get("content") {
        Some(Value::Array(items)) => Ok(items),
        Some(Value::Null) | None => Ok(&[]),
        Some(_) => Err(Error::malformed(
            node_type,
            "`content` must be an array",
            path,
        )),
    }
}

fn required_attrs<T>(obj: &Map<String, Value>, node_type: &str, path: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let raw = obj
        .get("attrs")
        .ok_or_else(|| Error::malformed(node_type, "missing required `attrs`", path))?;
    T::deserialize(raw).map_err(|e| Error::malformed(node_type, format!("invalid `attrs`: {e}"), path))
}

fn optional_attrs<T>(obj: &Map<String, Value>, node_type: &str, path: &str) -> Result<Option<T>>
where
    T: for<'de> Deserialize<'de>,
{
    match obj.get("attrs") {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => T::deserialize(raw)
            .map(Some)
            .map_err(|e| Error::malformed(node_type, format!("invalid `attrs`: {e}"), path)),
    }
}
