//! ADF node model and decoder.
//!
//! This module defines the typed tree an ADF JSON payload decodes into,
//! plus the Jira response shapes that embed such trees. A decoded tree is
//! immutable: parents exclusively own their children and nothing is shared
//! or back-referenced.

mod block;
mod decode;
mod document;
mod inline;
pub mod issue;
mod media;
mod table;

pub(crate) use decode::document as decode_document;

pub use block::{Block, ListItem, ListNode, MediaGroupNode};
pub use document::Document;
pub use inline::Inline;
pub use media::{Media, MediaKind, MediaLayout};
pub use table::{Table, TableCell, TableRow};
