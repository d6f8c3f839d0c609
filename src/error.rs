//! Error types for the unadf library.

use std::io;
use thiserror::Error;

/// Result type alias for unadf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while decoding ADF content.
///
/// Rendering itself never fails: every decoded tree has a defined plain-text
/// output. All failure modes live in the decode step.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid JSON, or a response-shape struct failed to
    /// deserialize.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A node matched a known `type` discriminator but is missing a required
    /// attribute or has one of the wrong shape.
    #[error("Malformed `{node_type}` node at {path}: {detail}")]
    MalformedNode {
        /// The node's `type` discriminator value.
        node_type: String,
        /// What was missing or invalid.
        detail: String,
        /// Index path from the document root, e.g. `doc.content[2].content[0]`.
        path: String,
    },
}

impl Error {
    /// Build a [`Error::MalformedNode`] from its parts.
    pub(crate) fn malformed(
        node_type: impl Into<String>,
        detail: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Error::MalformedNode {
            node_type: node_type.into(),
            detail: detail.into(),
            path: path.into(),
        }
    }
}
