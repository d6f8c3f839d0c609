//! Media reference types.

use serde::Deserialize;

/// A media reference (image or file attachment).
///
/// ADF never embeds binary content inline; a media node only carries the
/// identifier needed to fetch it. The same attribute shape backs both the
/// block-level `media` node and the inline `mediaInline` node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Media {
    /// Media identifier in the Atlassian media store
    pub id: String,

    /// Whether this references an uploaded file or an external link
    #[serde(rename = "type")]
    pub kind: MediaKind,

    /// Media store collection the item belongs to
    pub collection: String,

    /// Direct URL, when the media service exposes one
    #[serde(default)]
    pub url: Option<String>,
}

impl Media {
    /// The URL when present, otherwise the raw media ID.
    pub fn url_or_id(&self) -> &str {
        self.url.as_deref().unwrap_or(&self.id)
    }
}

/// The kind of resource a media node references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// An uploaded file
    File,
    /// An external link
    Link,
}

impl MediaKind {
    /// The ADF wire name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::File => "file",
            MediaKind::Link => "link",
        }
    }
}

/// Layout hint on a `mediaSingle` wrapper.
///
/// Carried through to the plain-text placeholder verbatim; it has no effect
/// on text layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaLayout {
    /// Centered
    Center,
    /// Floated right with text wrap
    WrapRight,
    /// Floated left with text wrap
    WrapLeft,
    /// Aligned to the start edge
    AlignStart,
    /// Aligned to the end edge
    AlignEnd,
    /// Wider than the content column
    Wide,
    /// Full viewport width
    FullWidth,
}

impl MediaLayout {
    /// The ADF wire name for this layout.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaLayout::Center => "center",
            MediaLayout::WrapRight => "wrap-right",
            MediaLayout::WrapLeft => "wrap-left",
            MediaLayout::AlignStart => "align-start",
            MediaLayout::AlignEnd => "align-end",
            MediaLayout::Wide => "wide",
            MediaLayout::FullWidth => "full-width",
        }
    }
}
