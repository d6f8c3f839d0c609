//! Rendering module for converting decoded ADF trees to plain text.

mod table;
mod text;

pub use text::to_text;
