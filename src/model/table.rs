//! Table types.

use super::Block;

/// An ADF table.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Rows in source order
    pub rows: Vec<TableRow>,

    /// Layout hint from `attrs.layout` (e.g. `"default"`, `"center"`)
    pub layout: Option<String>,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            layout: None,
        }
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns, based on the first row.
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.cells.len()).unwrap_or(0)
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the first row contains at least one header cell.
    ///
    /// This is what decides the dashed separator lines around the first row
    /// in plain-text output.
    pub fn has_header_row(&self) -> bool {
        self.rows
            .first()
            .is_some_and(|row| row.cells.iter().any(|cell| cell.header))
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Cells in source order
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }
}

/// A table cell.
///
/// The `tableCell`/`tableHeader` discriminator folds into the `header` flag;
/// both carry the same recursive block content.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    /// Cell content: any block-level nodes, including nested tables
    pub content: Vec<Block>,

    /// Whether this cell came from a `tableHeader` node
    pub header: bool,
}

impl TableCell {
    /// Create a body cell.
    pub fn new(content: Vec<Block>) -> Self {
        Self {
            content,
            header: false,
        }
    }

    /// Create a header cell.
    pub fn header(content: Vec<Block>) -> Self {
        Self {
            content,
            header: true,
        }
    }
}
