//! Table layout for plain-text output.
//!
//! Two passes: first render every cell to a trimmed block of text and track
//! the widest line per column, then emit width-justified rows. When the
//! first row contains header cells, a dashed separator line frames it on
//! both sides. A table with no rows emits nothing.

use crate::model::Table;

use super::text::render_blocks;

/// Render a table into output lines at the given indent level.
pub(crate) fn render_table(table: &Table, indent: usize) -> Vec<String> {
    let indent_str = "  ".repeat(indent);
    let mut lines = Vec::new();

    // Pass 1: cell text and column widths. Cell content renders at indent 0;
    // the table's own indent only prefixes the assembled rows.
    let mut col_widths: Vec<usize> = Vec::new();
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let mut cells = Vec::with_capacity(row.cells.len());
        for (col, cell) in row.cells.iter().enumerate() {
            let text = render_blocks(&cell.content, 0).join("\n").trim().to_string();
            let width = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
            if col_widths.len() <= col {
                col_widths.resize(col + 1, 0);
            }
            col_widths[col] = col_widths[col].max(width);
            cells.push(text);
        }
        rows.push(cells);
    }

    // Separator sized to the first row's column count.
    let separator = table.has_header_row().then(|| {
        let columns = rows.first().map(|r| r.len()).unwrap_or(0);
        let dashes: Vec<String> = (0..columns)
            .map(|col| "-".repeat(col_widths.get(col).copied().unwrap_or(0) + 2))
            .collect();
        format!("|{}|", dashes.join("|"))
    });

    if let Some(sep) = &separator {
        lines.push(format!("{indent_str}{sep}"));
    }

    // Pass 2: one output line per the row's max cell line-count, each cell
    // left-justified to its column width.
    for (row_idx, cells) in rows.iter().enumerate() {
        let cell_lines: Vec<Vec<&str>> = cells.iter().map(|c| c.lines().collect()).collect();
        let max_lines = cell_lines.iter().map(|l| l.len()).max().unwrap_or(1);

        for line_idx in 0..max_lines {
            let parts: Vec<String> = cell_lines
                .iter()
                .enumerate()
                .map(|(col, text_lines)| {
                    let text = text_lines.get(line_idx).copied().unwrap_or("");
                    let width = col_widths.get(col).copied().unwrap_or(0);
                    format!("{text:<width$}")
                })
                .collect();
            lines.push(format!("{indent_str}| {} |", parts.join(" | ")));
        }

        if row_idx == 0 {
            if let Some(sep) = &separator {
                lines.push(format!("{indent_str}{sep}"));
            }
        }
    }

    lines
}
