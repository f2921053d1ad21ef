//! Aligned text formatting for grids.

use console::{measure_text_width, pad_str, Alignment};
use griddle_dispatch::Grid;

/// Formats a grid as left-aligned columns, one output line per row.
///
/// Column widths are the maximum display width of each column's cells,
/// measured ANSI- and CJK-aware via `console::measure_text_width`, with a
/// two-space separator between columns. Ragged rows are tolerated: short
/// rows simply contribute nothing to the columns they lack. Lines carry no
/// trailing padding.
///
/// An empty grid formats to no lines. The built-in handlers never produce
/// one (a zero-match search is a message), but the renderer must not care.
pub fn format_grid(grid: &Grid) -> Vec<String> {
    let rows = grid.rows();
    if rows.is_empty() {
        return Vec::new();
    }

    let columns = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            widths[index] = widths[index].max(measure_text_width(cell));
        }
    }

    rows.iter()
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(index, cell)| {
                    pad_str(cell, widths[index], Alignment::Left, None).into_owned()
                })
                .collect();
            cells.join("  ").trim_end().to_string()
        })
        .collect()
}
