//! Column totals synthesis.
//!
//! When totals columns are marked, the renderer appends a rule and one
//! synthetic row whose marked columns carry the numeric sum of the column.
//! Cells are parsed as numbers after trimming; non-numeric cells and rule
//! rows contribute nothing. Unmarked columns stay empty.

use std::collections::BTreeSet;

use crate::row::Row;

/// Builds the totals row for `rows` over the marked `columns`.
pub(crate) fn totals_row(rows: &[Row], columns: &BTreeSet<usize>, cols: usize) -> Row {
    let mut cells = vec![String::new(); cols];

    for &col in columns {
        if col >= cols {
            continue;
        }

        let total: f64 = rows
            .iter()
            .filter_map(Row::cells)
            .filter_map(|row| row.get(col))
            .filter_map(|cell| cell.trim().parse::<f64>().ok())
            .sum();

        cells[col] = format_total(total);
    }

    Row::Data(cells)
}

/// Integral sums print without a fractional part; everything else uses
/// the shortest round-trip float formatting.
fn format_total(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
