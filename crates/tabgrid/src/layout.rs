//! Row heights, multi-line splitting, and column-width measurement.

use smallvec::{smallvec, SmallVec};
use tabgrid_text::{line_count, split_lines, WidthMode};

use crate::row::Row;

/// Per-column maximum display widths. Tables rarely exceed a handful of
/// columns, so the widths live inline.
pub(crate) type ColumnWidths = SmallVec<[usize; 8]>;

/// Number of display lines a row occupies: the line count of its tallest
/// cell. Rule rows are atomic and always report 1.
pub(crate) fn row_height(row: &Row) -> usize {
    match row.cells() {
        Some(cells) => cells.iter().map(|c| line_count(c)).max().unwrap_or(1),
        None => 1,
    }
}

/// Expands every multi-line logical row into synchronized single-line
/// physical rows, in place.
///
/// A row of height `h` is replaced by `h` rows carrying one line per
/// column; cells shorter than `h` lines pad with empty lines. Rows are
/// processed in original order, so each expansion shifts the remaining
/// rows by `h - 1`. Rule rows pass through untouched.
pub(crate) fn split_multiline(rows: &mut Vec<Row>) {
    let mut i = 0;
    while i < rows.len() {
        let height = row_height(&rows[i]);
        if height <= 1 {
            i += 1;
            continue;
        }

        let physical: Vec<Row> = match rows[i].cells() {
            Some(cells) => {
                let split: Vec<Vec<&str>> = cells.iter().map(|c| split_lines(c)).collect();
                (0..height)
                    .map(|line| {
                        Row::Data(
                            split
                                .iter()
                                .map(|lines| lines.get(line).copied().unwrap_or("").to_string())
                                .collect(),
                        )
                    })
                    .collect()
            }
            None => vec![Row::Rule],
        };

        let inserted = physical.len();
        rows.splice(i..=i, physical);
        i += inserted;
    }
}

/// Measures per-column maximum display width across the header block and
/// all body rows. Rule rows contribute nothing. The optional `strip`
/// transform is applied before measurement only; rendered cells keep
/// their original text.
pub(crate) fn measure_columns(
    header_rows: &[Row],
    body: &[Row],
    cols: usize,
    mode: WidthMode,
    strip: Option<&(dyn Fn(&str) -> String)>,
) -> ColumnWidths {
    let mut widths: ColumnWidths = smallvec![0; cols];

    for row in header_rows.iter().chain(body.iter()) {
        let Some(cells) = row.cells() else {
            continue;
        };
        for (i, cell) in cells.iter().enumerate().take(cols) {
            let width = match strip {
                Some(f) => mode.measure(&f(cell)),
                None => mode.measure(cell),
            };
            if width > widths[i] {
                widths[i] = width;
            }
        }
    }

    widths
}
