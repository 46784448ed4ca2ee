//! Per-column cell filters.
//!
//! A filter is a pure transform bound to one column index. Filters run in
//! registration order, once per render, over every non-rule row's cell in
//! that column, before width measurement. Header cells are not filtered.

use crate::row::Row;

/// A registered column filter.
pub(crate) struct ColumnFilter {
    pub column: usize,
    pub apply: Box<dyn Fn(&str) -> String>,
}

/// Runs every registered filter over the body rows.
pub(crate) fn apply_filters(rows: &mut [Row], filters: &[ColumnFilter]) {
    for filter in filters {
        for row in rows.iter_mut() {
            let Some(cells) = row.cells_mut() else {
                continue;
            };
            if let Some(cell) = cells.get_mut(filter.column) {
                *cell = (filter.apply)(cell);
            }
        }
    }
}
