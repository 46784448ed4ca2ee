//! Sparse grid storage and normalization.
//!
//! Mutating operations may leave the grid sparse: positional inserts can
//! create unwritten slots, and data rows can be ragged. Normalization
//! densifies the grid before layout: every slot becomes a concrete row
//! and every data row is padded to the column count. A dirty flag set by
//! each mutation and cleared by normalization makes repeated render calls
//! cheap and idempotent.

use crate::row::Row;

/// Growable 2D cell grid with row/column bookkeeping.
#[derive(Debug, Clone, Default)]
pub(crate) struct Grid {
    /// Row slots; `None` marks a row index that was never written.
    slots: Vec<Option<Row>>,
    /// Maximum cell count ever observed across headers and rows. Only
    /// grows over the grid's lifetime.
    max_cols: usize,
    dirty: bool,
}

impl Grid {
    /// Highest occupied row index + 1.
    pub fn max_rows(&self) -> usize {
        self.slots.len()
    }

    pub fn max_cols(&self) -> usize {
        self.max_cols
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Records a row width observed outside the grid (the header row).
    pub fn observe_cols(&mut self, cols: usize) {
        if cols > self.max_cols {
            self.max_cols = cols;
            self.dirty = true;
        }
    }

    fn touch(&mut self, row: &Row) {
        self.max_cols = self.max_cols.max(row.len());
        self.dirty = true;
    }

    /// Appends a row.
    pub fn push_row(&mut self, row: Row) {
        self.touch(&row);
        self.slots.push(Some(row));
    }

    /// Inserts a row at index 0, shifting everything down.
    pub fn prepend_row(&mut self, row: Row) {
        self.touch(&row);
        self.slots.insert(0, Some(row));
    }

    /// Inserts a row before index `at`, shifting later rows. An index past
    /// the end sparse-fills the gap with unwritten slots.
    pub fn insert_row(&mut self, at: usize, row: Row) {
        self.touch(&row);
        if at >= self.slots.len() {
            self.slots.resize_with(at, || None);
            self.slots.push(Some(row));
        } else {
            self.slots.insert(at, Some(row));
        }
    }

    /// Writes one cell, creating the row and padding it as needed.
    /// Overwrites are last-write-wins; writing into a rule row replaces
    /// the rule with a data row.
    pub fn set_cell(&mut self, row: usize, col: usize, value: String) {
        if row >= self.slots.len() {
            self.slots.resize_with(row + 1, || None);
        }

        let slot = &mut self.slots[row];
        if !matches!(slot, Some(Row::Data(_))) {
            *slot = Some(Row::Data(Vec::new()));
        }
        if let Some(Row::Data(cells)) = slot {
            if col >= cells.len() {
                cells.resize(col + 1, String::new());
            }
            cells[col] = value;
        }

        self.max_cols = self.max_cols.max(col + 1);
        self.dirty = true;
    }

    /// Places a rule row at index `at`, overwriting any existing row.
    pub fn set_rule(&mut self, at: usize) {
        if at >= self.slots.len() {
            self.slots.resize_with(at + 1, || None);
        }
        self.slots[at] = Some(Row::Rule);
        self.dirty = true;
    }

    /// Bulk insert starting at `(start_row, start_col)`. `Row::Rule`
    /// entries inject separators mid-load; data cells land at
    /// `(start_row + i, start_col + j)`, last-write-wins.
    pub fn add_bulk<I>(&mut self, rows: I, start_col: usize, start_row: usize)
    where
        I: IntoIterator<Item = Row>,
    {
        let mut at = start_row;
        for row in rows {
            match row {
                Row::Rule => self.set_rule(at),
                Row::Data(cells) => {
                    if at >= self.slots.len() {
                        self.slots.resize_with(at + 1, || None);
                    }
                    if self.slots[at].is_none() {
                        self.slots[at] = Some(Row::Data(Vec::new()));
                        self.dirty = true;
                    }
                    for (j, value) in cells.into_iter().enumerate() {
                        self.set_cell(at, start_col + j, value);
                    }
                }
            }
            at += 1;
        }
    }

    /// Densifies the grid: unwritten slots become empty data rows and
    /// every data row is padded with empty cells to the column count.
    /// Idempotent; a no-op when nothing mutated since the last call.
    pub fn normalize(&mut self) {
        if !self.dirty {
            return;
        }

        for slot in &mut self.slots {
            let row = slot.get_or_insert_with(|| Row::Data(Vec::new()));
            if let Row::Data(cells) = row {
                if cells.len() < self.max_cols {
                    cells.resize(self.max_cols, String::new());
                }
            }
        }

        self.dirty = false;
    }

    /// Owned copy of every row, for the render working frame. Call after
    /// [`Grid::normalize`]; unwritten slots fall back to empty data rows.
    pub fn cloned_rows(&self) -> Vec<Row> {
        self.slots
            .iter()
            .map(|slot| slot.clone().unwrap_or_else(|| Row::Data(Vec::new())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(cells: &[&str]) -> Row {
        Row::from_cells(cells.iter().copied())
    }

    #[test]
    fn test_push_and_counts() {
        let mut grid = Grid::default();
        grid.push_row(data(&["a", "b", "c"]));
        grid.push_row(data(&["d"]));

        assert_eq!(grid.max_rows(), 2);
        assert_eq!(grid.max_cols(), 3);
    }

    #[test]
    fn test_max_cols_only_grows() {
        let mut grid = Grid::default();
        grid.push_row(data(&["a", "b", "c"]));
        grid.push_row(data(&["d"]));
        assert_eq!(grid.max_cols(), 3);

        grid.observe_cols(2);
        assert_eq!(grid.max_cols(), 3);
        grid.observe_cols(5);
        assert_eq!(grid.max_cols(), 5);
    }

    #[test]
    fn test_normalize_densifies() {
        let mut grid = Grid::default();
        grid.push_row(data(&["a", "b", "c"]));
        grid.push_row(data(&["d"]));
        grid.normalize();

        let rows = grid.cloned_rows();
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[1].len(), 3);
        assert_eq!(rows[1].cells().unwrap(), &["d", "", ""]);
    }

    #[test]
    fn test_normalize_idempotent() {
        let mut grid = Grid::default();
        grid.push_row(data(&["a"]));
        grid.normalize();
        let first = grid.cloned_rows();
        grid.normalize();
        assert_eq!(grid.cloned_rows(), first);
    }

    #[test]
    fn test_insert_row_shifts() {
        let mut grid = Grid::default();
        grid.push_row(data(&["first"]));
        grid.push_row(data(&["third"]));
        grid.insert_row(1, data(&["second"]));

        let rows = grid.cloned_rows();
        assert_eq!(rows[0].cells().unwrap()[0], "first");
        assert_eq!(rows[1].cells().unwrap()[0], "second");
        assert_eq!(rows[2].cells().unwrap()[0], "third");
    }

    #[test]
    fn test_insert_row_past_end_sparse_fills() {
        let mut grid = Grid::default();
        grid.insert_row(2, data(&["late"]));
        assert_eq!(grid.max_rows(), 3);

        grid.normalize();
        let rows = grid.cloned_rows();
        assert_eq!(rows[0].cells().unwrap(), &[""]);
        assert_eq!(rows[2].cells().unwrap(), &["late"]);
    }

    #[test]
    fn test_prepend() {
        let mut grid = Grid::default();
        grid.push_row(data(&["b"]));
        grid.prepend_row(data(&["a"]));
        let rows = grid.cloned_rows();
        assert_eq!(rows[0].cells().unwrap()[0], "a");
        assert_eq!(rows[1].cells().unwrap()[0], "b");
    }

    #[test]
    fn test_set_cell_last_write_wins() {
        let mut grid = Grid::default();
        grid.push_row(data(&["old"]));
        grid.set_cell(0, 0, "new".to_string());
        assert_eq!(grid.cloned_rows()[0].cells().unwrap()[0], "new");
    }

    #[test]
    fn test_set_cell_into_rule_replaces() {
        let mut grid = Grid::default();
        grid.push_row(Row::Rule);
        grid.set_cell(0, 1, "x".to_string());
        let rows = grid.cloned_rows();
        assert!(!rows[0].is_rule());
        assert_eq!(rows[0].cells().unwrap(), &["", "x"]);
    }

    #[test]
    fn test_set_cell_sparse_row() {
        let mut grid = Grid::default();
        grid.set_cell(3, 1, "v".to_string());
        assert_eq!(grid.max_rows(), 4);
        assert_eq!(grid.max_cols(), 2);

        grid.normalize();
        let rows = grid.cloned_rows();
        assert_eq!(rows[0].cells().unwrap(), &["", ""]);
        assert_eq!(rows[3].cells().unwrap(), &["", "v"]);
    }

    #[test]
    fn test_add_bulk_with_rules() {
        let mut grid = Grid::default();
        grid.add_bulk(
            vec![data(&["a", "b"]), Row::Rule, data(&["c"])],
            0,
            0,
        );

        assert_eq!(grid.max_rows(), 3);
        let rows = grid.cloned_rows();
        assert!(!rows[0].is_rule());
        assert!(rows[1].is_rule());
        assert_eq!(rows[2].cells().unwrap(), &["c"]);
    }

    #[test]
    fn test_add_bulk_offsets() {
        let mut grid = Grid::default();
        grid.add_bulk(vec![data(&["x", "y"])], 2, 1);

        assert_eq!(grid.max_rows(), 2);
        assert_eq!(grid.max_cols(), 4);

        grid.normalize();
        let rows = grid.cloned_rows();
        assert_eq!(rows[1].cells().unwrap(), &["", "", "x", "y"]);
    }

    #[test]
    fn test_mutation_after_normalize_re_pads() {
        let mut grid = Grid::default();
        grid.push_row(data(&["a"]));
        grid.normalize();

        grid.push_row(data(&["b", "c"]));
        grid.normalize();

        let rows = grid.cloned_rows();
        assert_eq!(rows[0].cells().unwrap(), &["a", ""]);
    }
}
