//! The table type: incremental construction and the render pipeline.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace};

use tabgrid_core::{Alignment, BorderStyle, Error, Result};
use tabgrid_text::{measure_width, WidthMode};

use crate::filter::{apply_filters, ColumnFilter};
use crate::grid::Grid;
use crate::layout;
use crate::render;
use crate::row::Row;
use crate::totals;

/// An incrementally built text table.
///
/// A table is populated through any sequence of add/insert calls and
/// "finalized" on [`Table::render`]. Rendering never corrupts state:
/// normalization is idempotent, and filters, totals, and multi-line
/// splitting run on a per-render working frame, so repeated renders
/// produce byte-identical output.
///
/// Not synchronized: single-writer usage per instance, external mutual
/// exclusion if shared across threads.
///
/// # Example
///
/// ```
/// use tabgrid::Table;
///
/// let mut table = Table::new();
/// table.set_headers(["Name", "Age"]);
/// table.add_row(["Alice", "30"]);
/// table.add_row(["Bob", "5"]);
///
/// let rendered = table.render();
/// assert!(rendered.starts_with("+-------+-----+\r\n| Name  | Age |"));
/// ```
pub struct Table {
    grid: Grid,
    headers: Option<Vec<String>>,
    filters: Vec<ColumnFilter>,
    totals: BTreeSet<usize>,
    alignments: BTreeMap<usize, Alignment>,
    default_alignment: Alignment,
    border: BorderStyle,
    padding: usize,
    width_mode: WidthMode,
    color_strip: Option<Box<dyn Fn(&str) -> String>>,
}

impl Table {
    /// Creates a table with the default configuration: left alignment,
    /// ASCII border, padding 1, display-width measurement, no color
    /// stripping.
    pub fn new() -> Self {
        Self {
            grid: Grid::default(),
            headers: None,
            filters: Vec::new(),
            totals: BTreeSet::new(),
            alignments: BTreeMap::new(),
            default_alignment: Alignment::Left,
            border: BorderStyle::Ascii,
            padding: 1,
            width_mode: WidthMode::Display,
            color_strip: None,
        }
    }

    /// Starts building a table with custom configuration.
    pub fn builder() -> TableBuilder {
        TableBuilder::new()
    }

    /// Builds a table from header and row data in one call. Empty
    /// headers mean no header block.
    ///
    /// # Example
    ///
    /// ```
    /// use tabgrid::Table;
    ///
    /// let mut table = Table::from_rows(["Lang"], [["Rust"], ["C"]]);
    /// assert!(table.render().contains("| Rust |"));
    /// ```
    pub fn from_rows<H, HS, R, RR, RS>(headers: H, rows: R) -> Self
    where
        H: IntoIterator<Item = HS>,
        HS: Into<String>,
        R: IntoIterator<Item = RR>,
        RR: IntoIterator<Item = RS>,
        RS: Into<String>,
    {
        let mut table = Self::new();
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if !headers.is_empty() {
            table.set_headers(headers);
        }
        for row in rows {
            table.add_row(row);
        }
        table
    }

    /// Replaces the header row. Header cells may contain line breaks;
    /// they render as multiple header lines.
    pub fn set_headers<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        self.grid.observe_cols(cells.len());
        self.headers = Some(cells);
    }

    /// Appends a data row.
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.grid.push_row(Row::from_cells(cells));
    }

    /// Inserts a data row before every existing row.
    pub fn prepend_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.grid.prepend_row(Row::from_cells(cells));
    }

    /// Inserts a data row before index `at`, shifting later rows down.
    /// An index past the end leaves a gap of empty rows.
    pub fn insert_row<I, S>(&mut self, at: usize, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.grid.insert_row(at, Row::from_cells(cells));
    }

    /// Writes a column of cells at `col`, one per row starting at
    /// `start_row`. Existing cells at those positions are overwritten;
    /// missing rows are created.
    pub fn add_column<I, S>(&mut self, col: usize, start_row: usize, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (i, cell) in cells.into_iter().enumerate() {
            self.grid.set_cell(start_row + i, col, cell.into());
        }
    }

    /// Bulk-inserts rows starting at `(start_row, start_col)`.
    /// [`Row::Rule`] entries inject separators mid-load.
    pub fn add_bulk<I>(&mut self, rows: I, start_col: usize, start_row: usize)
    where
        I: IntoIterator<Item = Row>,
    {
        self.grid.add_bulk(rows, start_col, start_row);
    }

    /// Appends a horizontal rule row.
    pub fn add_separator(&mut self) {
        self.grid.push_row(Row::Rule);
    }

    /// Registers a cell transform for one column. Filters run in
    /// registration order, once per render, over every non-rule row's
    /// cell in that column, before width measurement.
    pub fn add_filter<F>(&mut self, column: usize, filter: F)
    where
        F: Fn(&str) -> String + 'static,
    {
        self.filters.push(ColumnFilter {
            column,
            apply: Box::new(filter),
        });
    }

    /// Marks columns for summation. When any are marked, rendering
    /// appends a rule plus one synthetic row carrying the numeric sum of
    /// each marked column.
    pub fn calculate_totals_for<I>(&mut self, columns: I)
    where
        I: IntoIterator<Item = usize>,
    {
        self.totals.extend(columns);
    }

    /// Overrides the alignment for one column. Unknown column indices
    /// are harmless; they never match a rendered column.
    pub fn set_column_alignment(&mut self, column: usize, alignment: Alignment) {
        self.alignments.insert(column, alignment);
    }

    /// Renders the table to a string with `\r\n` line terminators.
    ///
    /// A table with no headers and no rows renders to the empty string.
    /// A header-only table renders the header block with its surrounding
    /// rules. Render may be called repeatedly; output is deterministic.
    pub fn render(&mut self) -> String {
        self.grid.normalize();

        let cols = self.grid.max_cols();
        let has_headers = self.headers.as_ref().is_some_and(|h| !h.is_empty());

        if !has_headers && self.grid.is_empty() {
            return String::new();
        }

        trace!(rows = self.grid.max_rows(), cols, "rendering table");

        // Working frame: stored rows stay untouched so repeated renders
        // cannot double-apply filters or accumulate totals rows.
        let mut body = self.grid.cloned_rows();
        apply_filters(&mut body, &self.filters);

        if !self.totals.is_empty() && body.iter().any(|r| !r.is_rule()) {
            let row = totals::totals_row(&body, &self.totals, cols);
            body.push(Row::Rule);
            body.push(row);
        }

        let mut header_rows: Vec<Row> = Vec::new();
        if let Some(headers) = &self.headers {
            if !headers.is_empty() {
                let mut cells = headers.clone();
                cells.resize(cols, String::new());
                header_rows.push(Row::Data(cells));
                layout::split_multiline(&mut header_rows);
            }
        }
        layout::split_multiline(&mut body);

        let strip = self.color_strip.as_deref();
        let widths = layout::measure_columns(&header_rows, &body, cols, self.width_mode, strip);
        debug!(widths = ?widths.as_slice(), "measured column widths");

        let chars = self.border.chars();
        let rule = chars.map(|c| render::rule_line(&widths, c, self.padding));

        let width_mode = self.width_mode;
        let align_for = |i: usize| {
            self.alignments
                .get(&i)
                .copied()
                .unwrap_or(self.default_alignment)
        };
        let width_of = move |cell: &str| match strip {
            Some(f) => width_mode.measure(&f(cell)),
            None => width_mode.measure(cell),
        };

        let mut lines: Vec<String> = Vec::new();
        if let Some(rule) = &rule {
            lines.push(rule.clone());
        }

        for row in &header_rows {
            if let Some(cells) = row.cells() {
                lines.push(render::content_line(
                    cells,
                    &widths,
                    chars,
                    self.padding,
                    &align_for,
                    &width_of,
                ));
            }
        }
        if has_headers {
            if let Some(rule) = &rule {
                lines.push(rule.clone());
            }
        }

        for row in &body {
            match row.cells() {
                Some(cells) => lines.push(render::content_line(
                    cells,
                    &widths,
                    chars,
                    self.padding,
                    &align_for,
                    &width_of,
                )),
                None => {
                    if let Some(rule) = &rule {
                        lines.push(rule.clone());
                    }
                }
            }
        }
        if !body.is_empty() {
            if let Some(rule) = &rule {
                lines.push(rule.clone());
            }
        }

        let mut out = String::new();
        for line in &lines {
            out.push_str(line);
            out.push_str(render::LINE_TERMINATOR);
        }
        out
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

/// Fluent configuration for [`Table`].
///
/// # Example
///
/// ```
/// use tabgrid::{Alignment, BorderStyle, Table};
///
/// let mut table = Table::builder()
///     .default_alignment(Alignment::Right)
///     .border(BorderStyle::None)
///     .padding(0)
///     .build()
///     .unwrap();
/// table.add_row(["1"]);
/// assert_eq!(table.render(), "1\r\n");
/// ```
pub struct TableBuilder {
    default_alignment: Alignment,
    border: BorderStyle,
    padding: usize,
    width_mode: WidthMode,
    color_strip: Option<Box<dyn Fn(&str) -> String>>,
}

impl TableBuilder {
    fn new() -> Self {
        Self {
            default_alignment: Alignment::Left,
            border: BorderStyle::Ascii,
            padding: 1,
            width_mode: WidthMode::Display,
            color_strip: None,
        }
    }

    /// Sets the alignment used by columns without an override.
    pub fn default_alignment(mut self, alignment: Alignment) -> Self {
        self.default_alignment = alignment;
        self
    }

    /// Sets the border style.
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Sets the number of spaces around every border glyph.
    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Sets how cell text is measured.
    pub fn width_mode(mut self, mode: WidthMode) -> Self {
        self.width_mode = mode;
        self
    }

    /// Installs a transform that strips embedded escape sequences before
    /// width measurement. Rendered cells keep their original text.
    pub fn color_strip<F>(mut self, strip: F) -> Self
    where
        F: Fn(&str) -> String + 'static,
    {
        self.color_strip = Some(Box::new(strip));
        self
    }

    /// Validates the configuration and builds the table.
    ///
    /// Fails fast on a custom border glyph that cannot occupy exactly
    /// one printable column.
    pub fn build(self) -> Result<Table> {
        if let BorderStyle::Glyph(c) = self.border {
            if c.is_control() || measure_width(&c.to_string()) != 1 {
                return Err(Error::InvalidBorderGlyph(c));
            }
        }

        let mut table = Table::new();
        table.default_alignment = self.default_alignment;
        table.border = self.border;
        table.padding = self.padding;
        table.width_mode = self.width_mode;
        table.color_strip = self.color_strip;
        Ok(table)
    }
}
