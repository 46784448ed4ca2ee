//! Aligned, bordered text-table rendering for terminal output.
//!
//! tabgrid renders tabular data (headers + rows) into a fixed-width text
//! block. Cells may be multi-line and may carry ANSI color escapes;
//! column widths and row heights are computed from character display
//! width, not byte length, and the output is deterministic.
//!
//! # Overview
//!
//! The pipeline behind [`Table::render`]:
//!
//! - **Grid building**: rows are accepted by append, prepend, positional
//!   insert, column insert, and bulk insert, with horizontal-rule markers
//!   mixed in ([`Row::Rule`]).
//! - **Normalization**: the sparse grid is densified: unwritten rows
//!   become empty rows, ragged rows pad to the column count.
//! - **Multi-line splitting**: a row whose tallest cell spans `h` display
//!   lines expands into `h` synchronized single-line rows.
//! - **Width measurement**: per-cell display width under a pluggable
//!   width mode and an optional color-strip transform; per-column maxima
//!   drive the padding.
//! - **Rendering**: cells padded per column alignment, joined with
//!   border and padding glyphs, framed by rule lines.
//!
//! # Example
//!
//! ```
//! use tabgrid::Table;
//!
//! let mut table = Table::new();
//! table.set_headers(["Name", "Age"]);
//! table.add_row(["Alice", "30"]);
//! table.add_row(["Bob", "5"]);
//!
//! let expected = "\
//! +-------+-----+\r\n\
//! | Name  | Age |\r\n\
//! +-------+-----+\r\n\
//! | Alice | 30  |\r\n\
//! | Bob   | 5   |\r\n\
//! +-------+-----+\r\n";
//! assert_eq!(table.render(), expected);
//! ```
//!
//! # Module Structure
//!
//! - [`table`]: the [`Table`] type, builder, and render pipeline
//! - [`row`]: the [`Row`] data/rule variant
//! - [`tabgrid_core`]: alignment, borders, configuration errors
//! - [`tabgrid_text`]: width measurement, line splitting, ANSI stripping

pub mod row;
pub mod table;

mod filter;
mod grid;
mod layout;
mod render;
mod totals;

pub use row::Row;
pub use table::{Table, TableBuilder};

// Re-exports for convenience
pub use tabgrid_core::{Alignment, BorderChars, BorderStyle, Error, Result};
pub use tabgrid_text::{line_count, measure_width, split_lines, strip_ansi_codes, WidthMode};

/// Prelude module for convenient imports.
///
/// Use `use tabgrid::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::row::Row;
    pub use crate::table::{Table, TableBuilder};
    pub use tabgrid_core::{Alignment, BorderChars, BorderStyle};
    pub use tabgrid_text::{strip_ansi_codes, WidthMode};
}
