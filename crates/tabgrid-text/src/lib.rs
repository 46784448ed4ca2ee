//! Unicode text measurement and line handling for tabgrid.
//!
//! This crate provides the text primitives the layout engine is built on:
//!
//! - **Width measurement**: terminal display width per grapheme cluster,
//!   with byte-length and caller-supplied fallbacks ([`WidthMode`])
//! - **Line splitting**: multi-line cell content split on `\n`, `\r\n`,
//!   or `\r` ([`split_lines`], [`line_count`])
//! - **ANSI stripping**: removing color escape sequences before width
//!   measurement ([`strip_ansi_codes`])
//!
//! # Example
//!
//! ```
//! use tabgrid_text::{line_count, measure_width, split_lines, strip_ansi_codes};
//!
//! assert_eq!(measure_width("Hello 世界"), 10);
//! assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
//! assert_eq!(line_count("a\nb\nc"), 3);
//! assert_eq!(measure_width(&strip_ansi_codes("\x1b[31mred\x1b[0m")), 3);
//! ```

pub mod ansi;
pub mod line;
pub mod width;

pub use ansi::strip_ansi_codes;
pub use line::{line_count, split_lines};
pub use width::{measure_width, WidthMode};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integration() {
        // A colored, multi-line CJK cell measures per stripped line.
        let cell = "\x1b[32m状態\x1b[0m\nok";
        let lines = split_lines(cell);
        assert_eq!(lines.len(), 2);

        let widths: Vec<usize> = lines
            .iter()
            .map(|l| measure_width(&strip_ansi_codes(l)))
            .collect();
        assert_eq!(widths, vec![4, 2]);
    }
}
