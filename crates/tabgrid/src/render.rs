//! Line assembly: cell padding, border glyphs, and rule lines.

use tabgrid_core::{Alignment, BorderChars};

/// Rendered output uses network-style line terminators.
pub(crate) const LINE_TERMINATOR: &str = "\r\n";

/// Builds one content line: each cell padded to its column width under
/// that column's alignment, cells joined with `<pad><vertical><pad>`, and
/// the line wrapped with `<vertical><pad> ... <pad><vertical>`.
///
/// With no border the vertical glyph is absent: cells are joined by
/// `<pad><pad>` and the line begins and ends with `<pad>`.
pub(crate) fn content_line(
    cells: &[String],
    widths: &[usize],
    chars: Option<BorderChars>,
    padding: usize,
    align_for: &dyn Fn(usize) -> Alignment,
    width_of: &dyn Fn(&str) -> usize,
) -> String {
    let pad = " ".repeat(padding);
    let separator = match chars {
        Some(c) => format!("{pad}{}{pad}", c.vertical),
        None => format!("{pad}{pad}"),
    };

    let mut joined = String::new();
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            joined.push_str(&separator);
        }
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        joined.push_str(&align_for(i).pad(cell, width_of(cell), *width));
    }

    match chars {
        Some(c) => format!("{v}{pad}{joined}{pad}{v}", v = c.vertical),
        None => format!("{pad}{joined}{pad}"),
    }
}

/// Builds a rule line: an intersection glyph at every column boundary and
/// horizontal glyphs spanning each column plus its padding.
pub(crate) fn rule_line(widths: &[usize], chars: BorderChars, padding: usize) -> String {
    let mut line = String::new();
    line.push(chars.intersection);
    for width in widths {
        for _ in 0..(width + 2 * padding) {
            line.push(chars.horizontal);
        }
        line.push(chars.intersection);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn left(_: usize) -> Alignment {
        Alignment::Left
    }

    fn ascii_width(s: &str) -> usize {
        s.len()
    }

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_content_line_ascii_border() {
        let line = content_line(
            &cells(&["Name", "Age"]),
            &[5, 3],
            Some(BorderChars::ASCII),
            1,
            &left,
            &ascii_width,
        );
        assert_eq!(line, "| Name  | Age |");
    }

    #[test]
    fn test_content_line_no_border() {
        let line = content_line(
            &cells(&["a", "b"]),
            &[1, 1],
            None,
            1,
            &left,
            &ascii_width,
        );
        assert_eq!(line, " a  b ");
    }

    #[test]
    fn test_content_line_zero_padding() {
        let line = content_line(
            &cells(&["a", "b"]),
            &[2, 1],
            Some(BorderChars::ASCII),
            0,
            &left,
            &ascii_width,
        );
        assert_eq!(line, "|a |b|");
    }

    #[test]
    fn test_content_line_missing_cells_fill() {
        let line = content_line(
            &cells(&["a"]),
            &[1, 2],
            Some(BorderChars::ASCII),
            1,
            &left,
            &ascii_width,
        );
        assert_eq!(line, "| a |    |");
    }

    #[test]
    fn test_content_line_alignments() {
        let align = |i: usize| match i {
            0 => Alignment::Right,
            _ => Alignment::Center,
        };
        let line = content_line(
            &cells(&["a", "b"]),
            &[3, 3],
            Some(BorderChars::ASCII),
            1,
            &align,
            &ascii_width,
        );
        assert_eq!(line, "|   a |  b  |");
    }

    #[test]
    fn test_rule_line() {
        assert_eq!(rule_line(&[5, 3], BorderChars::ASCII, 1), "+-------+-----+");
        assert_eq!(rule_line(&[1], BorderChars::ASCII, 0), "+-+");
    }

    #[test]
    fn test_rule_line_uniform_glyph() {
        assert_eq!(rule_line(&[2], BorderChars::uniform('#'), 1), "######");
    }

    #[test]
    fn test_rule_line_no_columns() {
        assert_eq!(rule_line(&[], BorderChars::ASCII, 1), "+");
    }
}
