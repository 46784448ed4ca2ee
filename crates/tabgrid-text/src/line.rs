//! Line splitting for multi-line cell content.
//!
//! Cells may embed `\n`, `\r\n`, or `\r` line breaks; all three split. A
//! trailing break yields a trailing empty line, unlike [`str::lines`]:
//! a cell ending in a newline really does occupy one more display row.

/// Splits `text` into lines on any of `\n`, `\r\n`, or `\r`.
///
/// # Example
///
/// ```
/// use tabgrid_text::split_lines;
///
/// assert_eq!(split_lines("a\nb\nc"), vec!["a", "b", "c"]);
/// assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
/// assert_eq!(split_lines("a\n"), vec!["a", ""]);
/// assert_eq!(split_lines(""), vec![""]);
/// ```
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    // Break positions are ASCII bytes, so slicing at them is always
    // char-boundary safe.
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }

    lines.push(&text[start..]);
    lines
}

/// Number of display lines `text` occupies. Always at least 1.
///
/// # Example
///
/// ```
/// use tabgrid_text::line_count;
///
/// assert_eq!(line_count("one"), 1);
/// assert_eq!(line_count("a\nb\nc"), 3);
/// assert_eq!(line_count(""), 1);
/// ```
pub fn line_count(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut count = 1;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                count += 1;
                i += 1;
            }
            b'\r' => {
                count += 1;
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
            }
            _ => i += 1,
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lf() {
        assert_eq!(split_lines("a\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_crlf() {
        assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_cr() {
        assert_eq!(split_lines("a\rb"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_mixed_endings() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_trailing_break() {
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
        assert_eq!(split_lines("\r\n"), vec!["", ""]);
    }

    #[test]
    fn test_split_empty() {
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn test_split_no_breaks() {
        assert_eq!(split_lines("plain"), vec!["plain"]);
    }

    #[test]
    fn test_line_count_matches_split() {
        for text in ["", "a", "a\nb", "a\r\nb\rc", "x\n", "\n\n"] {
            assert_eq!(line_count(text), split_lines(text).len(), "{text:?}");
        }
    }

    #[test]
    fn test_split_unicode_content() {
        assert_eq!(split_lines("日本\n語"), vec!["日本", "語"]);
    }
}
