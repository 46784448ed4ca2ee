//! Display-width measurement for cell text.
//!
//! Column layout is driven by how many terminal columns a string occupies,
//! not by its byte length. The default mode measures grapheme clusters so
//! that CJK wide characters, emoji sequences, and zero-width combining
//! marks are all accounted for.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// How cell text is converted to a column width.
#[derive(Debug, Clone, Copy, Default)]
pub enum WidthMode {
    /// Grapheme-aware terminal display width.
    #[default]
    Display,
    /// Raw byte length. An explicit ASCII-safe degraded mode for
    /// environments without multibyte width data, not an error.
    Bytes,
    /// Caller-supplied width function.
    Custom(fn(&str) -> usize),
}

impl WidthMode {
    /// Measures `text` under this mode.
    ///
    /// # Example
    ///
    /// ```
    /// use tabgrid_text::WidthMode;
    ///
    /// assert_eq!(WidthMode::Display.measure("日本語"), 6);
    /// assert_eq!(WidthMode::Bytes.measure("日本語"), 9);
    /// ```
    pub fn measure(&self, text: &str) -> usize {
        match self {
            Self::Display => measure_width(text),
            Self::Bytes => text.len(),
            Self::Custom(f) => f(text),
        }
    }
}

/// Measure the display width of a string in terminal columns.
///
/// Handles ASCII (width 1), wide characters like CJK (width 2),
/// zero-width combining marks, and emoji ZWJ/variation sequences.
///
/// # Example
///
/// ```
/// use tabgrid_text::measure_width;
///
/// assert_eq!(measure_width("Hello"), 5);
/// assert_eq!(measure_width("日本語"), 6);
/// assert_eq!(measure_width("Hi世界"), 6);
/// ```
pub fn measure_width(text: &str) -> usize {
    // Fast path for ASCII-only text
    if text.is_ascii() {
        return text.chars().filter(|&c| c != '\n' && c != '\r').count();
    }

    text.graphemes(true).map(grapheme_width).sum()
}

/// Display width of a single grapheme cluster.
fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.is_empty() || grapheme == "\n" || grapheme == "\r" || grapheme == "\r\n" {
        return 0;
    }

    // ZWJ sequences and emoji-presentation selectors render as one
    // double-width glyph regardless of their component widths.
    if grapheme.contains('\u{200D}') || grapheme.contains('\u{FE0F}') {
        return 2;
    }

    // The base character determines the width; combining marks are
    // zero-width and control characters report no width at all.
    grapheme
        .chars()
        .filter_map(UnicodeWidthChar::width)
        .max()
        .unwrap_or(0)
}
