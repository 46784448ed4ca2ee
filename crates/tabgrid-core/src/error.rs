//! Error types for table configuration.

use thiserror::Error;

/// Configuration error raised when building a table.
///
/// Malformed table *data* never errors (missing cells are filled, ragged
/// rows are padded), so the only failures are configuration-time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The custom border glyph cannot be rendered as a border.
    #[error("invalid border glyph {0:?}: must be a single-column printable character")]
    InvalidBorderGlyph(char),
}

/// Result type alias using the configuration Error type.
pub type Result<T> = std::result::Result<T, Error>;
