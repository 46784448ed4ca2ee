//! Core types for tabgrid table rendering.
//!
//! This crate provides the foundational, dependency-light types shared by
//! the tabgrid engine: column [`Alignment`] with its padding rule, border
//! styles and glyph tables, and the configuration [`Error`] type.

pub mod alignment;
pub mod border;
pub mod error;

pub use alignment::Alignment;
pub use border::{BorderChars, BorderStyle};
pub use error::{Error, Result};
