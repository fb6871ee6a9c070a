//! Error types for Pixmorph

use thiserror::Error;

/// Main error type for Pixmorph operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {name} = {value} ({reason})")]
    InvalidArgument {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Invalid raster dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Index out of bounds: ({row}, {col}) in raster of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Raster size mismatch: expected ({er}, {ec}), got ({ar}, {ac})")]
    SizeMismatch { er: usize, ec: usize, ar: usize, ac: usize },

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidArgument`]
    pub fn invalid_argument(
        name: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidArgument {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for Pixmorph operations
pub type Result<T> = std::result::Result<T, Error>;
