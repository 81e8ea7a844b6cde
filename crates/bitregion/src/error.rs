//! Error types for bitregion
//!
//! Spatial operations never fail: out-of-bounds coordinates are ignored and
//! size-mismatched combinations work over the overlap. Errors only come from
//! ingesting external data, meaning grids handed to
//! [`Region::from_grid`](crate::Region::from_grid) and the text encoding read
//! by [`Region::from_text`](crate::Region::from_text).

use thiserror::Error;

/// bitregion error type
#[derive(Error, Debug)]
pub enum Error {
    /// A source grid whose columns do not all have the same length
    #[error("ragged grid: column {column} has {actual} cells, expected {expected}")]
    RaggedGrid {
        column: usize,
        expected: usize,
        actual: usize,
    },

    /// A required field is missing from the text encoding
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A dimension field could not be parsed or is too large
    #[error("invalid {field}: {value:?}")]
    InvalidDimension { field: &'static str, value: String },

    /// A storage word could not be parsed
    #[error("invalid word at index {index}: {value:?}")]
    InvalidWord { index: usize, value: String },

    /// The number of storage words does not match the dimensions
    #[error("word count mismatch: expected {expected}, got {actual}")]
    WordCount { expected: usize, actual: usize },

    /// A column has bits set beyond the region height
    #[error("column {column} has bits set beyond the region height")]
    TailBitsSet { column: usize },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for bitregion operations
pub type Result<T> = std::result::Result<T, Error>;
