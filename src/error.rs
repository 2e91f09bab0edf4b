//! Error types for swatchbook operations.
//!
//! The color pipeline itself is total: malformed input is reported through
//! `Option` sentinels or fixed fallbacks. These errors cover the typed
//! parsing entry points, configuration, and collection edits.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in swatchbook operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed color input (wrong length, non-hex characters, empty string).
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found or unreadable.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: String,
        /// Error message describing why the value is invalid.
        message: String,
    },

    /// Index outside of a sequence.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Sequence length.
        len: usize,
    },
}
