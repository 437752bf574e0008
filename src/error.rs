//! Error types for dirgram
//!
//! Uses `thiserror` for library errors; the binary boundary wraps them
//! with `anyhow` for reporting.

use thiserror::Error;

/// Result type alias for dirgram operations
pub type DirgramResult<T> = Result<T, DirgramError>;

/// Main error type for dirgram operations
///
/// The layout engine is total over a valid tree, so every failure mode
/// lives at the input boundary: reading the file or parsing the YAML.
#[derive(Error, Debug)]
pub enum DirgramError {
    /// Malformed YAML input; the message carries the underlying cause
    /// and its location when the parser reports one
    #[error("error parsing YAML: {message}")]
    InvalidInput { message: String },

    /// IO error reading the input file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
