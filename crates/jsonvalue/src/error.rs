//! Error types for the encode/decode boundary.
//!
//! Accessors never fail with an error; they return `None` or `false`. Only
//! turning text into a `JsonValue` (or back) can fail hard.

use thiserror::Error;

/// Errors that can occur while encoding or decoding a [`crate::JsonValue`].
#[derive(Error, Debug)]
pub enum JsonValueError {
    /// Malformed input, an unsupported wire type, or a value JSON cannot carry
    /// (such as a non-finite double).
    /// I/O failures of `from_reader`/`to_writer` surface here as well.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout jsonvalue.
pub type Result<T> = std::result::Result<T, JsonValueError>;
