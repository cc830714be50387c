//! Engine error types

use thiserror::Error;

/// Errors surfaced by the syllabification engine.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A malformed pattern in the exceptions resource, rejected at load time
    #[error("invalid exception rule at line {line}: pattern `{pattern}`: {source}")]
    InvalidExceptionRule {
        /// One-based line number inside the resource
        line: usize,
        /// The pattern text that failed to compile
        pattern: String,
        /// The underlying regex compilation error
        source: regex::Error,
    },

    /// A rule line that does not split into a pattern and a replacement
    #[error("incomplete exception rule at line {line}: `{text}`")]
    IncompleteExceptionRule {
        /// One-based line number inside the resource
        line: usize,
        /// The offending line
        text: String,
    },

    /// The exceptions resource could not be read while exceptions are enabled
    #[error("exceptions resource unavailable: {path}: {source}")]
    ResourceUnavailable {
        /// The path that failed to load
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Nothing remained of the input after normalization
    #[error("empty input: no letters left after normalization")]
    EmptyInput,
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, CoreError>;
