//! Error types for windrow-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in windrow-core
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Invalid cell range format
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// Invalid cell-count bounds specification
    #[error("Invalid cell bounds: {0}")]
    InvalidCellBounds(String),

    /// Invalid heading pattern
    #[error("Invalid heading pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Missing-cell interpolation was requested for an unbounded range
    #[error("Missing-cell interpolation requires a bounded range")]
    UnboundedInterpolation,
}
