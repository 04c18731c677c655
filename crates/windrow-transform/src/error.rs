//! Transform error types

use thiserror::Error;

/// Result type for transform configuration
pub type TransformResult<T> = std::result::Result<T, TransformError>;

/// Errors raised while configuring row transforms
#[derive(Debug, Error)]
pub enum TransformError {
    /// A repeat-heading spec did not parse
    #[error("Invalid repeat-heading spec: {0} (expected \"Name\" or \"Name:headerIndex:dataIndex\")")]
    InvalidHeadingSpec(String),
}
