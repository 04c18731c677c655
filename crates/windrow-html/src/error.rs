//! HTML extraction error types

use thiserror::Error;

/// Result type for HTML extraction
pub type HtmlResult<T> = std::result::Result<T, HtmlError>;

/// Errors that can occur while extracting tables from HTML
#[derive(Debug, Error)]
pub enum HtmlError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Markup error the lenient parser could not recover from
    #[error("Markup error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] windrow_core::Error),
}
