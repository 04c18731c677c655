//! HTML extraction options

use windrow_core::{CellBounds, Heading};

/// Options for extracting `<table>` rows from an HTML document
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Section heading (`<h1>`..`<h6>` text) that precedes the wanted
    /// table; tables before it are skipped
    pub heading: Option<Heading>,
    /// Select the table whose `id` attribute matches
    pub table_id: Option<Heading>,
    /// Cell-count window a row must fall in to be output
    pub cells: CellBounds,
    /// Keep embedded newlines in cell text; the default collapses a
    /// newline and its following indentation to one space
    pub newlines: bool,
    /// Trim cell text (default true)
    pub trim: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            heading: None,
            table_id: None,
            cells: CellBounds::default(),
            newlines: false,
            trim: true,
        }
    }
}
