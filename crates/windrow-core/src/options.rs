//! Scan configuration

use crate::error::{Error, Result};
use crate::range::Range;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Inclusive cell-count window a row must fall in to belong to the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBounds {
    /// Minimum cells in a row (default 1)
    pub min: usize,
    /// Maximum cells in a row (default 256)
    pub max: usize,
}

impl CellBounds {
    /// Create bounds from explicit limits
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Whether a row length falls inside the window
    pub fn contains(&self, len: usize) -> bool {
        len >= self.min && len <= self.max
    }
}

impl Default for CellBounds {
    fn default() -> Self {
        Self { min: 1, max: 256 }
    }
}

impl fmt::Display for CellBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl FromStr for CellBounds {
    type Err = Error;

    /// Parse `"7"` (minimum only) or `"7-9"` (minimum and maximum)
    fn from_str(s: &str) -> Result<Self> {
        let mut bounds = CellBounds::default();
        let s = s.trim();

        let parse = |part: &str| {
            part.parse::<usize>()
                .map_err(|_| Error::InvalidCellBounds(s.to_string()))
        };

        match s.split_once('-') {
            Some((min, max)) => {
                bounds.min = parse(min)?;
                bounds.max = parse(max)?;
            }
            None => bounds.min = parse(s)?,
        }

        if bounds.min > bounds.max {
            return Err(Error::InvalidCellBounds(s.to_string()));
        }
        Ok(bounds)
    }
}

/// Text that marks a table boundary in the source document
///
/// Headings are matched against a row's first cell, either by exact
/// string equality or by regular expression.
#[derive(Debug, Clone)]
pub enum Heading {
    /// Exact string equality
    Exact(String),
    /// Regular expression match
    Pattern(Regex),
}

impl Heading {
    /// An exact-text heading
    pub fn exact<S: Into<String>>(text: S) -> Self {
        Heading::Exact(text.into())
    }

    /// A pattern heading compiled from a regex string
    pub fn pattern(re: &str) -> Result<Self> {
        Ok(Heading::Pattern(Regex::new(re)?))
    }

    /// Whether the given text matches this heading
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Heading::Exact(heading) => text == heading,
            Heading::Pattern(re) => re.is_match(text),
        }
    }
}

/// Options controlling a table scan
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Cell selection window; `None` scans everything from A1
    pub range: Option<Range>,
    /// Text before the data table; rows are discarded until it is seen
    pub heading: Option<Heading>,
    /// Text after the data table; a matching row ends the table
    pub stop_heading: Option<Heading>,
    /// Cell-count window for table rows
    pub cells: CellBounds,
    /// Insert nulls for cells missing from a row (requires a bounded range)
    pub missing_cells: bool,
    /// Suppress header rows repeated across printed pages
    pub repeating: bool,
    /// Trim text cell values (default true)
    pub trim: bool,
    /// Admit one-cell section-heading rows through the cell-count window,
    /// for sources post-processed with a repeat-heading transform
    pub subheadings: bool,
}

impl ScanOptions {
    /// Options with the documented defaults (trim on, cells 1-256)
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            range: None,
            heading: None,
            stop_heading: None,
            cells: CellBounds::default(),
            missing_cells: false,
            repeating: false,
            trim: true,
            subheadings: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_bounds_parse() {
        let bounds: CellBounds = "7".parse().unwrap();
        assert_eq!(bounds, CellBounds::new(7, 256));

        let bounds: CellBounds = "7-9".parse().unwrap();
        assert_eq!(bounds, CellBounds::new(7, 9));

        assert!("".parse::<CellBounds>().is_err());
        assert!("a-b".parse::<CellBounds>().is_err());
        assert!("9-7".parse::<CellBounds>().is_err());
    }

    #[test]
    fn test_cell_bounds_contains() {
        let bounds = CellBounds::new(2, 4);
        assert!(!bounds.contains(1));
        assert!(bounds.contains(2));
        assert!(bounds.contains(4));
        assert!(!bounds.contains(5));
    }

    #[test]
    fn test_heading_matches() {
        let h = Heading::exact("Total");
        assert!(h.matches("Total"));
        assert!(!h.matches("Totals"));

        let h = Heading::pattern("^District [0-9]+$").unwrap();
        assert!(h.matches("District 12"));
        assert!(!h.matches("District"));

        assert!(Heading::pattern("(unclosed").is_err());
    }

    #[test]
    fn test_defaults() {
        let opts = ScanOptions::new();
        assert!(opts.trim);
        assert!(!opts.missing_cells);
        assert!(!opts.repeating);
        assert_eq!(opts.cells, CellBounds::new(1, 256));
        assert!(opts.range.is_none());
    }
}
