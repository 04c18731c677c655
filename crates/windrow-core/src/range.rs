//! Rectangular selection windows

use crate::address::CellAddress;
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A rectangular cell selection (e.g., "A3:M24")
///
/// The bottom-right corner is optional; without one the range is
/// unbounded and every address is considered in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    /// Top-left corner
    pub top_left: CellAddress,
    /// Bottom-right corner; `None` means unbounded
    pub bottom_right: Option<CellAddress>,
}

impl Range {
    /// Create a bounded range
    pub fn new(top_left: CellAddress, bottom_right: CellAddress) -> Self {
        Self {
            top_left,
            bottom_right: Some(bottom_right),
        }
    }

    /// Create an unbounded range starting at the given corner
    pub fn unbounded(top_left: CellAddress) -> Self {
        Self {
            top_left,
            bottom_right: None,
        }
    }

    /// Parse a range from A1-style notation
    ///
    /// `"A3:M24"` is a bounded selection; a single address (`"A3"`) is
    /// open-ended toward the bottom-right.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidRange("empty range".into()));
        }

        match s.split_once(':') {
            Some((start, end)) => Ok(Self::new(
                CellAddress::parse(start)?,
                CellAddress::parse(end)?,
            )),
            None => Ok(Self::unbounded(CellAddress::parse(s)?)),
        }
    }

    /// Check if an address falls inside this range
    pub fn contains(&self, address: &CellAddress) -> bool {
        match &self.bottom_right {
            None => true, // no range specified
            Some(bottom_right) => {
                self.top_left.precedes(address) && address.precedes(bottom_right)
            }
        }
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::unbounded(CellAddress::origin())
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.bottom_right {
            Some(bottom_right) => write!(f, "{}:{}", self.top_left, bottom_right),
            None => write!(f, "{}", self.top_left),
        }
    }
}

impl FromStr for Range {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
