//! Cell address types and column arithmetic

use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A spreadsheet column label (e.g., "A", "Z", "AA")
///
/// Columns are kept as their letter labels rather than numeric indices
/// because label order is what drives row assembly. The ordering is
/// length-then-alphabetic: shorter labels always sort before longer ones,
/// so `"Z" < "AA"` and `"AZ" < "BA"`, matching spreadsheet column order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column(String);

impl Column {
    /// Parse a column label (one or more letters, folded to uppercase)
    pub fn parse(letters: &str) -> Result<Self> {
        if letters.is_empty() || !letters.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(Error::InvalidAddress(format!(
                "invalid column letters '{}'",
                letters
            )));
        }
        Ok(Column(letters.to_ascii_uppercase()))
    }

    /// The first column, `A`
    pub fn first() -> Self {
        Column("A".to_string())
    }

    /// The column label as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The next column label in spreadsheet order
    ///
    /// Base-26 increment over letters: the rightmost letter advances
    /// `A..Z`; a `Z` rolls to `A` and carries leftward; if every position
    /// rolls over, a new leading `A` is prepended. `"Z"` becomes `"AA"`,
    /// `"AZ"` becomes `"BA"`, `"ZZ"` becomes `"AAA"`.
    pub fn succ(&self) -> Column {
        let mut letters: Vec<char> = self.0.chars().collect();

        for c in letters.iter_mut().rev() {
            if *c == 'Z' {
                *c = 'A';
            } else {
                *c = ((*c as u8) + 1) as char;
                return Column(letters.into_iter().collect());
            }
        }

        // Every position rolled over
        let mut label = String::with_capacity(letters.len() + 1);
        label.push('A');
        label.extend(letters);
        Column(label)
    }
}

impl Ord for Column {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Column {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell address in A1 notation (e.g., "B12")
///
/// Rows are 1-based, as displayed in spreadsheet applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellAddress {
    /// Column letters
    pub column: Column,
    /// Row number (1-based)
    pub row: u32,
}

impl CellAddress {
    /// Create a new cell address
    pub fn new(column: Column, row: u32) -> Self {
        Self { column, row }
    }

    /// The top-left address of a sheet, `A1`
    pub fn origin() -> Self {
        Self {
            column: Column::first(),
            row: 1,
        }
    }

    /// Parse a cell address from A1-style notation
    ///
    /// The label must be exactly a run of letters followed by a run of
    /// digits; anything else fails.
    ///
    /// # Examples
    /// ```
    /// use windrow_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("B12").unwrap();
    /// assert_eq!(addr.column.as_str(), "B");
    /// assert_eq!(addr.row, 12);
    /// ```
    pub fn parse(label: &str) -> Result<Self> {
        let s = label.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let bytes = s.as_bytes();
        let mut pos = 0;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }

        if pos == 0 {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }

        let row_str = &s[pos..];
        if row_str.is_empty() || !row_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        Ok(Self {
            column: Column::parse(&s[..pos])?,
            row,
        })
    }

    /// Whether this address is above-left-of-or-equal-to another
    ///
    /// True iff the row is `<=` and the column is `<=` under the
    /// length-then-alphabetic column order.
    pub fn precedes(&self, other: &CellAddress) -> bool {
        self.row <= other.row && self.column <= other.column
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
