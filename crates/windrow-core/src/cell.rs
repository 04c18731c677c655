//! Cell records and output values

use std::fmt;

/// A typed cell record produced by a document loader
///
/// Records are read-only input; the scan never mutates them. The variants
/// follow the cell types that spreadsheet readers commonly emit.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Numeric cell; `formatted` is the display text, `date` marks a
    /// date number format
    Number {
        /// The numeric value
        value: f64,
        /// Formatted display text, if the loader produced one
        formatted: Option<String>,
        /// Whether the cell carries a date number format
        date: bool,
    },
    /// String cell
    Text(String),
    /// Boolean cell
    Boolean(bool),
    /// Date already rendered to text by the loader
    DateText(String),
    /// Error cell (#VALUE!, #REF!, etc.)
    Error(String),
    /// Blank stub cell
    Blank,
}

impl Cell {
    /// Convenience constructor for a plain number
    pub fn number(value: f64) -> Self {
        Cell::Number {
            value,
            formatted: None,
            date: false,
        }
    }

    /// Convenience constructor for a text cell
    pub fn text<S: Into<String>>(s: S) -> Self {
        Cell::Text(s.into())
    }

    /// The cell's contribution to an output row, if any
    ///
    /// Date-formatted numbers contribute their formatted text, plain
    /// numbers their value, text its (optionally trimmed) string, and
    /// booleans and date-text pass through unchanged. Error and Blank
    /// cells contribute nothing at all: they do not become null and do
    /// not advance the row's cell count, which shortens the row relative
    /// to its visual column span unless gap interpolation pads it.
    pub fn contribution(&self, trim: bool) -> Option<Datum> {
        match self {
            Cell::Number {
                value,
                formatted,
                date,
            } => match formatted {
                Some(text) if *date => Some(Datum::Text(text.clone())),
                _ => Some(Datum::Number(*value)),
            },
            Cell::Text(s) => {
                if trim {
                    Some(Datum::Text(s.trim().to_string()))
                } else {
                    Some(Datum::Text(s.clone()))
                }
            }
            Cell::Boolean(b) => Some(Datum::Bool(*b)),
            Cell::DateText(s) => Some(Datum::Text(s.clone())),
            Cell::Error(_) | Cell::Blank => None,
        }
    }
}

/// An output scalar in an assembled row
///
/// `Null` only ever appears for interpolated gaps; skipped Error/Blank
/// cells leave no trace.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Datum {
    /// Numeric value
    Number(f64),
    /// Text value
    Text(String),
    /// Boolean value
    Bool(bool),
    /// Interpolated gap
    Null,
}

impl Datum {
    /// The text of this value, if it is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Datum::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Datum::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Datum::Text(s) => write!(f, "{}", s),
            Datum::Bool(b) => write!(f, "{}", b),
            Datum::Null => Ok(()),
        }
    }
}

/// An assembled output row
///
/// The length is the number of populated plus interpolated cells, not a
/// fixed schema width.
pub type Row = Vec<Datum>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_contribution() {
        let cell = Cell::number(42.5);
        assert_eq!(cell.contribution(true), Some(Datum::Number(42.5)));
    }

    #[test]
    fn test_date_number_takes_formatted_text() {
        let cell = Cell::Number {
            value: 45000.0,
            formatted: Some("2023-03-15".into()),
            date: true,
        };
        assert_eq!(
            cell.contribution(true),
            Some(Datum::Text("2023-03-15".into()))
        );

        // A non-date format stays numeric even when formatted text exists
        let cell = Cell::Number {
            value: 1234.5,
            formatted: Some("1,234.50".into()),
            date: false,
        };
        assert_eq!(cell.contribution(true), Some(Datum::Number(1234.5)));
    }

    #[test]
    fn test_text_trim() {
        let cell = Cell::text("  padded  ");
        assert_eq!(cell.contribution(true), Some(Datum::Text("padded".into())));
        assert_eq!(
            cell.contribution(false),
            Some(Datum::Text("  padded  ".into()))
        );
    }

    #[test]
    fn test_error_and_blank_are_skipped() {
        assert_eq!(Cell::Error("#REF!".into()).contribution(true), None);
        assert_eq!(Cell::Blank.contribution(true), None);
    }

    #[test]
    fn test_datum_display() {
        assert_eq!(Datum::Number(30.0).to_string(), "30");
        assert_eq!(Datum::Number(0.5).to_string(), "0.5");
        assert_eq!(Datum::Text("hi".into()).to_string(), "hi");
        assert_eq!(Datum::Bool(true).to_string(), "true");
        assert_eq!(Datum::Null.to_string(), "");
    }
}
