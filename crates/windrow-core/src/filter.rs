//! Heading/table state machine

use crate::cell::{Datum, Row};
use crate::options::{CellBounds, Heading};

/// Where the filter is in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Discarding rows until the configured heading text appears
    SeekHeading,
    /// Heading found (or none configured); waiting for the first row
    /// whose length fits the cell-count window
    SeekTable,
    /// Inside the data table
    InTable,
    /// Table ended; everything else is discarded
    Done,
}

/// Decides which assembled rows belong to the data table
///
/// The filter moves through `SeekHeading -> SeekTable -> InTable -> Done`
/// as rows are examined. All of its state lives here so the transitions
/// can be unit-tested without a scan loop.
#[derive(Debug)]
pub struct TableFilter {
    heading: Option<Heading>,
    stop_heading: Option<Heading>,
    bounds: CellBounds,
    subheadings: bool,
    repeating: bool,
    phase: Phase,
    header_row: Option<Row>,
}

impl TableFilter {
    /// Create a filter; `SeekHeading` is skipped when no heading is set
    pub fn new(
        heading: Option<Heading>,
        stop_heading: Option<Heading>,
        bounds: CellBounds,
        subheadings: bool,
        repeating: bool,
    ) -> Self {
        let phase = if heading.is_some() {
            Phase::SeekHeading
        } else {
            Phase::SeekTable
        };
        Self {
            heading,
            stop_heading,
            bounds,
            subheadings,
            repeating,
            phase,
            header_row: None,
        }
    }

    /// Whether the table has ended; the caller may stop assembling early
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Examine a completed row and decide whether to emit it
    ///
    /// The row that matches the heading, the row that triggers the stop
    /// condition, and everything outside the table window are rejected.
    pub fn examine(&mut self, row: &Row) -> bool {
        match self.phase {
            Phase::SeekHeading => {
                if matches_first_cell(&self.heading, row) {
                    self.phase = Phase::SeekTable;
                }
                false
            }
            Phase::SeekTable => {
                if self.length_ok(row.len()) {
                    self.phase = Phase::InTable;
                    self.accept(row)
                } else {
                    false
                }
            }
            Phase::InTable => {
                if !self.length_ok(row.len()) || matches_first_cell(&self.stop_heading, row) {
                    self.phase = Phase::Done;
                    false
                } else {
                    self.accept(row)
                }
            }
            Phase::Done => false,
        }
    }

    /// Row length check, with the one-cell subheading allowance
    fn length_ok(&self, len: usize) -> bool {
        self.bounds.contains(len) || (self.subheadings && len == 1)
    }

    /// Repeating-header suppression over an otherwise accepted row
    fn accept(&mut self, row: &Row) -> bool {
        if !self.repeating {
            return true;
        }
        match &self.header_row {
            None => {
                // First accepted row entering the table is the header
                self.header_row = Some(row.clone());
                true
            }
            Some(header) => header != row,
        }
    }
}

/// Match a heading against a row's first cell
///
/// Only text cells can match; an empty row never matches.
fn matches_first_cell(heading: &Option<Heading>, row: &Row) -> bool {
    let Some(heading) = heading else {
        return false;
    };
    match row.first() {
        Some(Datum::Text(text)) => heading.matches(text),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Heading;

    fn text_row(cells: &[&str]) -> Row {
        cells.iter().map(|s| Datum::Text(s.to_string())).collect()
    }

    fn filter(heading: Option<&str>, stop: Option<&str>, min: usize) -> TableFilter {
        TableFilter::new(
            heading.map(Heading::exact),
            stop.map(Heading::exact),
            CellBounds::new(min, 256),
            false,
            false,
        )
    }

    #[test]
    fn test_no_heading_starts_at_table() {
        let mut f = filter(None, None, 2);
        assert!(!f.examine(&text_row(&["only one"])));
        assert!(f.examine(&text_row(&["Name", "Age"])));
        assert!(f.examine(&text_row(&["Al", "30"])));
    }

    #[test]
    fn test_heading_gates_the_table() {
        let mut f = filter(Some("H"), None, 2);

        // Rows before the heading are discarded even when they fit
        assert!(!f.examine(&text_row(&["a", "b"])));
        // The heading row itself is not emitted
        assert!(!f.examine(&text_row(&["H"])));
        // First fitting row starts the table
        assert!(f.examine(&text_row(&["Name", "Age"])));
        assert!(f.examine(&text_row(&["Al", "30"])));
    }

    #[test]
    fn test_stop_heading_ends_the_table() {
        let mut f = filter(Some("H"), Some("S"), 2);
        assert!(!f.examine(&text_row(&["H"])));
        assert!(f.examine(&text_row(&["Name", "Age"])));
        // The stop row is not emitted and ends the table
        assert!(!f.examine(&text_row(&["S", "ignored"])));
        assert!(f.is_done());
        assert!(!f.examine(&text_row(&["late", "row"])));
    }

    #[test]
    fn test_short_row_ends_the_table() {
        let mut f = filter(None, None, 2);
        assert!(f.examine(&text_row(&["Name", "Age"])));
        assert!(!f.examine(&text_row(&["stray"])));
        assert!(f.is_done());
        assert!(!f.examine(&text_row(&["more", "data"])));
    }

    #[test]
    fn test_empty_row_never_matches_heading() {
        let mut f = filter(Some("H"), None, 1);
        assert!(!f.examine(&Row::new()));
        assert!(!f.is_done());
    }

    #[test]
    fn test_repeating_header_suppressed() {
        let mut f = TableFilter::new(None, None, CellBounds::new(2, 256), false, true);
        let header = text_row(&["Name", "Age"]);

        assert!(f.examine(&header));
        assert!(f.examine(&text_row(&["Al", "30"])));
        // Verbatim repeat of the header is suppressed
        assert!(!f.examine(&header));
        // A different row of the same length is not
        assert!(f.examine(&text_row(&["Bo", "41"])));
    }

    #[test]
    fn test_subheading_rows_pass_the_window() {
        let mut f = TableFilter::new(None, None, CellBounds::new(2, 256), true, false);
        assert!(f.examine(&text_row(&["Name", "Age"])));
        // One-cell section heading neither ends the table nor is dropped
        assert!(f.examine(&text_row(&["Adams County"])));
        assert!(f.examine(&text_row(&["Al", "30"])));
    }
}
