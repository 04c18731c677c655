//! Fill-down of merged-cell values

use windrow_core::{Datum, Row};

/// Re-inserts a column value dropped by vertical cell merges
///
/// Sources built from merged cells often carry a value only in the first
/// row of the merge; the following rows arrive one cell short. When a row
/// is exactly one cell shorter than the previous one, the remembered
/// value of the configured column is re-inserted at that index. Full-width
/// rows refresh the remembered value.
#[derive(Debug)]
pub struct RepeatCell {
    column: usize,
    repeat_value: Option<Datum>,
    prev_len: usize,
}

impl RepeatCell {
    /// Create a fill-down transform for the given column index (0-based)
    pub fn new(column: usize) -> Self {
        Self {
            column,
            repeat_value: None,
            prev_len: 0,
        }
    }

    /// Process one row
    pub fn apply(&mut self, mut row: Row) -> Row {
        if row.len() + 1 == self.prev_len {
            if let Some(value) = &self.repeat_value {
                let at = self.column.min(row.len());
                row.insert(at, value.clone());
            }
        } else {
            self.prev_len = row.len();
            self.repeat_value = row.get(self.column).cloned();
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text_row(values: &[&str]) -> Row {
        values.iter().map(|v| Datum::Text(v.to_string())).collect()
    }

    #[test]
    fn test_short_rows_inherit_the_merged_value() {
        let mut t = RepeatCell::new(0);
        assert_eq!(
            t.apply(text_row(&["West", "Al", "30"])),
            text_row(&["West", "Al", "30"])
        );
        // The merge blanked the region column in the following rows
        assert_eq!(
            t.apply(text_row(&["Bo", "41"])),
            text_row(&["West", "Bo", "41"])
        );
        assert_eq!(
            t.apply(text_row(&["Cy", "28"])),
            text_row(&["West", "Cy", "28"])
        );
        // A new full-width row refreshes the remembered value
        assert_eq!(
            t.apply(text_row(&["East", "Di", "52"])),
            text_row(&["East", "Di", "52"])
        );
        assert_eq!(
            t.apply(text_row(&["Ed", "33"])),
            text_row(&["East", "Ed", "33"])
        );
    }

    #[test]
    fn test_equal_width_rows_pass_through() {
        let mut t = RepeatCell::new(0);
        let row = text_row(&["a", "b"]);
        assert_eq!(t.apply(row.clone()), row);
        assert_eq!(t.apply(row.clone()), row);
    }
}
