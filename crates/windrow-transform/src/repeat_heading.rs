//! Flattening of one-cell section headings into data rows

use crate::error::{TransformError, TransformResult};
use windrow_core::{Datum, Row};

/// Folds repeated section-heading rows into a column
///
/// Some documents break a table into sections with a one-cell heading row
/// (a county name, a region) repeated above each group. This transform
/// captures those rows, drops them from the stream, and splices the
/// captured value into every following data row, turning the sections
/// back into a flat table. The spec string names the new column and where
/// it lands: `"County:1:0"` inserts the column name at index 1 of the
/// header row and each captured value at index 0 of the data rows.
#[derive(Debug)]
pub struct RepeatHeading {
    column_name: String,
    header_index: usize,
    data_index: usize,
    has_header: bool,
    subheading: Datum,
    seen_header: bool,
}

impl RepeatHeading {
    /// Parse a `"Name"` or `"Name:headerIndex:dataIndex"` spec
    ///
    /// `has_header` marks the first non-heading row as the table's header
    /// row, which receives the column name instead of a captured value.
    pub fn new(spec: &str, has_header: bool) -> TransformResult<Self> {
        let mut parts = spec.split(':');
        let column_name = match parts.next() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Err(TransformError::InvalidHeadingSpec(spec.to_string())),
        };
        let mut index = |part: Option<&str>| -> TransformResult<usize> {
            match part {
                None => Ok(0),
                Some(n) => n
                    .parse()
                    .map_err(|_| TransformError::InvalidHeadingSpec(spec.to_string())),
            }
        };
        let header_index = index(parts.next())?;
        let data_index = index(parts.next())?;
        if parts.next().is_some() {
            return Err(TransformError::InvalidHeadingSpec(spec.to_string()));
        }
        Ok(Self {
            column_name,
            header_index,
            data_index,
            has_header,
            subheading: Datum::Null,
            seen_header: false,
        })
    }

    /// Process one row; heading rows are captured and dropped
    pub fn apply(&mut self, mut row: Row) -> Option<Row> {
        if row.len() == 1 {
            self.subheading = row.remove(0);
            return None;
        }
        if self.has_header && !self.seen_header {
            self.seen_header = true;
            let at = self.header_index.min(row.len());
            row.insert(at, Datum::Text(self.column_name.clone()));
        } else {
            let at = self.data_index.min(row.len());
            row.insert(at, self.subheading.clone());
        }
        Some(row)
    }
}
