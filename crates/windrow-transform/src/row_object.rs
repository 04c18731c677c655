//! Row-to-object conversion

use serde_json::{Map, Value};
use windrow_core::{Datum, Row};

/// Converts positional rows into JSON objects keyed by column name
///
/// Column names come from the supplied headers or, when none are given,
/// from the first row. Cells beyond the known headers key by their
/// position index.
#[derive(Debug)]
pub struct RowObjector {
    headers: Option<Vec<String>>,
    has_header: bool,
    seen_first: bool,
}

impl RowObjector {
    /// Create a converter
    ///
    /// With `headers: None` the first row always supplies the names.
    /// With explicit headers, `has_header` additionally drops the
    /// source's own header row.
    pub fn new(headers: Option<Vec<String>>, has_header: bool) -> Self {
        Self {
            headers,
            has_header,
            seen_first: false,
        }
    }

    /// Process one row; returns `None` for a consumed header row
    pub fn apply(&mut self, row: Row) -> Option<Map<String, Value>> {
        if !self.seen_first {
            self.seen_first = true;
            if self.headers.is_none() {
                self.headers = Some(row.iter().map(|d| d.to_string()).collect());
                return None;
            }
            if self.has_header {
                // Explicit headers win; drop the source's own header row
                return None;
            }
        }

        let headers = self.headers.as_deref().unwrap_or_default();
        let mut object = Map::new();
        for (i, datum) in row.into_iter().enumerate() {
            let key = headers
                .get(i)
                .cloned()
                .unwrap_or_else(|| i.to_string());
            object.insert(key, datum_value(datum));
        }
        Some(object)
    }
}

/// Convert an output scalar to its JSON value
pub fn datum_value(datum: Datum) -> Value {
    match datum {
        Datum::Number(n) => serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Datum::Text(s) => Value::String(s),
        Datum::Bool(b) => Value::Bool(b),
        Datum::Null => Value::Null,
    }
}
