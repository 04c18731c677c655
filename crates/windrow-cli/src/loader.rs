//! JSON cell-map loading
//!
//! The scan engine consumes an already-materialized sparse cell map;
//! format-specific decoding belongs to whatever produced the file. The
//! accepted JSON shape is the common worksheet-object layout: an object
//! keyed by A1 address, each cell carrying a type tag `t`
//! (`n`umber, `s`tring, `b`oolean, `d`ate text, `e`rror, `z` stub),
//! a value `v`, optional formatted text `w`, and a `date` flag for
//! date-formatted numbers. Keys starting with `!` are sheet metadata and
//! are skipped.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use windrow_core::{sort_cell_map, Cell};

#[derive(Debug, Deserialize)]
struct CellJson {
    t: String,
    #[serde(default)]
    v: Option<Value>,
    #[serde(default)]
    w: Option<String>,
    #[serde(default)]
    date: bool,
}

impl CellJson {
    fn into_cell(self) -> Cell {
        match self.t.as_str() {
            "n" => Cell::Number {
                value: self.v.as_ref().and_then(Value::as_f64).unwrap_or(0.0),
                formatted: self.w,
                date: self.date,
            },
            "s" => Cell::Text(value_text(self.v)),
            "b" => Cell::Boolean(self.v.as_ref().and_then(Value::as_bool).unwrap_or(false)),
            "d" => Cell::DateText(value_text(self.v)),
            "e" => Cell::Error(self.w.unwrap_or_else(|| value_text(self.v))),
            _ => Cell::Blank,
        }
    }
}

fn value_text(v: Option<Value>) -> String {
    match v {
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

/// Load a JSON cell map and sort it into scan order
pub fn load_cell_map(path: &Path) -> Result<Vec<(String, Cell)>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    let map: serde_json::Map<String, Value> = serde_json::from_str(&text)
        .with_context(|| format!("'{}' is not a JSON cell map", path.display()))?;

    let mut cells = Vec::with_capacity(map.len());
    for (label, value) in map {
        if label.starts_with('!') {
            continue; // sheet metadata, e.g. "!ref"
        }
        let cell: CellJson = serde_json::from_value(value)
            .with_context(|| format!("Malformed cell record at '{}'", label))?;
        cells.push((label, cell.into_cell()));
    }

    sort_cell_map(cells).context("Cell map contains an invalid address")
}
