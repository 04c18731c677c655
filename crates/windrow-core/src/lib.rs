//! # windrow-core
//!
//! Cell-to-row assembly and table-window engine: reconstructs logical
//! rows out of a sparse spreadsheet cell map, then filters them to the
//! portion that constitutes the data table, bounded by optional heading
//! text.
//!
//! The crate provides:
//! - [`CellAddress`] and [`Column`] - A1-style address arithmetic
//! - [`Range`] - rectangular selection windows
//! - [`Cell`] and [`Datum`] - input records and output values
//! - [`TableFilter`] - the heading/table state machine
//! - [`TableScanner`] - row assembly with cooperative pull delivery
//!
//! Document loading and output formatting are collaborator concerns;
//! the engine only consumes an address-ordered
//! `(label, cell)` sequence and delivers rows to a [`RowSink`].
//!
//! ## Example
//!
//! ```rust
//! use windrow_core::{scan_rows, Cell, Datum, ScanOptions};
//!
//! let cells = vec![
//!     ("A1".to_string(), Cell::text("Name")),
//!     ("B1".to_string(), Cell::text("Age")),
//!     ("A2".to_string(), Cell::text("Al")),
//!     ("B2".to_string(), Cell::text("30")),
//! ];
//!
//! let mut options = ScanOptions::new();
//! options.cells = "2".parse().unwrap();
//! options.range = Some("A1:B2".parse().unwrap());
//!
//! let rows = scan_rows(cells, options).unwrap();
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[0][0], Datum::Text("Name".into()));
//! ```

pub mod address;
pub mod cell;
pub mod error;
pub mod filter;
pub mod options;
pub mod range;
pub mod scanner;

// Re-exports for convenience
pub use address::{CellAddress, Column};
pub use cell::{Cell, Datum, Row};
pub use error::{Error, Result};
pub use filter::TableFilter;
pub use options::{CellBounds, Heading, ScanOptions};
pub use range::Range;
pub use scanner::{scan_rows, sort_cell_map, Flow, RowBuffer, RowSink, TableScanner};
