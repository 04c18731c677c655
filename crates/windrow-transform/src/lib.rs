//! # windrow-transform
//!
//! Row post-processing for windrow: fill-down of merged-cell values,
//! flattening of repeated section headings, and row-to-object
//! conversion. Each transform is a small stateful struct driven
//! row-by-row, matching the pull-based delivery of the scan.

mod error;
mod repeat_cell;
mod repeat_heading;
mod row_object;

pub use error::{TransformError, TransformResult};
pub use repeat_cell::RepeatCell;
pub use repeat_heading::RepeatHeading;
pub use row_object::{datum_value, RowObjector};
