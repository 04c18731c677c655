//! # windrow-html
//!
//! Tag-driven extraction of `<table>` rows from HTML documents - the
//! simpler alternate source to scanning a sparse cell map. Produces the
//! same [`Row`](windrow_core::Row) values as windrow-core, selected by
//! table `id` or by preceding heading text.

mod error;
mod options;
mod reader;

pub use error::{HtmlError, HtmlResult};
pub use options::ExtractOptions;
pub use reader::HtmlTableReader;
