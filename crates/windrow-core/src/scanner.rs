//! Cell-to-row assembly and the cooperative scan loop

use crate::address::CellAddress;
use crate::cell::{Cell, Datum, Row};
use crate::error::{Error, Result};
use crate::filter::TableFilter;
use crate::options::{CellBounds, ScanOptions};
use crate::range::Range;
use std::mem;

/// Consumer capacity signal returned from a row delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// The consumer has capacity; keep scanning
    Continue,
    /// The consumer is saturated; suspend at this row boundary
    Pause,
}

/// Receives assembled rows and the terminal scan signal
///
/// Exactly one of [`on_end`](RowSink::on_end) or
/// [`on_error`](RowSink::on_error) is called per scan. Ownership of each
/// row transfers to the sink on delivery.
pub trait RowSink {
    /// A table row was assembled and accepted
    fn on_row(&mut self, row: Row) -> Flow;

    /// The scan finished: input exhausted, table ended, or cancelled
    fn on_end(&mut self);

    /// The scan aborted on a fatal fault; no further rows follow
    fn on_error(&mut self, error: Error);
}

/// A [`RowSink`] that collects everything into memory
#[derive(Debug, Default)]
pub struct RowBuffer {
    /// Accepted rows, in delivery order
    pub rows: Vec<Row>,
    /// Whether the end signal fired
    pub ended: bool,
    /// The error signal, if the scan aborted
    pub error: Option<Error>,
}

impl RowSink for RowBuffer {
    fn on_row(&mut self, row: Row) -> Flow {
        self.rows.push(row);
        Flow::Continue
    }

    fn on_end(&mut self) {
        self.ended = true;
    }

    fn on_error(&mut self, error: Error) {
        self.error = Some(error);
    }
}

/// Sort a sparse cell map into the scan's required order
///
/// The scanner expects its input sorted by row, then by column under the
/// length-then-alphabetic column order (natural reading order). Callers
/// holding an unordered map can pass it through here; a label that does
/// not parse fails the whole sort.
pub fn sort_cell_map<I>(cells: I) -> Result<Vec<(String, Cell)>>
where
    I: IntoIterator<Item = (String, Cell)>,
{
    let mut keyed = Vec::new();
    for (label, cell) in cells {
        let address = CellAddress::parse(&label)?;
        keyed.push((address, label, cell));
    }
    keyed.sort_by(|(a, _, _), (b, _, _)| (a.row, &a.column).cmp(&(b.row, &b.column)));
    Ok(keyed.into_iter().map(|(_, label, cell)| (label, cell)).collect())
}

/// Assembles sparse cells into rows and delivers the table window
///
/// The scanner walks an address-ordered `(label, cell)` sequence, groups
/// cells into rows at row-number changes, interpolates missing cells when
/// configured, filters rows through the table window, and hands accepted
/// rows to a [`RowSink`] one at a time.
///
/// Delivery is cooperative and single-threaded. A sink returning
/// [`Flow::Pause`] (or an explicit [`pause`](TableScanner::pause) call)
/// suspends the loop at the next row boundary after the completed row is
/// delivered; [`resume`](TableScanner::resume) continues from the saved
/// cursor. [`cancel`](TableScanner::cancel) is observed at the next loop
/// check and fires the end signal exactly once. Cancelling does not abort
/// any upstream fetch of the source document; only this scan halts.
///
/// Input ordering is a caller contract: rows monotonically increasing,
/// columns increasing within a row (see [`sort_cell_map`]). The scanner
/// performs no I/O; the cell map must be fully materialized.
#[derive(Debug)]
pub struct TableScanner {
    cells: Vec<(String, Cell)>,
    window: Range,
    bounds: CellBounds,
    missing_cells: bool,
    trim: bool,
    filter: TableFilter,

    // Resumable cursor
    pos: usize,
    prev: CellAddress,
    partial: Row,
    flushed: bool,

    started: bool,
    paused: bool,
    cancelled: bool,
    finished: bool,
    delivered: usize,
}

impl TableScanner {
    /// Create a scanner over an address-ordered cell sequence
    pub fn new(cells: Vec<(String, Cell)>, options: ScanOptions) -> Self {
        let window = options.range.unwrap_or_default();
        let filter = TableFilter::new(
            options.heading,
            options.stop_heading,
            options.cells,
            options.subheadings,
            options.repeating,
        );
        let prev = window.top_left.clone();
        Self {
            cells,
            window,
            bounds: options.cells,
            missing_cells: options.missing_cells,
            trim: options.trim,
            filter,
            pos: 0,
            prev,
            partial: Row::new(),
            flushed: false,
            started: false,
            paused: false,
            cancelled: false,
            finished: false,
            delivered: 0,
        }
    }

    /// Begin the scan from the start of the cell sequence
    ///
    /// Runs until input is exhausted, the table ends, the scan is
    /// suspended, or a fault aborts it. Calling again has no effect.
    pub fn start<S: RowSink>(&mut self, sink: &mut S) {
        if self.started {
            return;
        }
        self.started = true;
        log::debug!("scanning {} cells in range {}", self.cells.len(), self.window);
        self.drive(sink);
    }

    /// Request suspension at the next row boundary
    ///
    /// The row in progress is still completed and, if accepted,
    /// delivered before the loop suspends.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Continue a suspended scan from the saved cursor
    ///
    /// No-op unless the scan is started, unfinished, and paused. If the
    /// scan was cancelled while suspended, this performs the pending
    /// cancellation instead.
    pub fn resume<S: RowSink>(&mut self, sink: &mut S) {
        if !self.started || self.finished {
            return;
        }
        if self.cancelled {
            self.finish(sink, Ok(()));
            return;
        }
        if self.paused {
            self.paused = false;
            self.drive(sink);
        }
    }

    /// Cancel the scan; observed at the next loop check, idempotent
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Whether the scan is suspended awaiting [`resume`](Self::resume)
    pub fn is_paused(&self) -> bool {
        self.paused && !self.finished
    }

    /// Whether the terminal signal has fired
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The iteration loop; returns on suspension or termination
    fn drive<S: RowSink>(&mut self, sink: &mut S) {
        loop {
            if self.finished {
                return;
            }
            if self.cancelled || self.filter.is_done() {
                self.finish(sink, Ok(()));
                return;
            }

            if self.pos >= self.cells.len() {
                // Input exhausted: flush the final in-progress row
                if !self.flushed {
                    self.flushed = true;
                    let row = mem::take(&mut self.partial);
                    let emitted = self.emit(sink, row);
                    if self.suspend_after(emitted) {
                        return;
                    }
                }
                self.finish(sink, Ok(()));
                return;
            }

            let address = match CellAddress::parse(&self.cells[self.pos].0) {
                Ok(address) => address,
                Err(err) => {
                    self.finish(sink, Err(err));
                    return;
                }
            };

            if !self.window.contains(&address) {
                self.pos += 1;
                continue;
            }

            if address.row != self.prev.row {
                // Row boundary: complete the in-progress row
                if self.missing_cells && self.partial.len() >= self.bounds.min {
                    if let Err(err) = self.pad_to_right_edge() {
                        self.finish(sink, Err(err));
                        return;
                    }
                }
                let row = mem::take(&mut self.partial);
                self.prev = CellAddress::new(self.window.top_left.column.clone(), address.row);
                let emitted = self.emit(sink, row);
                if self.suspend_after(emitted) {
                    // Cursor stays on the current cell; it is reprocessed
                    // against the fresh row on resume
                    return;
                }
                continue;
            }

            // Same row: interpolate skipped columns, then append the value
            if self.missing_cells {
                let mut column = self.prev.column.succ();
                while column < address.column {
                    self.partial.push(Datum::Null);
                    column = column.succ();
                }
            }
            if let Some(datum) = self.cells[self.pos].1.contribution(self.trim) {
                self.partial.push(datum);
            }
            self.prev = address;
            self.pos += 1;
        }
    }

    /// Filter a completed row and deliver it if accepted
    fn emit<S: RowSink>(&mut self, sink: &mut S, row: Row) -> Flow {
        if self.filter.examine(&row) {
            self.delivered += 1;
            sink.on_row(row)
        } else {
            Flow::Continue
        }
    }

    /// Latch the pause flag if delivery or a control call asked for it
    fn suspend_after(&mut self, flow: Flow) -> bool {
        if flow == Flow::Pause || self.paused {
            self.paused = true;
            true
        } else {
            false
        }
    }

    /// Insert trailing nulls out to the window's right edge
    fn pad_to_right_edge(&mut self) -> Result<()> {
        let Some(bottom_right) = &self.window.bottom_right else {
            return Err(Error::UnboundedInterpolation);
        };
        let mut column = self.prev.column.succ();
        while column <= bottom_right.column {
            self.partial.push(Datum::Null);
            column = column.succ();
        }
        Ok(())
    }

    /// Deliver the terminal signal, exactly once
    fn finish<S: RowSink>(&mut self, sink: &mut S, outcome: Result<()>) {
        if self.finished {
            return;
        }
        self.finished = true;
        match outcome {
            Ok(()) => {
                log::debug!("scan complete, {} rows delivered", self.delivered);
                sink.on_end();
            }
            Err(err) => {
                log::warn!("scan aborted: {}", err);
                sink.on_error(err);
            }
        }
    }
}

/// Run a whole scan and collect the accepted rows
pub fn scan_rows(cells: Vec<(String, Cell)>, options: ScanOptions) -> Result<Vec<Row>> {
    let mut scanner = TableScanner::new(cells, options);
    let mut buffer = RowBuffer::default();
    scanner.start(&mut buffer);
    match buffer.error {
        Some(err) => Err(err),
        None => Ok(buffer.rows),
    }
}
