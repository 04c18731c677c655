//! Tag-driven table extraction

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::mem;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use regex::Regex;

use crate::error::HtmlResult;
use crate::options::ExtractOptions;
use windrow_core::{Datum, Row};

// Give up if the parser cannot make progress past bad markup
const MAX_CONSECUTIVE_ERRORS: usize = 100;

/// Extracts `<table>` rows from an HTML document
///
/// This is the simpler, tag-driven alternative to scanning a sparse cell
/// map: rows come straight from `<tr>`/`<th>`/`<td>` structure, with the
/// wanted table selected by its `id` attribute or by preceding
/// `<h1>`..`<h6>` heading text. The same cell-count window as the table
/// scan applies to each row.
pub struct HtmlTableReader {
    options: ExtractOptions,
    newline_runs: Regex,
}

impl HtmlTableReader {
    /// Create a reader with the given extraction options
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            options,
            // A newline plus its following indentation collapses to one space
            newline_runs: Regex::new(r"[\r\n]\s*").expect("static regex"),
        }
    }

    /// Extract table rows from an HTML file
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> HtmlResult<Vec<Row>> {
        let file = File::open(path)?;
        self.read(BufReader::new(file))
    }

    /// Extract table rows from an HTML string
    pub fn read_str(&self, html: &str) -> HtmlResult<Vec<Row>> {
        self.read(html.as_bytes())
    }

    /// Extract table rows from a reader
    pub fn read<R: BufRead>(&self, reader: R) -> HtmlResult<Vec<Row>> {
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.trim_text(true);
        // HTML is not well-formed XML; tolerate mismatched close tags
        xml_reader.check_end_names(false);

        let mut state = Extract::new(self);
        let mut buf = Vec::new();
        let mut errors = 0usize;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    let name = e.name().as_ref().to_ascii_uppercase();
                    state.open_tag(&name, &e);
                }
                Ok(Event::Empty(e)) => {
                    // Self-closing element: open and close in one step
                    let name = e.name().as_ref().to_ascii_uppercase();
                    state.open_tag(&name, &e);
                    state.close_tag(&name);
                }
                Ok(Event::End(e)) => {
                    let name = e.name().as_ref().to_ascii_uppercase();
                    state.close_tag(&name);
                }
                Ok(Event::Text(t)) => {
                    let text = t
                        .unescape()
                        .map(|c| c.into_owned())
                        .unwrap_or_else(|_| String::from_utf8_lossy(t.as_ref()).into_owned());
                    state.text(&text);
                }
                Ok(Event::Eof) => break,
                Ok(_) => {} // comments, doctype, processing instructions
                Err(err) => {
                    // Real-world HTML is ragged; skip what we cannot parse
                    errors += 1;
                    if errors > MAX_CONSECUTIVE_ERRORS {
                        return Err(err.into());
                    }
                    log::warn!("skipping malformed markup: {}", err);
                    buf.clear();
                    continue;
                }
            }
            errors = 0;
            buf.clear();
        }

        log::debug!("extracted {} table rows", state.rows.len());
        Ok(state.rows)
    }
}

/// Mutable extraction state for one document pass
struct Extract<'a> {
    reader: &'a HtmlTableReader,
    rows: Vec<Row>,
    row: Row,
    cell_text: String,
    heading_depth: usize,
    cell_depth: usize,
    in_table: bool,
    heading_seen: bool,
}

impl<'a> Extract<'a> {
    fn new(reader: &'a HtmlTableReader) -> Self {
        Self {
            reader,
            rows: Vec::new(),
            row: Row::new(),
            cell_text: String::new(),
            heading_depth: 0,
            cell_depth: 0,
            in_table: false,
            heading_seen: false,
        }
    }

    fn options(&self) -> &ExtractOptions {
        &self.reader.options
    }

    fn open_tag(&mut self, name: &[u8], e: &BytesStart<'_>) {
        match name {
            b"TABLE" => {
                self.in_table = if let Some(id) = &self.options().table_id {
                    element_id(e).map_or(false, |value| id.matches(&value))
                } else if self.options().heading.is_some() {
                    self.heading_seen
                } else {
                    true
                };
            }
            b"TR" => self.row.clear(),
            b"TH" | b"TD" => {
                self.cell_depth += 1;
                self.cell_text.clear();
            }
            _ if is_heading_tag(name) => self.heading_depth += 1,
            _ => {}
        }
    }

    fn close_tag(&mut self, name: &[u8]) {
        match name {
            b"TABLE" => {
                // Leaving the table rearms the heading search
                self.in_table = false;
                self.heading_seen = false;
            }
            b"TR" => {
                if self.in_table
                    && !self.row.is_empty()
                    && self.options().cells.contains(self.row.len())
                {
                    self.rows.push(mem::take(&mut self.row));
                } else {
                    self.row.clear();
                }
            }
            b"TH" | b"TD" => {
                self.cell_depth = self.cell_depth.saturating_sub(1);
                if self.in_table {
                    let mut text = mem::take(&mut self.cell_text);
                    if !self.options().newlines {
                        text = self
                            .reader
                            .newline_runs
                            .replace_all(&text, " ")
                            .into_owned();
                    }
                    if self.options().trim {
                        text = text.trim().to_string();
                    }
                    self.row.push(Datum::Text(text));
                }
            }
            _ if is_heading_tag(name) => {
                self.heading_depth = self.heading_depth.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.heading_depth > 0 {
            if let Some(heading) = &self.options().heading {
                if heading.matches(text.trim()) {
                    self.heading_seen = true;
                }
            }
        } else if self.cell_depth > 0 && self.in_table {
            // Text split across nested markup is joined with single spaces
            if !self.cell_text.is_empty() {
                self.cell_text.push(' ');
            }
            self.cell_text.push_str(text);
        }
    }
}

fn is_heading_tag(name: &[u8]) -> bool {
    matches!(name, b"H1" | b"H2" | b"H3" | b"H4" | b"H5" | b"H6")
}

fn element_id(e: &BytesStart<'_>) -> Option<String> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref().eq_ignore_ascii_case(b"id") {
            return attr.unescape_value().ok().map(|v| v.into_owned());
        }
    }
    None
}
