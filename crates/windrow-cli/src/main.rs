//! windrow CLI - tabular data extraction tool

mod loader;
mod output;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use output::OutputArgs;
use windrow_core::{scan_rows, CellBounds, Heading, ScanOptions};
use windrow_html::{ExtractOptions, HtmlTableReader};

#[derive(Parser)]
#[command(name = "wrow")]
#[command(
    author,
    version,
    about = "Extract the data table from a spreadsheet cell map or an HTML document"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a JSON sparse cell map and extract the data table
    Scan {
        /// JSON cell map file (worksheet-object layout)
        input: PathBuf,

        #[command(flatten)]
        scan: ScanArgs,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Extract table rows from an HTML document
    Html {
        /// Input HTML file
        input: PathBuf,

        /// Heading text preceding the wanted table
        #[arg(long)]
        heading: Option<String>,

        /// Heading regex preceding the wanted table
        #[arg(long, conflicts_with = "heading")]
        heading_pattern: Option<String>,

        /// Select the table with this id attribute
        #[arg(long)]
        table_id: Option<String>,

        /// Cells per row: minimum "7" or window "7-9"
        #[arg(long)]
        cells: Option<String>,

        /// Keep embedded newlines in cell text
        #[arg(long)]
        newlines: bool,

        /// Do not trim cell text
        #[arg(long)]
        no_trim: bool,

        #[command(flatten)]
        out: OutputArgs,
    },
}

#[derive(Debug, Args)]
struct ScanArgs {
    /// A1-style data selection, e.g. "A3:M24"
    #[arg(long)]
    range: Option<String>,

    /// Text before the data table
    #[arg(long)]
    heading: Option<String>,

    /// Regex before the data table
    #[arg(long, conflicts_with = "heading")]
    heading_pattern: Option<String>,

    /// Text after the data table
    #[arg(long)]
    stop_heading: Option<String>,

    /// Regex after the data table
    #[arg(long, conflicts_with = "stop_heading")]
    stop_pattern: Option<String>,

    /// Cells per row: minimum "7" or window "7-9"
    #[arg(long)]
    cells: Option<String>,

    /// Insert nulls for cells missing from a row (needs a bounded range)
    #[arg(long)]
    missing_cells: bool,

    /// Table headers repeat on each printed page
    #[arg(long)]
    repeating: bool,

    /// Do not trim text cell values
    #[arg(long)]
    no_trim: bool,

    /// JSON options file merged under explicit flags
    #[arg(long)]
    options: Option<PathBuf>,
}

/// Options-file counterpart of the command line flags
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct FileOptions {
    range: Option<String>,
    heading: Option<String>,
    heading_pattern: Option<String>,
    stop_heading: Option<String>,
    stop_pattern: Option<String>,
    cells: Option<CellsValue>,
    missing_cells: Option<bool>,
    repeating: Option<bool>,
    trim: Option<bool>,
    headers: Option<Vec<String>>,
    has_header: Option<bool>,
    repeat_cell: Option<usize>,
    repeat_heading: Option<String>,
}

/// The "cells" option takes a number (minimum) or a "min-max" string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CellsValue {
    Count(usize),
    Spec(String),
}

impl CellsValue {
    fn to_bounds(&self) -> Result<CellBounds> {
        let bounds = match self {
            CellsValue::Count(min) => CellBounds::new(*min, CellBounds::default().max),
            CellsValue::Spec(spec) => spec.parse()?,
        };
        Ok(bounds)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { input, scan, out } => run_scan(&input, scan, out),
        Commands::Html {
            input,
            heading,
            heading_pattern,
            table_id,
            cells,
            newlines,
            no_trim,
            out,
        } => run_html(
            &input,
            heading,
            heading_pattern,
            table_id,
            cells,
            newlines,
            no_trim,
            out,
        ),
    }
}

fn run_scan(input: &Path, scan: ScanArgs, mut out: OutputArgs) -> Result<()> {
    let file = load_file_options(scan.options.as_deref())?;
    merge_output_options(&mut out, &file);
    let options = build_scan_options(&scan, &file, out.repeat_heading.is_some())?;

    let cells = loader::load_cell_map(input)?;
    let rows = scan_rows(cells, options)
        .with_context(|| format!("Failed to extract table from '{}'", input.display()))?;
    output::write_rows(rows, &out)
}

#[allow(clippy::too_many_arguments)]
fn run_html(
    input: &Path,
    heading: Option<String>,
    heading_pattern: Option<String>,
    table_id: Option<String>,
    cells: Option<String>,
    newlines: bool,
    no_trim: bool,
    out: OutputArgs,
) -> Result<()> {
    let mut options = ExtractOptions {
        newlines,
        trim: !no_trim,
        table_id: table_id.map(Heading::Exact),
        ..ExtractOptions::default()
    };
    options.heading = build_heading(&heading_pattern, &heading)?;
    if let Some(spec) = cells {
        options.cells = spec.parse()?;
    }

    let rows = HtmlTableReader::new(options)
        .read_file(input)
        .with_context(|| format!("Failed to extract table from '{}'", input.display()))?;
    output::write_rows(rows, &out)
}

fn load_file_options(path: Option<&Path>) -> Result<FileOptions> {
    let Some(path) = path else {
        return Ok(FileOptions::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read options file '{}'", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Invalid options file '{}'", path.display()))
}

/// Command line flags win over options-file values
fn build_scan_options(
    scan: &ScanArgs,
    file: &FileOptions,
    subheadings: bool,
) -> Result<ScanOptions> {
    let mut options = ScanOptions::new();

    if let Some(range) = scan.range.as_ref().or(file.range.as_ref()) {
        options.range = Some(range.parse()?);
    }
    options.heading = build_heading(
        &scan.heading_pattern.clone().or_else(|| file.heading_pattern.clone()),
        &scan.heading.clone().or_else(|| file.heading.clone()),
    )?;
    options.stop_heading = build_heading(
        &scan.stop_pattern.clone().or_else(|| file.stop_pattern.clone()),
        &scan.stop_heading.clone().or_else(|| file.stop_heading.clone()),
    )?;
    options.cells = match (&scan.cells, &file.cells) {
        (Some(spec), _) => spec.parse()?,
        (None, Some(value)) => value.to_bounds()?,
        (None, None) => CellBounds::default(),
    };
    options.missing_cells = scan.missing_cells || file.missing_cells.unwrap_or(false);
    options.repeating = scan.repeating || file.repeating.unwrap_or(false);
    options.trim = !scan.no_trim && file.trim.unwrap_or(true);
    options.subheadings = subheadings;

    Ok(options)
}

fn build_heading(pattern: &Option<String>, text: &Option<String>) -> Result<Option<Heading>> {
    if let Some(pattern) = pattern {
        return Ok(Some(Heading::pattern(pattern)?));
    }
    Ok(text.clone().map(Heading::exact))
}

fn merge_output_options(out: &mut OutputArgs, file: &FileOptions) {
    if out.headers.is_none() {
        out.headers = file.headers.clone();
    }
    out.has_header = out.has_header || file.has_header.unwrap_or(false);
    if out.repeat_cell.is_none() {
        out.repeat_cell = file.repeat_cell;
    }
    if out.repeat_heading.is_none() {
        out.repeat_heading = file.repeat_heading.clone();
    }
}
