//! Row transforms and output rendering

use anyhow::{Context, Result};
use serde_json::Value;
use std::io::{self, Write};
use std::path::PathBuf;
use windrow_core::Row;
use windrow_transform::{datum_value, RepeatCell, RepeatHeading, RowObjector};

/// Output data format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Array of objects keyed by column name
    Json,
    /// CSV records
    Csv,
    /// JSON array of row arrays
    Rows,
}

/// Output and post-processing arguments shared by all sources
#[derive(Debug, clap::Args)]
pub struct OutputArgs {
    /// Output data format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Comma-separated column names for object output
    #[arg(long, value_delimiter = ',')]
    pub headers: Option<Vec<String>>,

    /// The first table row is a header row
    #[arg(long)]
    pub has_header: bool,

    /// Fill down the value of this column index across merged rows
    #[arg(long, value_name = "INDEX")]
    pub repeat_cell: Option<usize>,

    /// Flatten one-cell section headings into a column,
    /// spec "Name:headerIndex:dataIndex"
    #[arg(long, value_name = "SPEC")]
    pub repeat_heading: Option<String>,
}

/// Apply configured transforms, render, and write the result
pub fn write_rows(mut rows: Vec<Row>, args: &OutputArgs) -> Result<()> {
    if let Some(column) = args.repeat_cell {
        let mut fill = RepeatCell::new(column);
        rows = rows.into_iter().map(|row| fill.apply(row)).collect();
    }
    if let Some(spec) = &args.repeat_heading {
        let mut flatten = RepeatHeading::new(spec, args.has_header)?;
        rows = rows.into_iter().filter_map(|row| flatten.apply(row)).collect();
    }

    let count = rows.len();
    let rendered = match args.format {
        Format::Json => render_objects(rows, args)?,
        Format::Rows => render_row_arrays(rows)?,
        Format::Csv => render_csv(rows)?,
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            eprintln!("Wrote {} rows to '{}'", count, path.display());
        }
        None => {
            io::stdout()
                .write_all(rendered.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

fn render_objects(rows: Vec<Row>, args: &OutputArgs) -> Result<String> {
    let mut objector = RowObjector::new(args.headers.clone(), args.has_header);
    let objects: Vec<Value> = rows
        .into_iter()
        .filter_map(|row| objector.apply(row).map(Value::Object))
        .collect();
    let mut text = serde_json::to_string_pretty(&objects).context("JSON rendering failed")?;
    text.push('\n');
    Ok(text)
}

fn render_row_arrays(rows: Vec<Row>) -> Result<String> {
    let arrays: Vec<Vec<Value>> = rows
        .into_iter()
        .map(|row| row.into_iter().map(datum_value).collect())
        .collect();
    let mut text = serde_json::to_string_pretty(&arrays).context("JSON rendering failed")?;
    text.push('\n');
    Ok(text)
}

fn render_csv(rows: Vec<Row>) -> Result<String> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
    for row in rows {
        let record: Vec<String> = row.iter().map(|datum| datum.to_string()).collect();
        writer.write_record(&record)?;
    }
    let bytes = writer.into_inner().context("CSV rendering failed")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}
