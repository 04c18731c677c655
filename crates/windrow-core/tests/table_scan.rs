//! End-to-end scans over small sparse cell maps

use pretty_assertions::assert_eq;
use windrow_core::{scan_rows, sort_cell_map, Cell, Datum, Row, ScanOptions};

fn text_cells(pairs: &[(&str, &str)]) -> Vec<(String, Cell)> {
    pairs
        .iter()
        .map(|(label, value)| (label.to_string(), Cell::text(*value)))
        .collect()
}

fn text_row(values: &[&str]) -> Row {
    values.iter().map(|v| Datum::Text(v.to_string())).collect()
}

#[test]
fn name_age_table() {
    let cells = text_cells(&[("A1", "Name"), ("B1", "Age"), ("A2", "Al"), ("B2", "30")]);
    let mut options = ScanOptions::new();
    options.range = Some("A1:B2".parse().unwrap());
    options.cells = "2".parse().unwrap();

    let rows = scan_rows(cells, options).unwrap();
    assert_eq!(rows, vec![text_row(&["Name", "Age"]), text_row(&["Al", "30"])]);
}

#[test]
fn in_row_gap_is_interpolated() {
    let cells = text_cells(&[("A1", "x"), ("C1", "y")]);
    let mut options = ScanOptions::new();
    options.range = Some("A1:C1".parse().unwrap());
    options.missing_cells = true;

    let rows = scan_rows(cells, options).unwrap();
    assert_eq!(
        rows,
        vec![vec![
            Datum::Text("x".into()),
            Datum::Null,
            Datum::Text("y".into()),
        ]]
    );
}

#[test]
fn one_row_per_distinct_populated_row_number() {
    // Rows 1, 4 and 9 are populated; rows in between are absent entirely
    let cells = text_cells(&[
        ("A1", "a"),
        ("B1", "b"),
        ("B4", "c"),
        ("A9", "d"),
        ("C9", "e"),
    ]);
    let rows = scan_rows(cells, ScanOptions::new()).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], text_row(&["a", "b"]));
    assert_eq!(rows[1], text_row(&["c"]));
    assert_eq!(rows[2], text_row(&["d", "e"]));
}

#[test]
fn out_of_range_cells_are_skipped() {
    let cells = text_cells(&[
        ("A1", "skip"),
        ("A3", "Name"),
        ("B3", "Age"),
        ("A4", "Al"),
        ("B4", "30"),
        ("D4", "outside"),
        ("A7", "below"),
    ]);
    let mut options = ScanOptions::new();
    options.range = Some("A3:B4".parse().unwrap());
    options.cells = "2".parse().unwrap();

    let rows = scan_rows(cells, options).unwrap();
    assert_eq!(rows, vec![text_row(&["Name", "Age"]), text_row(&["Al", "30"])]);
}

#[test]
fn boundary_padded_rows_span_the_window_width() {
    // B2 and C3 are missing; rows completed at a boundary are padded out
    // to the full A..C width
    let cells = text_cells(&[
        ("A1", "h1"),
        ("B1", "h2"),
        ("C1", "h3"),
        ("A2", "a"),
        ("C2", "c"),
        ("A3", "d"),
        ("B3", "e"),
        ("A4", "x"),
        ("B4", "y"),
        ("C4", "z"),
    ]);
    let mut options = ScanOptions::new();
    options.range = Some("A1:C4".parse().unwrap());
    options.missing_cells = true;

    let rows = scan_rows(cells, options).unwrap();
    assert_eq!(rows.len(), 4);
    for row in &rows[..3] {
        assert_eq!(row.len(), 3);
    }
    assert_eq!(
        rows[1],
        vec![Datum::Text("a".into()), Datum::Null, Datum::Text("c".into())]
    );
    assert_eq!(
        rows[2],
        vec![Datum::Text("d".into()), Datum::Text("e".into()), Datum::Null]
    );
}

#[test]
fn heading_and_stop_heading_bound_the_table() {
    let cells = text_cells(&[
        ("A1", "Quarterly Report"),
        ("A2", "before"),
        ("B2", "table"),
        ("A3", "H"),
        ("A4", "Name"),
        ("B4", "Age"),
        ("A5", "Al"),
        ("B5", "30"),
        ("A6", "Bo"),
        ("B6", "41"),
        ("A7", "S"),
        ("B7", "footer"),
        ("A8", "after"),
        ("B8", "table"),
    ]);
    let mut options = ScanOptions::new();
    options.heading = Some(windrow_core::Heading::exact("H"));
    options.stop_heading = Some(windrow_core::Heading::exact("S"));
    options.cells = "2".parse().unwrap();

    let rows = scan_rows(cells, options).unwrap();
    assert_eq!(
        rows,
        vec![
            text_row(&["Name", "Age"]),
            text_row(&["Al", "30"]),
            text_row(&["Bo", "41"]),
        ]
    );
}

#[test]
fn short_row_ends_the_table() {
    let cells = text_cells(&[
        ("A1", "H"),
        ("A2", "Name"),
        ("B2", "Age"),
        ("A3", "Al"),
        ("B3", "30"),
        ("A4", "stray"),
        ("A5", "late"),
        ("B5", "row"),
    ]);
    let mut options = ScanOptions::new();
    options.heading = Some(windrow_core::Heading::exact("H"));
    options.cells = "2".parse().unwrap();

    let rows = scan_rows(cells, options).unwrap();
    assert_eq!(rows, vec![text_row(&["Name", "Age"]), text_row(&["Al", "30"])]);
}

#[test]
fn heading_pattern_match() {
    let cells = text_cells(&[
        ("A1", "Table 3: Districts"),
        ("A2", "Name"),
        ("B2", "Seats"),
        ("A3", "First"),
        ("B3", "4"),
    ]);
    let mut options = ScanOptions::new();
    options.heading = Some(windrow_core::Heading::pattern(r"^Table \d+").unwrap());
    options.cells = "2".parse().unwrap();

    let rows = scan_rows(cells, options).unwrap();
    assert_eq!(rows, vec![text_row(&["Name", "Seats"]), text_row(&["First", "4"])]);
}

#[test]
fn repeating_header_suppressed() {
    let cells = text_cells(&[
        ("A1", "Name"),
        ("B1", "Age"),
        ("A2", "Al"),
        ("B2", "30"),
        // Page break: the source reprints its header
        ("A3", "Name"),
        ("B3", "Age"),
        ("A4", "Bo"),
        ("B4", "41"),
    ]);
    let mut options = ScanOptions::new();
    options.cells = "2".parse().unwrap();
    options.repeating = true;

    let rows = scan_rows(cells, options).unwrap();
    assert_eq!(
        rows,
        vec![
            text_row(&["Name", "Age"]),
            text_row(&["Al", "30"]),
            text_row(&["Bo", "41"]),
        ]
    );
}

#[test]
fn error_and_blank_cells_shorten_the_row() {
    let cells = vec![
        ("A1".to_string(), Cell::text("a")),
        ("B1".to_string(), Cell::Error("#REF!".into())),
        ("C1".to_string(), Cell::text("c")),
        ("A2".to_string(), Cell::Blank),
        ("B2".to_string(), Cell::text("b")),
    ];
    let rows = scan_rows(cells, ScanOptions::new()).unwrap();
    // Skipped cells leave no placeholder, so lengths contract
    assert_eq!(rows, vec![text_row(&["a", "c"]), text_row(&["b"])]);
}

#[test]
fn typed_cells_coerce_to_scalars() {
    let cells = vec![
        ("A1".to_string(), Cell::number(30.0)),
        (
            "B1".to_string(),
            Cell::Number {
                value: 45000.0,
                formatted: Some("2023-03-15".into()),
                date: true,
            },
        ),
        ("C1".to_string(), Cell::Boolean(true)),
        ("D1".to_string(), Cell::DateText("2024-01-01T00:00:00Z".into())),
        ("E1".to_string(), Cell::text("  spaced  ")),
    ];
    let rows = scan_rows(cells, ScanOptions::new()).unwrap();
    assert_eq!(
        rows,
        vec![vec![
            Datum::Number(30.0),
            Datum::Text("2023-03-15".into()),
            Datum::Bool(true),
            Datum::Text("2024-01-01T00:00:00Z".into()),
            Datum::Text("spaced".into()),
        ]]
    );
}

#[test]
fn empty_map_yields_no_rows() {
    let rows = scan_rows(Vec::new(), ScanOptions::new()).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn sort_cell_map_orders_by_row_then_column() {
    let cells = text_cells(&[
        ("AA1", "third"),
        ("B2", "fourth"),
        ("Z1", "second"),
        ("A1", "first"),
    ]);
    let sorted = sort_cell_map(cells).unwrap();
    let labels: Vec<&str> = sorted.iter().map(|(label, _)| label.as_str()).collect();
    assert_eq!(labels, vec!["A1", "Z1", "AA1", "B2"]);

    let bad = sort_cell_map(vec![("!ref".to_string(), Cell::Blank)]);
    assert!(bad.is_err());
}
