//! Tests for reference dataset parsing and the fallback path.

use std::path::Path;

use tetrad_core::models::scale::Scale;
use tetrad_core::models::statistics::StatisticsOrigin;
use tetrad_norms::{load_or_fallback, NormError, NormTable};
use tetrad_scoring::source::StatisticsSource;

/// Build one dataset row: seven metadata columns, then the 23 item values
/// in dataset column order.
fn row(values: &[u32]) -> String {
    assert_eq!(values.len(), 23);
    let mut fields = vec![
        "41".to_owned(),
        "2024-11-02T09:14:00Z".to_owned(),
        "kr".to_owned(),
        "web".to_owned(),
        "2".to_owned(),
        "34".to_owned(),
        "done".to_owned(),
    ];
    fields.extend(values.iter().map(u32::to_string));
    fields.join(",")
}

fn header() -> String {
    let mut fields = vec![
        "id", "submitted_at", "locale", "channel", "gender", "age", "status",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect::<Vec<_>>();
    fields.extend(tetrad_inventory::dataset_columns().iter().map(|id| (*id).to_owned()));
    fields.join(",")
}

fn csv(rows: &[String]) -> String {
    let mut text = header();
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text
}

#[test]
fn parses_rows_and_derives_population_statistics() {
    let text = csv(&[row(&[3; 23]), row(&[5; 23])]);
    let table = NormTable::from_csv(&text).unwrap();

    assert_eq!(table.rows(), 2);
    assert_eq!(table.origin(), StatisticsOrigin::Reference);
    assert_eq!(table.scale_samples(Scale::Mach), Some(&[18, 30][..]));
    assert_eq!(table.scale_samples(Scale::Sadi), Some(&[15, 25][..]));

    let mach = table.statistics().get(Scale::Mach);
    assert_eq!(mach.mean, 24.0);
    assert_eq!(mach.sd, 6.0);
    assert_eq!(mach.min, 18);
    assert_eq!(mach.max, 30);
    assert_eq!(mach.n, 2);

    let sadi = table.statistics().get(Scale::Sadi);
    assert_eq!(sadi.mean, 20.0);
    assert_eq!(sadi.sd, 5.0);
    assert_eq!(sadi.min, 15);
    assert_eq!(sadi.max, 25);
}

#[test]
fn item_columns_map_to_scales_in_dataset_order() {
    // First six item columns (the mach block) at 5, everything else at 1.
    let mut values = [1u32; 23];
    values[..6].copy_from_slice(&[5; 6]);
    let table = NormTable::from_csv(&csv(&[row(&values)])).unwrap();

    assert_eq!(table.scale_samples(Scale::Mach), Some(&[30][..]));
    assert_eq!(table.scale_samples(Scale::Narc), Some(&[6][..]));
    assert_eq!(table.scale_samples(Scale::Psyc), Some(&[6][..]));
    assert_eq!(table.scale_samples(Scale::Sadi), Some(&[5][..]));
}

#[test]
fn short_and_non_numeric_rows_are_skipped() {
    let mut fields: Vec<String> = row(&[2; 23]).split(',').map(str::to_owned).collect();
    fields[7] = "x".to_owned(); // first item column
    let bad_cell = fields.join(",");
    let text = csv(&[
        row(&[3; 23]),
        "too,short,row".to_owned(),
        bad_cell,
        row(&[4; 23]),
    ]);

    let table = NormTable::from_csv(&text).unwrap();
    assert_eq!(table.rows(), 2);
    assert_eq!(table.scale_samples(Scale::Mach), Some(&[18, 24][..]));
}

#[test]
fn rows_with_overflowing_cells_are_skipped() {
    // Each cell parses as u32, but the mach block sums past u32::MAX.
    let mut values = [3u32; 23];
    values[0] = 3_000_000_000;
    values[1] = 3_000_000_000;

    let table = NormTable::from_csv(&csv(&[row(&[2; 23]), row(&values)])).unwrap();
    assert_eq!(table.rows(), 1);
    assert_eq!(table.scale_samples(Scale::Mach), Some(&[12][..]));

    let alone = csv(&[row(&values)]);
    assert!(matches!(NormTable::from_csv(&alone), Err(NormError::Empty)));
}

#[test]
fn blank_lines_are_ignored() {
    let text = format!("{}\n\n{}\n\n", header(), row(&[2; 23]));
    let table = NormTable::from_csv(&text).unwrap();
    assert_eq!(table.rows(), 1);
}

#[test]
fn extra_trailing_columns_are_tolerated() {
    let text = csv(&[format!("{},note,99", row(&[3; 23]))]);
    let table = NormTable::from_csv(&text).unwrap();
    assert_eq!(table.rows(), 1);
    assert_eq!(table.scale_samples(Scale::Mach), Some(&[18][..]));
}

#[test]
fn a_file_with_no_usable_rows_is_empty() {
    let header_only = header();
    assert!(matches!(
        NormTable::from_csv(&header_only),
        Err(NormError::Empty)
    ));

    let garbage = csv(&["not,a,data,row".to_owned()]);
    assert!(matches!(NormTable::from_csv(&garbage), Err(NormError::Empty)));
}

#[test]
fn an_empty_file_is_malformed_at_line_one() {
    match NormTable::from_csv("") {
        Err(NormError::Malformed { line, .. }) => assert_eq!(line, 1),
        Err(other) => panic!("expected Malformed, got {other:?}"),
        Ok(_) => panic!("expected Malformed, got a table"),
    }
}

#[test]
fn from_path_reads_a_dataset_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reference.csv");
    std::fs::write(&path, csv(&[row(&[3; 23]), row(&[1; 23])])).unwrap();

    let table = NormTable::from_path(&path).unwrap();
    assert_eq!(table.rows(), 2);
    assert_eq!(table.scale_samples(Scale::Narc), Some(&[18, 6][..]));
}

#[test]
fn missing_file_degrades_to_fallback_constants() {
    let source = load_or_fallback(Path::new("/definitely/not/here.csv"));

    assert_eq!(source.origin(), StatisticsOrigin::Fallback);
    assert!(source.scale_samples(Scale::Mach).is_none());

    let mach = source.statistics().get(Scale::Mach);
    assert_eq!((mach.mean, mach.sd, mach.min, mach.max, mach.n), (15.0, 4.5, 6, 30, 0));
    let narc = source.statistics().get(Scale::Narc);
    assert_eq!((narc.mean, narc.sd), (15.0, 4.5));
    let psyc = source.statistics().get(Scale::Psyc);
    assert_eq!((psyc.mean, psyc.sd, psyc.min, psyc.max), (12.0, 4.0, 6, 30));
    let sadi = source.statistics().get(Scale::Sadi);
    assert_eq!((sadi.mean, sadi.sd, sadi.min, sadi.max), (10.0, 3.5, 5, 25));
}

#[test]
fn unusable_file_degrades_to_fallback_constants() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reference.csv");
    std::fs::write(&path, header()).unwrap();

    let source = load_or_fallback(&path);
    assert_eq!(source.origin(), StatisticsOrigin::Fallback);
}
