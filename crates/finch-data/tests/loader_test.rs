//! Loading financial records from files on disk.

use finch_data::{DataError, REQUIRED_COLUMNS, load_csv, require_columns};
use polars::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE: &str = "\
Company,Year,Total Revenue,Net Income,Total Assets,Total Liabilities,Cash Flow from Operating Activities
Microsoft,2022,198270,72738,364840,198298,89035
Microsoft,2023,211915,72361,411976,205753,87582
Tesla,2022,81462,12587,82338,36440,14724
Tesla,2023,96773,14974,106618,43009,13256
";

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_sample_file() {
    let file = write_temp(SAMPLE);
    let df = load_csv(file.path()).unwrap();

    assert_eq!(df.height(), 4);
    assert_eq!(df.width(), 7);
    require_columns(&df, &REQUIRED_COLUMNS).unwrap();

    let revenue = df.column("Total Revenue").unwrap();
    assert_eq!(revenue.dtype(), &DataType::Int64);
    let values: Vec<Option<i64>> = revenue
        .as_materialized_series()
        .i64()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(
        values,
        vec![Some(198270), Some(211915), Some(81462), Some(96773)]
    );
}

#[test]
fn test_load_reports_missing_required_column() {
    let file = write_temp("Company,Year,Total Revenue\nA,2020,100\n");
    let df = load_csv(file.path()).unwrap();

    let err = require_columns(&df, &REQUIRED_COLUMNS).unwrap_err();
    assert!(matches!(err, DataError::MissingColumn(ref c) if c == "Net Income"));
}

#[test]
fn test_load_ragged_file_fails() {
    let file = write_temp("Company,Year\nA,2020\nA\n");
    let err = load_csv(file.path()).unwrap_err();
    assert!(matches!(err, DataError::Parse { .. }));
}
