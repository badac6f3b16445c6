//! Persisting augmented tables and loading them back.

use finch_data::{FinancialMetric, LoadOptions, load_csv, read_csv};
use finch_growth::{GrowthConfig, compute_growth, summarize_growth};
use finch_output::{ExportFormat, Exporter, GrowthSummary, revenue_trends, write_csv};
use polars::prelude::*;
use tempfile::tempdir;

const RECORDS: &str = "\
Company,Year,Total Revenue,Net Income,Total Assets,Total Liabilities,Cash Flow from Operating Activities
Apple,2021,365817,94680,351002,287912,104038
Apple,2022,394328,99803,352755,302083,122151
Apple,2023,383285,96995,352583,290437,110543
Tesla,2022,81462,12587,82338,36440,14724
Tesla,2023,96773,14974.5,106618,43009,13256
Rivian,2023,4434,-5432,16778,7202,
";

fn augmented() -> DataFrame {
    let df = read_csv(RECORDS.as_bytes(), &LoadOptions::default()).unwrap();
    compute_growth(&df, &GrowthConfig::default()).unwrap()
}

#[test]
fn test_reload_reproduces_original_columns() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("updated_financial_data.csv");
    let original = read_csv(RECORDS.as_bytes(), &LoadOptions::default()).unwrap();

    write_csv(&augmented(), &path).unwrap();
    let reloaded = load_csv(&path).unwrap();

    assert_eq!(reloaded.height(), original.height());
    assert_eq!(reloaded.width(), original.width() + 5);
    for name in original.get_column_names() {
        let before = original.column(name).unwrap();
        let after = reloaded.column(name).unwrap();
        assert_eq!(before.dtype(), after.dtype(), "column {name} changed type");
        assert!(
            before.as_materialized_series().equals_missing(after.as_materialized_series()),
            "column {name} changed"
        );
    }
    for growth in FinancialMetric::growth_columns() {
        assert!(reloaded.column(growth).is_ok());
    }
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    write_csv(&augmented(), &first).unwrap();
    write_csv(&augmented(), &second).unwrap();

    let a = std::fs::read(&first).unwrap();
    let b = std::fs::read(&second).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_missing_cells_written_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");

    write_csv(&augmented(), &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    let rivian = content.lines().find(|l| l.starts_with("Rivian")).unwrap();

    assert_eq!(rivian, "Rivian,2023,4434,-5432.0,16778,7202,,,,,,");
}

#[test]
fn test_summary_and_trends_from_augmented_table() {
    let table = augmented();
    let summary = GrowthSummary::from_frame(&summarize_growth(&table).unwrap()).unwrap();
    let trends = revenue_trends(&table).unwrap();

    assert_eq!(summary.len(), 3);
    let companies: Vec<&str> = summary.companies.iter().map(|c| c.company.as_str()).collect();
    assert_eq!(companies, vec!["Apple", "Rivian", "Tesla"]);

    let trend_companies: Vec<&str> = trends.iter().map(|t| t.company.as_str()).collect();
    assert_eq!(trend_companies, vec!["Apple", "Tesla", "Rivian"]);
    assert_eq!(trends[0].points.len(), 3);

    let csv = summary.export_to_string(ExportFormat::Csv).unwrap();
    assert_eq!(csv.lines().count(), 4);
}

#[test]
fn test_whole_number_floats_reload_as_floats() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let df = read_csv(
        "Company,Total Revenue\nA,100.0\nA,110.0\n".as_bytes(),
        &LoadOptions::default(),
    )
    .unwrap();
    assert_eq!(df.column("Total Revenue").unwrap().dtype(), &DataType::Float64);

    write_csv(&df, &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "Company,Total Revenue\nA,100.0\nA,110.0\n");

    let reloaded = load_csv(&path).unwrap();
    assert_eq!(
        reloaded.column("Total Revenue").unwrap().dtype(),
        &DataType::Float64
    );
}
