//! Full pipeline runs against files on disk.

use approx::assert_relative_eq;
use finch::data::DataError;
use finch::growth::GrowthConfig;
use finch::{Pipeline, PipelineConfig, PipelineError};
use polars::prelude::*;
use rstest::rstest;
use std::path::Path;
use tempfile::{TempDir, tempdir};

const HEADER: &str = "Company,Year,Total Revenue,Net Income,Total Assets,Total Liabilities,Cash Flow from Operating Activities";

fn write_input(dir: &TempDir, rows: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join("financials.csv");
    let mut content = format!("{HEADER}\n");
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    std::fs::write(&path, content).unwrap();
    path
}

fn config(input: &Path, dir: &TempDir) -> PipelineConfig {
    PipelineConfig {
        output: dir.path().join("updated_financial_data.csv"),
        ..PipelineConfig::new(input)
    }
}

fn growth(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .f64()
        .unwrap()
        .into_iter()
        .collect()
}

#[test]
fn test_full_run() {
    let dir = tempdir().unwrap();
    let input = write_input(
        &dir,
        &[
            "A,2020,200,20,1000,500,40",
            "A,2021,180,25,1100,500,44",
            "A,2022,198,20,1210,550,33",
            "B,2022,50,5,60,30,8",
        ],
    );
    let config = config(&input, &dir);
    let outcome = Pipeline::new(config.clone()).run().unwrap();

    let revenue = growth(&outcome.table, "Revenue Growth (%)");
    assert_eq!(revenue[0], None);
    assert_relative_eq!(revenue[1].unwrap(), -10.0, epsilon = 1e-9);
    assert_relative_eq!(revenue[2].unwrap(), 10.0, epsilon = 1e-9);
    assert_eq!(revenue[3], None);

    assert_eq!(outcome.summary.height(), 2);
    assert_eq!(outcome.report.summary.len(), 2);
    assert_eq!(outcome.report.trends.len(), 2);
    assert!(outcome.report.unordered_companies.is_empty());

    let written = std::fs::read_to_string(&config.output).unwrap();
    assert!(written.starts_with(&format!("{HEADER},Revenue Growth (%)")));
    assert_eq!(written.lines().count(), 5);

    let text = outcome.report.to_text();
    assert!(text.contains("Average Growth Statistics:"));
    assert!(text.contains("A Revenue Trend:"));
    assert!(text.contains("B Revenue Trend:"));
}

#[test]
fn test_rerun_writes_identical_bytes() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, &["A,2020,100,1,1,1,1", "A,2021,110,3,2,1,0", "A,2022,121,2,4,1,5"]);
    let config = config(&input, &dir);

    Pipeline::new(config.clone()).run().unwrap();
    let first = std::fs::read(&config.output).unwrap();
    Pipeline::new(config.clone()).run().unwrap();
    let second = std::fs::read(&config.output).unwrap();

    assert_eq!(first, second);
}

#[rstest]
#[case(false, vec![None, Some(-100.0 * 21.0 / 121.0), Some(10.0)])]
#[case(true, vec![None, Some(10.0), Some(10.0)])]
fn test_out_of_order_years(#[case] sort_by_year: bool, #[case] expected: Vec<Option<f64>>) {
    let dir = tempdir().unwrap();
    let input = write_input(
        &dir,
        &["A,2022,121,1,1,1,1", "A,2020,100,1,1,1,1", "A,2021,110,1,1,1,1"],
    );
    let config = PipelineConfig {
        growth: GrowthConfig {
            sort_by_year,
            ..Default::default()
        },
        ..config(&input, &dir)
    };

    let outcome = Pipeline::new(config).run().unwrap();
    let revenue = growth(&outcome.table, "Revenue Growth (%)");
    for (actual, expected) in revenue.iter().zip(&expected) {
        match (actual, expected) {
            (Some(a), Some(e)) => assert_relative_eq!(*a, *e, epsilon = 1e-9),
            (a, e) => assert_eq!(a, e),
        }
    }

    let unordered = &outcome.report.unordered_companies;
    assert_eq!(unordered.is_empty(), sort_by_year);
}

#[test]
fn test_missing_column_fails_before_writing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("financials.csv");
    std::fs::write(&path, "Company,Year,Total Revenue\nA,2020,100\n").unwrap();
    let config = config(&path, &dir);

    let err = Pipeline::new(config.clone()).run().unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Data(DataError::MissingColumn(ref c)) if c == "Net Income"
    ));
    assert!(!config.output.exists());
}

#[test]
fn test_malformed_input_is_parse_error() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, &["A,2020,100,1,1,1", "A,2021,110,1,1,1,1"]);

    let err = Pipeline::new(config(&input, &dir)).run().unwrap_err();
    assert!(matches!(err, PipelineError::Data(DataError::Parse { .. })));
}

#[test]
fn test_unwritable_output() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, &["A,2020,100,1,1,1,1"]);
    let config = PipelineConfig {
        output: dir.path().join("no-such-dir").join("out.csv"),
        ..PipelineConfig::new(&input)
    };

    let err = Pipeline::new(config).run().unwrap_err();
    assert!(matches!(err, PipelineError::Export(_)));
}
