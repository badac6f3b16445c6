//! CSV loading into polars DataFrames.
//!
//! Records are read with strict record lengths: every row must carry exactly
//! as many fields as the header. Column types are inferred per column from
//! the cells that are not missing-value tokens.

use crate::error::{DataError, Result};
use crate::schema::COMPANY;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Cell contents that load as null.
pub const DEFAULT_MISSING_VALUES: [&str; 13] = [
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "#N/A", "<NA>",
];

/// Options controlling how a CSV file becomes a DataFrame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Columns always loaded as strings, whatever their contents look like
    pub text_columns: Vec<String>,
    /// Cell contents treated as missing values
    pub missing_values: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            text_columns: vec![COMPANY.to_string()],
            missing_values: DEFAULT_MISSING_VALUES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl LoadOptions {
    fn is_missing(&self, cell: &str) -> bool {
        let cell = cell.trim();
        self.missing_values.iter().any(|m| m == cell)
    }

    fn is_text_column(&self, name: &str) -> bool {
        self.text_columns.iter().any(|c| c == name)
    }
}

/// Inferred storage type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Int,
    Float,
    Text,
}

/// Load a CSV file with default options.
///
/// # Errors
///
/// Returns [`DataError::FileAccess`] if the file cannot be opened or read,
/// and [`DataError::Parse`] if a record is malformed.
pub fn load_csv(path: impl AsRef<Path>) -> Result<DataFrame> {
    load_csv_with_options(path, &LoadOptions::default())
}

/// Load a CSV file.
///
/// # Errors
///
/// Returns [`DataError::FileAccess`] if the file cannot be opened or read,
/// and [`DataError::Parse`] if a record is malformed.
pub fn load_csv_with_options(path: impl AsRef<Path>, options: &LoadOptions) -> Result<DataFrame> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DataError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let df = read_records(file, path, options)?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded csv"
    );
    Ok(df)
}

/// Read CSV content from any reader.
///
/// # Errors
///
/// Same as [`load_csv_with_options`]; IO failures are reported against the
/// placeholder path `<reader>`.
pub fn read_csv<R: Read>(reader: R, options: &LoadOptions) -> Result<DataFrame> {
    read_records(reader, Path::new("<reader>"), options)
}

fn read_records<R: Read>(input: R, path: &Path, options: &LoadOptions) -> Result<DataFrame> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(e, path))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut seen = HashSet::new();
    for name in &headers {
        if !seen.insert(name.as_str()) {
            return Err(DataError::Parse {
                line: Some(1),
                message: format!("duplicate column name '{name}'"),
            });
        }
    }

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(e, path))?;
        for (column, value) in cells.iter_mut().zip(record.iter()) {
            column.push(value.to_string());
        }
    }

    let columns = headers
        .iter()
        .zip(cells)
        .map(|(name, values)| {
            let kind = if options.is_text_column(name) {
                ColumnKind::Text
            } else {
                infer_kind(&values, options)
            };
            build_column(name, &values, kind, options)
        })
        .collect::<Vec<_>>();

    Ok(DataFrame::new(columns)?)
}

fn infer_kind(values: &[String], options: &LoadOptions) -> ColumnKind {
    let present: Vec<&str> = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !options.is_missing(v))
        .collect();

    if !present.is_empty() && present.iter().all(|v| v.parse::<i64>().is_ok()) {
        ColumnKind::Int
    } else if present.iter().all(|v| v.parse::<f64>().is_ok()) {
        // An all-missing column also lands here.
        ColumnKind::Float
    } else {
        ColumnKind::Text
    }
}

fn build_column(name: &str, values: &[String], kind: ColumnKind, options: &LoadOptions) -> Column {
    let present = |v: &String| (!options.is_missing(v)).then(|| v.trim().to_string());

    match kind {
        ColumnKind::Int => {
            let parsed: Vec<Option<i64>> = values
                .iter()
                .map(|v| present(v).and_then(|s| s.parse().ok()))
                .collect();
            Series::new(name.into(), parsed).into()
        }
        ColumnKind::Float => {
            let parsed: Vec<Option<f64>> = values
                .iter()
                .map(|v| present(v).and_then(|s| s.parse().ok()))
                .collect();
            Series::new(name.into(), parsed).into()
        }
        ColumnKind::Text => {
            // Text keeps cells untrimmed so they round-trip exactly.
            let raw: Vec<Option<&str>> = values
                .iter()
                .map(|v| (!options.is_missing(v)).then_some(v.as_str()))
                .collect();
            Series::new(name.into(), raw).into()
        }
    }
}

fn csv_error(err: csv::Error, path: &Path) -> DataError {
    match err.into_kind() {
        csv::ErrorKind::Io(source) => DataError::FileAccess {
            path: path.to_path_buf(),
            source,
        },
        csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => DataError::Parse {
            line: pos.map(|p| p.line()),
            message: format!("expected {expected_len} fields, found {len}"),
        },
        csv::ErrorKind::Utf8 { pos, err } => DataError::Parse {
            line: pos.map(|p| p.line()),
            message: err.to_string(),
        },
        other => DataError::parse(format!("{other:?}")),
    }
}

/// Check that every named column is present.
///
/// # Errors
///
/// Returns [`DataError::MissingColumn`] naming the first absent column.
pub fn require_columns(df: &DataFrame, columns: &[&str]) -> Result<()> {
    match columns
        .iter()
        .find(|name| df.get_column_index(name).is_none())
    {
        Some(missing) => Err(DataError::MissingColumn((*missing).to_string())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn read(content: &str) -> Result<DataFrame> {
        read_csv(content.as_bytes(), &LoadOptions::default())
    }

    #[test]
    fn test_columns_match_header() {
        let df = read("Company,Year,Total Revenue\nA,2020,100\nA,2021,110\n").unwrap();
        let names: Vec<&str> = df.get_column_names().iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["Company", "Year", "Total Revenue"]);
        assert_eq!(df.height(), 2);
    }

    #[rstest]
    #[case(&["1", "2", "3"], DataType::Int64)]
    #[case(&["1", "2.5", "3"], DataType::Float64)]
    #[case(&["1", "", "3"], DataType::Int64)]
    #[case(&["1", "NaN", "3"], DataType::Int64)]
    #[case(&["NA", "", "NA"], DataType::Float64)]
    #[case(&["x", "2", "3"], DataType::String)]
    fn test_type_inference(#[case] values: &[&str], #[case] expected: DataType) {
        let mut content = String::from("row,value\n");
        for (i, v) in values.iter().enumerate() {
            content.push_str(&format!("{i},{v}\n"));
        }
        let df = read(&content).unwrap();
        assert_eq!(df.column("value").unwrap().dtype(), &expected);
    }

    #[test]
    fn test_company_is_always_text() {
        let df = read("Company,Year\n1,2020\n2,2020\n").unwrap();
        assert_eq!(df.column("Company").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn test_missing_cells_are_null() {
        let df = read("Company,Net Income\nA,10\nA,\nA,N/A\n").unwrap();
        assert_eq!(df.column("Net Income").unwrap().null_count(), 2);
    }

    #[test]
    fn test_unequal_lengths_is_parse_error() {
        let err = read("Company,Year\nA,2020\nB,2021,extra\n").unwrap_err();
        match err {
            DataError::Parse { line, .. } => assert_eq!(line, Some(3)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_header_is_parse_error() {
        let err = read("Year,Year\n2020,2021\n").unwrap_err();
        assert!(matches!(err, DataError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_file_access_error() {
        let err = load_csv("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, DataError::FileAccess { .. }));
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }

    #[test]
    fn test_require_columns() {
        let df = read("Company,Year\nA,2020\n").unwrap();
        assert!(require_columns(&df, &["Company", "Year"]).is_ok());
        match require_columns(&df, &["Company", "Total Revenue"]) {
            Err(DataError::MissingColumn(name)) => assert_eq!(name, "Total Revenue"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_header_only() {
        let df = read("Company,Year\n").unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 2);
    }
}
