//! CSV and JSON export.
//!
//! [`write_csv`] persists the augmented records table. The [`Exporter`]
//! trait covers the smaller derived artefacts such as the growth summary.

use crate::cells::render_column;
use crate::summary::GrowthSummary;
use finch_data::FinancialMetric;
use finch_data::schema::COMPANY;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Destination could not be created or written.
    #[error("Cannot write {}: {source}", .path.display())]
    FileAccess {
        /// Destination path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// IO error while flushing serialized output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Polars error while reading the table.
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    /// Serialized CSV was not valid UTF-8.
    #[error("Invalid UTF-8 in output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        write_file(path, &content)
    }
}

/// Flattened summary row for CSV export.
#[derive(Debug, Serialize)]
struct SummaryRecord<'a> {
    #[serde(rename = "Company")]
    company: &'a str,
    #[serde(rename = "Revenue Growth (%)")]
    revenue: Option<f64>,
    #[serde(rename = "Net Income Growth (%)")]
    net_income: Option<f64>,
    #[serde(rename = "Assets Growth (%)")]
    assets: Option<f64>,
    #[serde(rename = "Liabilities Growth (%)")]
    liabilities: Option<f64>,
    #[serde(rename = "Cash Flow Growth (%)")]
    operating_cash_flow: Option<f64>,
}

impl Exporter for GrowthSummary {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                if self.is_empty() {
                    let mut header = vec![COMPANY];
                    header.extend(FinancialMetric::growth_columns());
                    wtr.write_record(header)?;
                }
                for c in &self.companies {
                    wtr.serialize(SummaryRecord {
                        company: &c.company,
                        revenue: c.revenue,
                        net_income: c.net_income,
                        assets: c.assets,
                        liabilities: c.liabilities,
                        operating_cash_flow: c.operating_cash_flow,
                    })?;
                }
                Ok(String::from_utf8(
                    wtr.into_inner().map_err(|e| e.into_error())?,
                )?)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// Serialize a table as CSV text.
///
/// The header row carries the column names; there is no index column. Null
/// cells are empty. The output depends only on the table contents.
///
/// # Errors
/// Returns an error if a column cannot be rendered or serialization fails.
pub fn frame_to_csv_string(df: &DataFrame) -> Result<String, ExportError> {
    let columns = df
        .get_columns()
        .iter()
        .map(render_column)
        .collect::<PolarsResult<Vec<_>>>()?;

    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(df.get_column_names().iter().map(|name| name.as_str()))?;
    for row in 0..df.height() {
        wtr.write_record(columns.iter().map(|c| c[row].as_deref().unwrap_or("")))?;
    }

    Ok(String::from_utf8(
        wtr.into_inner().map_err(|e| e.into_error())?,
    )?)
}

/// Write a table to a CSV file, replacing any existing file.
///
/// # Errors
/// Returns [`ExportError::FileAccess`] if the destination is not writable.
pub fn write_csv(df: &DataFrame, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let content = frame_to_csv_string(df)?;
    write_file(path.as_ref(), &content)
}

fn write_file(path: &Path, content: &str) -> Result<(), ExportError> {
    std::fs::write(path, content).map_err(|source| ExportError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}
