//! Sequential growth analysis pipeline.
//!
//! Load, derive growth columns, aggregate, write. Every stage consumes the
//! previous stage's output and the first failure ends the run; the output
//! file is only written once everything before it has succeeded.

use finch_data::{DataError, LoadOptions, REQUIRED_COLUMNS, load_csv_with_options, require_columns};
use finch_growth::{
    GrowthConfig, GrowthError, compute_growth, find_unordered_companies, summarize_growth,
};
use finch_output::{
    DEFAULT_PREVIEW_ROWS, ExportError, GrowthSummary, Preview, Report, ReportBuilder,
    ReportError, revenue_trends, write_csv,
};
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

/// Default name of the augmented CSV.
pub const DEFAULT_OUTPUT: &str = "updated_financial_data.csv";

/// Error type for pipeline runs.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Loading or validating the input failed.
    #[error(transparent)]
    Data(#[from] DataError),
    /// Deriving or aggregating growth failed.
    #[error(transparent)]
    Growth(#[from] GrowthError),
    /// Building the report failed.
    #[error(transparent)]
    Report(#[from] ReportError),
    /// Writing the output failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Configuration for a pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Input CSV.
    pub input: PathBuf,
    /// Destination of the augmented CSV.
    pub output: PathBuf,
    /// CSV loading options.
    pub load: LoadOptions,
    /// Growth computation options.
    pub growth: GrowthConfig,
    /// Rows shown in the preview of the loaded table.
    pub preview_rows: usize,
}

impl PipelineConfig {
    /// Defaults for everything but the input path.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            load: LoadOptions::default(),
            growth: GrowthConfig::default(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

/// Result of a successful run.
#[derive(Debug)]
pub struct PipelineOutcome {
    /// Input table with the five growth columns appended.
    pub table: DataFrame,
    /// Per-company means of the growth columns.
    pub summary: DataFrame,
    /// Printable report.
    pub report: Report,
}

/// Runs the growth analysis for one input file.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline.
    pub const fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// The run configuration.
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every stage and write the augmented CSV.
    ///
    /// # Errors
    /// Fails on the first stage that fails: an unreadable or malformed
    /// input, a missing required column, an invalid growth configuration or
    /// an unwritable destination.
    pub fn run(&self) -> Result<PipelineOutcome, PipelineError> {
        let config = &self.config;

        let records = load_csv_with_options(&config.input, &config.load)?;
        require_columns(&records, &REQUIRED_COLUMNS)?;
        info!(
            path = %config.input.display(),
            rows = records.height(),
            columns = records.width(),
            "loaded records"
        );

        let preview = Preview::from_frame(&records, config.preview_rows)?;

        let unordered = if config.growth.sort_by_year {
            Vec::new()
        } else {
            find_unordered_companies(&records)?
        };
        for company in &unordered {
            warn!(
                company = %company,
                "rows are not in year order; growth is computed against the preceding row"
            );
        }

        let table = compute_growth(&records, &config.growth)?;
        let summary = summarize_growth(&table)?;
        info!(companies = summary.height(), "computed growth");

        let report_summary = GrowthSummary::from_frame(&summary)?;
        let trends = revenue_trends(&table)?;

        write_csv(&table, &config.output)?;
        info!(path = %config.output.display(), "wrote augmented table");

        let report = ReportBuilder::new()
            .input(&config.input)
            .output(&config.output)
            .preview(preview)
            .summary(report_summary)
            .trends(trends)
            .unordered_companies(unordered)
            .build()?;

        Ok(PipelineOutcome {
            table,
            summary,
            report,
        })
    }
}
