//! Console report for a finch run.

use crate::preview::Preview;
use crate::summary::GrowthSummary;
use crate::trend::RevenueTrend;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Polars error while reading a table.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// A required part of the report was not provided.
    #[error("Incomplete report: missing {0}")]
    Incomplete(&'static str),
}

/// How a report is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    /// Fixed-width text tables.
    #[default]
    Text,

    /// Markdown document.
    Markdown,

    /// Pretty-printed JSON.
    Json,
}

/// Everything a run prints after it has finished.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Input file.
    pub input: PathBuf,

    /// Augmented CSV that was written.
    pub output: PathBuf,

    /// Report generation timestamp.
    pub timestamp: DateTime<Utc>,

    /// Head of the loaded table.
    pub preview: Preview,

    /// Average growth per company.
    pub summary: GrowthSummary,

    /// Revenue listing per company.
    pub trends: Vec<RevenueTrend>,

    /// Companies whose rows were not in year order.
    pub unordered_companies: Vec<String>,
}

impl Report {
    /// Line printed once the output file has been written.
    pub fn completion_message(&self) -> String {
        format!(
            "Analysis Complete. The data has been processed, and results saved to '{}'.",
            self.output.display()
        )
    }

    /// Render in the requested format.
    ///
    /// # Errors
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, format: ReportFormat) -> Result<String, ReportError> {
        match format {
            ReportFormat::Text => Ok(self.to_text()),
            ReportFormat::Markdown => Ok(self.to_markdown()),
            ReportFormat::Json => self.to_json(),
        }
    }

    /// Text rendering: preview, summary, trends, completion line.
    pub fn to_text(&self) -> String {
        let mut output = self.preview.to_ascii_table();
        output.push('\n');
        output.push_str(&self.summary.to_ascii_table());
        for trend in &self.trends {
            output.push('\n');
            output.push_str(&trend.to_ascii_table());
        }
        output.push('\n');
        output.push_str(&self.completion_message());
        output.push('\n');
        output
    }

    /// Markdown rendering.
    pub fn to_markdown(&self) -> String {
        let mut output = format!("# Growth Analysis: {}\n\n", self.input.display());
        output.push_str(&format!(
            "**Generated:** {}\n\n",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output.push_str("## Preview\n\n");
        output.push_str(&self.preview.to_markdown());
        output.push('\n');

        output.push_str(&self.summary.to_markdown());
        output.push('\n');

        output.push_str("## Revenue Trends\n\n");
        for trend in &self.trends {
            output.push_str(&trend.to_markdown());
            output.push('\n');
        }

        if !self.unordered_companies.is_empty() {
            output.push_str(&format!(
                "**Not in year order:** {}\n\n",
                self.unordered_companies.join(", ")
            ));
        }

        output.push_str(&format!("{}\n", self.completion_message()));
        output
    }

    /// Convert report to JSON string.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builder for creating reports.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    preview: Option<Preview>,
    summary: Option<GrowthSummary>,
    trends: Vec<RevenueTrend>,
    unordered_companies: Vec<String>,
}

impl ReportBuilder {
    /// Create a new report builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input path.
    pub fn input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Set the output path.
    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Set the table preview.
    pub fn preview(mut self, preview: Preview) -> Self {
        self.preview = Some(preview);
        self
    }

    /// Set the growth summary.
    pub fn summary(mut self, summary: GrowthSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Set the revenue trends.
    pub fn trends(mut self, trends: Vec<RevenueTrend>) -> Self {
        self.trends = trends;
        self
    }

    /// Set the companies found out of year order.
    pub fn unordered_companies(mut self, companies: Vec<String>) -> Self {
        self.unordered_companies = companies;
        self
    }

    /// Build the report.
    ///
    /// # Errors
    /// Returns [`ReportError::Incomplete`] if the output path, preview or
    /// summary was not set.
    pub fn build(self) -> Result<Report, ReportError> {
        Ok(Report {
            input: self.input.unwrap_or_default(),
            output: self.output.ok_or(ReportError::Incomplete("output"))?,
            timestamp: Utc::now(),
            preview: self.preview.ok_or(ReportError::Incomplete("preview"))?,
            summary: self.summary.ok_or(ReportError::Incomplete("summary"))?,
            trends: self.trends,
            unordered_companies: self.unordered_companies,
        })
    }
}
