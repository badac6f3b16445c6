//! Per-company revenue listings.

use crate::cells::{MISSING, format_float, layout};
use crate::report::ReportError;
use finch_data::schema::{COMPANY, TOTAL_REVENUE, YEAR};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One (year, revenue) observation, keyed by its row in the full table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    /// Zero-based row of the observation in the table.
    pub row: usize,

    /// Fiscal year.
    pub year: Option<i64>,

    /// Total revenue.
    pub revenue: Option<f64>,
}

/// The revenue subsequence of a single company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenueTrend {
    /// Company identifier.
    pub company: String,

    /// Observations in table order.
    pub points: Vec<TrendPoint>,
}

impl RevenueTrend {
    /// Create an empty trend for a company.
    pub const fn new(company: String) -> Self {
        Self {
            company,
            points: Vec::new(),
        }
    }

    /// Format as ASCII table for terminal display.
    pub fn to_ascii_table(&self) -> String {
        let mut output = format!("{} Revenue Trend:\n", self.company);

        let header = vec![String::new(), YEAR.to_string(), TOTAL_REVENUE.to_string()];
        let rows: Vec<Vec<String>> = self
            .points
            .iter()
            .map(|p| {
                vec![
                    p.row.to_string(),
                    p.year.map_or_else(|| MISSING.to_string(), |y| y.to_string()),
                    p.revenue.map_or_else(|| MISSING.to_string(), format_float),
                ]
            })
            .collect();

        output.push_str(&layout(&header, &rows));
        output
    }

    /// Format as Markdown section.
    pub fn to_markdown(&self) -> String {
        let mut output = format!("### {} Revenue Trend\n\n", self.company);
        output.push_str("| Year | Total Revenue |\n");
        output.push_str("|-----:|--------------:|\n");
        for p in &self.points {
            output.push_str(&format!(
                "| {} | {} |\n",
                p.year.map_or_else(|| MISSING.to_string(), |y| y.to_string()),
                p.revenue.map_or_else(|| MISSING.to_string(), format_float),
            ));
        }
        output
    }
}

impl fmt::Display for RevenueTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ascii_table())
    }
}

/// Revenue trend of every distinct company, in first-seen order.
///
/// Rows with a missing company are skipped.
///
/// # Errors
/// Returns an error if `Company`, `Year` or `Total Revenue` is missing.
pub fn revenue_trends(df: &DataFrame) -> Result<Vec<RevenueTrend>, ReportError> {
    let companies = df.column(COMPANY)?.cast(&DataType::String)?;
    let years = df.column(YEAR)?.cast(&DataType::Int64)?;
    let revenue = df.column(TOTAL_REVENUE)?.cast(&DataType::Float64)?;

    let mut trends: Vec<RevenueTrend> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    let rows = companies
        .as_materialized_series()
        .str()?
        .into_iter()
        .zip(years.as_materialized_series().i64()?)
        .zip(revenue.as_materialized_series().f64()?)
        .enumerate();

    for (row, ((company, year), revenue)) in rows {
        let Some(company) = company else {
            continue;
        };
        let slot = *slots.entry(company).or_insert_with(|| {
            trends.push(RevenueTrend::new(company.to_string()));
            trends.len() - 1
        });
        trends[slot].points.push(TrendPoint { row, year, revenue });
    }

    Ok(trends)
}
