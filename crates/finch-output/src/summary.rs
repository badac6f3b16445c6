//! Average growth statistics per company.
//!
//! Typed view of the aggregate table produced by `finch-growth`, with text
//! and Markdown renderings.

use crate::cells::{MISSING, format_mean, layout};
use crate::report::ReportError;
use finch_data::FinancialMetric;
use finch_data::schema::COMPANY;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean growth of each metric for one company, in percent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanyGrowth {
    /// Company identifier.
    pub company: String,

    /// Mean revenue growth.
    pub revenue: Option<f64>,

    /// Mean net income growth.
    pub net_income: Option<f64>,

    /// Mean total assets growth.
    pub assets: Option<f64>,

    /// Mean total liabilities growth.
    pub liabilities: Option<f64>,

    /// Mean operating cash flow growth.
    pub operating_cash_flow: Option<f64>,
}

impl CompanyGrowth {
    /// Mean growth for a single metric.
    pub const fn get(&self, metric: FinancialMetric) -> Option<f64> {
        match metric {
            FinancialMetric::Revenue => self.revenue,
            FinancialMetric::NetIncome => self.net_income,
            FinancialMetric::Assets => self.assets,
            FinancialMetric::Liabilities => self.liabilities,
            FinancialMetric::OperatingCashFlow => self.operating_cash_flow,
        }
    }

    const fn slot(&mut self, metric: FinancialMetric) -> &mut Option<f64> {
        match metric {
            FinancialMetric::Revenue => &mut self.revenue,
            FinancialMetric::NetIncome => &mut self.net_income,
            FinancialMetric::Assets => &mut self.assets,
            FinancialMetric::Liabilities => &mut self.liabilities,
            FinancialMetric::OperatingCashFlow => &mut self.operating_cash_flow,
        }
    }
}

/// Average growth statistics for every company in a table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GrowthSummary {
    /// One entry per company, in the order of the aggregate table.
    pub companies: Vec<CompanyGrowth>,
}

impl GrowthSummary {
    /// Read the aggregate table (`Company` plus the five growth columns).
    ///
    /// # Errors
    /// Returns an error if a column is missing or has an unexpected type.
    pub fn from_frame(df: &DataFrame) -> Result<Self, ReportError> {
        let companies = df.column(COMPANY)?.cast(&DataType::String)?;
        let mut rows: Vec<CompanyGrowth> = companies
            .as_materialized_series()
            .str()?
            .into_iter()
            .map(|company| CompanyGrowth {
                company: company.unwrap_or(MISSING).to_string(),
                revenue: None,
                net_income: None,
                assets: None,
                liabilities: None,
                operating_cash_flow: None,
            })
            .collect();

        for metric in FinancialMetric::ALL {
            let values = df
                .column(metric.growth_column())?
                .cast(&DataType::Float64)?;
            for (row, value) in rows.iter_mut().zip(values.as_materialized_series().f64()?) {
                *row.slot(metric) = value;
            }
        }

        Ok(Self { companies: rows })
    }

    /// Number of companies.
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    /// Whether the summary has no companies.
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Look up a company by identifier.
    pub fn get(&self, company: &str) -> Option<&CompanyGrowth> {
        self.companies.iter().find(|c| c.company == company)
    }

    /// Format as ASCII table for terminal display.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::from("Average Growth Statistics:\n");

        let mut header = vec![COMPANY.to_string()];
        header.extend(FinancialMetric::growth_columns().map(String::from));

        let rows: Vec<Vec<String>> = self
            .companies
            .iter()
            .map(|c| {
                std::iter::once(c.company.clone())
                    .chain(FinancialMetric::ALL.map(|m| format_mean(c.get(m))))
                    .collect()
            })
            .collect();

        output.push_str(&layout(&header, &rows));
        output
    }

    /// Format as Markdown table for documentation.
    pub fn to_markdown(&self) -> String {
        let mut output = String::from("## Average Growth Statistics\n\n");

        output.push_str(&format!(
            "| {} | {} |\n",
            COMPANY,
            FinancialMetric::growth_columns().join(" | ")
        ));
        output.push_str("|---------|");
        output.push_str(&"---:|".repeat(FinancialMetric::ALL.len()));
        output.push('\n');

        for c in &self.companies {
            let values: Vec<String> = FinancialMetric::ALL
                .iter()
                .map(|m| c.get(*m).map_or_else(|| MISSING.to_string(), |v| format!("{v:.2}%")))
                .collect();
            output.push_str(&format!("| {} | {} |\n", c.company, values.join(" | ")));
        }

        output
    }
}

impl fmt::Display for GrowthSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ascii_table())
    }
}
