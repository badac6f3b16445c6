//! Chronological ordering checks.
//!
//! Growth is computed against the preceding row in input order, so a company
//! whose rows are not sorted by year gets growth against an arbitrary prior
//! row. These helpers find such companies so callers can warn or sort.

use crate::error::{GrowthError, ensure_columns};
use finch_data::schema::{COMPANY, YEAR};
use polars::prelude::*;
use std::collections::{HashMap, HashSet};

/// Companies whose `Year` values decrease somewhere in input order.
///
/// Returned in first-seen order. Rows with a missing company or year are
/// ignored.
///
/// # Errors
/// Returns [`GrowthError::MissingColumn`] if `Company` or `Year` is absent.
pub fn find_unordered_companies(df: &DataFrame) -> Result<Vec<String>, GrowthError> {
    ensure_columns(df, &[COMPANY, YEAR])?;

    let companies = df.column(COMPANY)?.cast(&DataType::String)?;
    let years = df.column(YEAR)?.cast(&DataType::Float64)?;
    let companies = companies.as_materialized_series().str()?;
    let years = years.as_materialized_series().f64()?;

    let mut last_year: HashMap<&str, f64> = HashMap::new();
    let mut flagged = HashSet::new();
    let mut unordered = Vec::new();

    for (company, year) in companies.into_iter().zip(years) {
        let (Some(company), Some(year)) = (company, year) else {
            continue;
        };
        if let Some(previous) = last_year.insert(company, year)
            && year < previous
            && flagged.insert(company)
        {
            unordered.push(company.to_string());
        }
    }

    Ok(unordered)
}
