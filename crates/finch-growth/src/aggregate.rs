//! Per-company averages of the growth columns.

use crate::error::{GrowthError, ensure_columns};
use finch_data::FinancialMetric;
use finch_data::schema::COMPANY;
use polars::prelude::*;
use tracing::debug;

/// Mean of each growth column per company, ignoring nulls.
///
/// The result has one row per distinct company, sorted by company, with the
/// `Company` column followed by the five growth columns. A company with no
/// defined growth values has null means. Rows with a missing company are
/// left out.
///
/// # Errors
/// Returns [`GrowthError::MissingColumn`] if the table has not been through
/// [`compute_growth`](crate::compute_growth).
pub fn summarize_growth(df: &DataFrame) -> Result<DataFrame, GrowthError> {
    let mut required = vec![COMPANY];
    required.extend(FinancialMetric::growth_columns());
    ensure_columns(df, &required)?;

    let summary = df
        .clone()
        .lazy()
        .filter(col(COMPANY).is_not_null())
        .group_by_stable([col(COMPANY)])
        .agg(
            FinancialMetric::ALL
                .iter()
                .map(|m| col(m.growth_column()).cast(DataType::Float64).mean())
                .collect::<Vec<_>>(),
        )
        .sort([COMPANY], SortMultipleOptions::default())
        .collect()?;

    debug!(companies = summary.height(), "summarized growth");
    Ok(summary)
}
