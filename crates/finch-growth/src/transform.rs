//! Period-over-period growth columns.
//!
//! For each [`FinancialMetric`] the table gets a derived column holding the
//! percentage change against the row `periods` positions earlier in the same
//! company group:
//!
//! growth_t = (x_t - x_{t-n}) / x_{t-n} * 100
//!
//! Groups keep their input order. Rows without a predecessor, rows where
//! either value is missing, and rows without a company get a null growth
//! value. A zero predecessor gives ±inf, or null when both values are zero.

use crate::config::GrowthConfig;
use crate::error::{GrowthError, ensure_columns};
use finch_data::FinancialMetric;
use finch_data::schema::{COMPANY, YEAR};
use polars::prelude::*;
use tracing::debug;

/// Append the five growth columns to a table of financial records.
///
/// # Errors
/// Returns [`GrowthError::MissingColumn`] if `Company` or a metric source
/// column is absent (`Year` too when sorting), and
/// [`GrowthError::InvalidPeriods`] for a zero lag.
pub fn compute_growth(df: &DataFrame, config: &GrowthConfig) -> Result<DataFrame, GrowthError> {
    config.validate()?;

    let mut required = vec![COMPANY];
    if config.sort_by_year {
        required.push(YEAR);
    }
    required.extend(FinancialMetric::ALL.iter().map(|m| m.source_column()));
    ensure_columns(df, &required)?;

    let mut lf = df.clone().lazy();
    if config.sort_by_year {
        lf = lf.sort(
            [COMPANY, YEAR],
            SortMultipleOptions::default().with_maintain_order(true),
        );
    }

    let periods = config.periods as i64;
    let result = lf
        .with_columns(
            FinancialMetric::ALL
                .iter()
                .map(|m| growth_expr(m.source_column(), periods).alias(m.growth_column()))
                .collect::<Vec<_>>(),
        )
        .collect()?;

    debug!(
        rows = result.height(),
        periods = config.periods,
        sorted = config.sort_by_year,
        "computed growth columns"
    );
    Ok(result)
}

/// Percentage change of `source` against its lagged value within each company.
pub fn growth_expr(source: &str, periods: i64) -> Expr {
    let current = col(source).cast(DataType::Float64);
    let previous = current.clone().shift(lit(periods)).over([col(COMPANY)]);
    // 0/0 is NaN; fold it into null like any other undefined change.
    let change = ((current - previous.clone()) / previous * lit(100.0)).fill_nan(lit(NULL));

    when(col(COMPANY).is_not_null())
        .then(change)
        .otherwise(lit(NULL))
}
