//! Error types for growth computation.

use thiserror::Error;

/// Errors that can occur while deriving or aggregating growth columns.
#[derive(Debug, Error)]
pub enum GrowthError {
    /// A referenced column is absent from the table
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Invalid lag
    #[error("Invalid periods: {0} (must be at least 1)")]
    InvalidPeriods(usize),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}

pub(crate) fn ensure_columns(
    df: &polars::prelude::DataFrame,
    columns: &[&str],
) -> Result<(), GrowthError> {
    match columns
        .iter()
        .find(|name| df.get_column_index(name).is_none())
    {
        Some(missing) => Err(GrowthError::MissingColumn((*missing).to_string())),
        None => Ok(()),
    }
}
