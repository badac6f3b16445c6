//! Growth computation settings.

use crate::error::GrowthError;
use serde::{Deserialize, Serialize};

/// Configuration for growth column derivation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthConfig {
    /// Lag in rows within a company group (default: 1, the previous period)
    pub periods: usize,
    /// Sort rows by company and year before computing (default: false)
    ///
    /// When off, growth is computed against the preceding row in input order.
    pub sort_by_year: bool,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            periods: 1,
            sort_by_year: false,
        }
    }
}

impl GrowthConfig {
    /// Check the configuration.
    ///
    /// # Errors
    /// Returns [`GrowthError::InvalidPeriods`] when `periods` is zero.
    pub const fn validate(&self) -> Result<(), GrowthError> {
        if self.periods == 0 {
            return Err(GrowthError::InvalidPeriods(self.periods));
        }
        Ok(())
    }
}
