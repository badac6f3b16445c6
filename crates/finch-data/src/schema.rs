//! Column names of the financial records table.
//!
//! The input file carries one row per (company, year) observation. Five of its
//! numeric columns are tracked as [`FinancialMetric`]s, each of which gets a
//! derived growth column once the table has been transformed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Company identifier column.
pub const COMPANY: &str = "Company";

/// Fiscal year column.
pub const YEAR: &str = "Year";

/// Total revenue column.
pub const TOTAL_REVENUE: &str = "Total Revenue";

/// Net income column.
pub const NET_INCOME: &str = "Net Income";

/// Total assets column.
pub const TOTAL_ASSETS: &str = "Total Assets";

/// Total liabilities column.
pub const TOTAL_LIABILITIES: &str = "Total Liabilities";

/// Operating cash flow column.
pub const OPERATING_CASH_FLOW: &str = "Cash Flow from Operating Activities";

/// Every column the pipeline reads from the input.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    COMPANY,
    YEAR,
    TOTAL_REVENUE,
    NET_INCOME,
    TOTAL_ASSETS,
    TOTAL_LIABILITIES,
    OPERATING_CASH_FLOW,
];

/// A financial statement line item tracked for growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinancialMetric {
    /// Total revenue (top line)
    Revenue,
    /// Net income (bottom line)
    NetIncome,
    /// Total assets
    Assets,
    /// Total liabilities
    Liabilities,
    /// Cash flow from operating activities
    OperatingCashFlow,
}

impl FinancialMetric {
    /// All metrics, in the order their growth columns are appended.
    pub const ALL: [Self; 5] = [
        Self::Revenue,
        Self::NetIncome,
        Self::Assets,
        Self::Liabilities,
        Self::OperatingCashFlow,
    ];

    /// Input column holding the raw values.
    pub const fn source_column(&self) -> &'static str {
        match self {
            Self::Revenue => TOTAL_REVENUE,
            Self::NetIncome => NET_INCOME,
            Self::Assets => TOTAL_ASSETS,
            Self::Liabilities => TOTAL_LIABILITIES,
            Self::OperatingCashFlow => OPERATING_CASH_FLOW,
        }
    }

    /// Derived column holding the period-over-period growth in percent.
    pub const fn growth_column(&self) -> &'static str {
        match self {
            Self::Revenue => "Revenue Growth (%)",
            Self::NetIncome => "Net Income Growth (%)",
            Self::Assets => "Assets Growth (%)",
            Self::Liabilities => "Liabilities Growth (%)",
            Self::OperatingCashFlow => "Cash Flow Growth (%)",
        }
    }

    /// Short human-readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::NetIncome => "Net Income",
            Self::Assets => "Assets",
            Self::Liabilities => "Liabilities",
            Self::OperatingCashFlow => "Cash Flow",
        }
    }

    /// Names of all derived growth columns, in append order.
    pub fn growth_columns() -> [&'static str; 5] {
        Self::ALL.map(|m| m.growth_column())
    }
}

impl fmt::Display for FinancialMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
