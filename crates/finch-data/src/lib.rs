#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/finch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod loader;
pub mod schema;

pub use error::{DataError, Result};
pub use loader::{LoadOptions, load_csv, load_csv_with_options, read_csv, require_columns};
pub use schema::{FinancialMetric, REQUIRED_COLUMNS};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
