#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/finch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod config;
pub mod error;
pub mod ordering;
pub mod transform;

pub use aggregate::summarize_growth;
pub use config::GrowthConfig;
pub use error::GrowthError;
pub use ordering::find_unordered_companies;
pub use transform::{compute_growth, growth_expr};
