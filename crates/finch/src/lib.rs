#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/finch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod pipeline;

// Re-export main types from sub-crates
pub use finch_data as data;
pub use finch_growth as growth;
pub use finch_output as output;

pub use pipeline::{DEFAULT_OUTPUT, Pipeline, PipelineConfig, PipelineError, PipelineOutcome};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
