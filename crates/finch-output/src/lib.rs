#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/finch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cells;
pub mod export;
pub mod preview;
pub mod report;
pub mod summary;
pub mod trend;

pub use export::{ExportError, ExportFormat, Exporter, frame_to_csv_string, write_csv};
pub use preview::{DEFAULT_PREVIEW_ROWS, Preview};
pub use report::{Report, ReportBuilder, ReportError, ReportFormat};
pub use summary::{CompanyGrowth, GrowthSummary};
pub use trend::{RevenueTrend, TrendPoint, revenue_trends};
