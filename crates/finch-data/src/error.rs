//! Error types for data operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading financial records.
#[derive(Debug, Error)]
pub enum DataError {
    /// Input file missing or unreadable
    #[error("Cannot access {}: {source}", .path.display())]
    FileAccess {
        /// Path that was opened
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Malformed delimited content
    #[error("Parse error{}: {message}", .line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    Parse {
        /// 1-based line of the offending record, when known
        line: Option<u64>,
        /// What went wrong
        message: String,
    },

    /// A referenced column is absent from the input
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}

impl DataError {
    /// Build a parse error without line information.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            line: None,
            message: message.into(),
        }
    }
}
