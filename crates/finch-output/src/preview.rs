//! Head-of-table preview of the loaded records.

use crate::cells::{MISSING, layout, render_column};
use crate::report::ReportError;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of rows shown in a preview.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// The first rows of a table, rendered as text cells.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preview {
    /// Column names.
    pub columns: Vec<String>,

    /// Rendered cells, row-major. Missing values are `None`.
    pub rows: Vec<Vec<Option<String>>>,

    /// Number of rows in the full table.
    pub total_rows: usize,
}

impl Preview {
    /// Capture the first `n` rows of a table.
    ///
    /// # Errors
    /// Returns an error if a column cannot be rendered as text.
    pub fn from_frame(df: &DataFrame, n: usize) -> Result<Self, ReportError> {
        let head = df.head(Some(n));
        let columns = head
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let rendered = head
            .get_columns()
            .iter()
            .map(render_column)
            .collect::<PolarsResult<Vec<_>>>()?;

        let rows = (0..head.height())
            .map(|row| rendered.iter().map(|column| column[row].clone()).collect())
            .collect();

        Ok(Self {
            columns,
            rows,
            total_rows: df.height(),
        })
    }

    /// Format as a text table with a leading row index.
    pub fn to_ascii_table(&self) -> String {
        let mut header = vec![String::new()];
        header.extend(self.columns.iter().cloned());

        let rows: Vec<Vec<String>> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                std::iter::once(i.to_string())
                    .chain(
                        row.iter()
                            .map(|cell| cell.clone().unwrap_or_else(|| MISSING.to_string())),
                    )
                    .collect()
            })
            .collect();

        layout(&header, &rows)
    }

    /// Format as a Markdown table.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("| {} |\n", self.columns.join(" | ")));
        output.push_str(&format!("|{}\n", "---|".repeat(self.columns.len())));
        for row in &self.rows {
            let cells: Vec<&str> = row
                .iter()
                .map(|cell| cell.as_deref().unwrap_or(MISSING))
                .collect();
            output.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
        output
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ascii_table())
    }
}
