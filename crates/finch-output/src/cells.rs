//! Cell rendering shared by the text tables and the CSV writer.

use polars::prelude::*;

/// Text shown in terminal tables for a missing value.
pub(crate) const MISSING: &str = "NaN";

/// Render every value of a column as text, `None` for nulls.
///
/// Floats use the shortest representation that parses back to the same
/// value and NaN renders as missing; everything else goes through a string
/// cast.
pub(crate) fn render_column(column: &Column) -> PolarsResult<Vec<Option<String>>> {
    let series = column.as_materialized_series();
    let rendered: Vec<Option<String>> = match series.dtype() {
        DataType::Float32 | DataType::Float64 => series
            .cast(&DataType::Float64)?
            .f64()?
            .into_iter()
            .map(|v| v.filter(|x| !x.is_nan()).map(format_float))
            .collect(),
        DataType::String => series
            .str()?
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect(),
        _ => series
            .cast(&DataType::String)?
            .str()?
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect(),
    };
    Ok(rendered)
}

/// Shortest round-trip text of a float, always with a decimal point when
/// finite so the value reloads as a float.
pub(crate) fn format_float(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

/// Fixed six-decimal rendering used for averaged percentages.
pub(crate) fn format_mean(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| format!("{v:.6}"))
}

/// Lay out rows under a header with right-aligned columns.
///
/// The first column is the row label and is left-aligned.
pub(crate) fn layout(header: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    for line in std::iter::once(header).chain(rows.iter().map(Vec::as_slice)) {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, &width))| {
                if i == 0 {
                    format!("{cell:<width$}")
                } else {
                    format!("{cell:>width$}")
                }
            })
            .collect();
        output.push_str(cells.join("  ").trim_end());
        output.push('\n');
    }
    output
}
