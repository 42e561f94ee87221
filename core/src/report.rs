//! Report stage: the result table, its aligned ASCII rendering, and the CSV.

use std::path::Path;

use crate::analyzer::AnalysisResults;
use crate::error::HarnessError;

/// Header row plus one row per iteration, iterations ascending, columns in
/// configured child-count order. Built once; source of truth for both the
/// console table and the CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    pub fn build(child_counts: &[u64], iterations: u32, results: &AnalysisResults) -> Self {
        let headers = std::iter::once("iter".to_string())
            .chain(child_counts.iter().map(u64::to_string))
            .collect();

        let mut rows = Vec::with_capacity(iterations as usize);
        for iteration in 1..=iterations {
            let mut row = Vec::with_capacity(child_counts.len() + 1);
            row.push(iteration.to_string());
            for &count in child_counts {
                row.push(results.get(&(iteration, count)).cloned().unwrap_or_default());
            }
            rows.push(row);
        }

        Self { headers, rows }
    }

    /// Per-column maximum rendered width over the header and all cells.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(String::len).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.len());
            }
        }
        widths
    }

    /// Aligned ASCII table: header, dash separator, one line per row, each
    /// cell left-justified to its column width, cells joined with " | ".
    pub fn render(&self) -> String {
        let widths = self.column_widths();

        let separator = widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-");

        let mut out = String::new();
        out.push_str(&format_row(&self.headers, &widths));
        out.push('\n');
        out.push_str(&separator);
        out.push('\n');
        for row in &self.rows {
            out.push_str(&format_row(row, &widths));
            out.push('\n');
        }
        out
    }

    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        push_csv_line(&mut out, &self.headers);
        for row in &self.rows {
            push_csv_line(&mut out, row);
        }
        out
    }
}

fn format_row(row: &[String], widths: &[usize]) -> String {
    row.iter()
        .zip(widths.iter().copied())
        .map(|(cell, w)| format!("{cell:<w$}"))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn push_csv_line(out: &mut String, row: &[String]) {
    let line = row
        .iter()
        .map(|cell| csv_field(cell))
        .collect::<Vec<_>>()
        .join(",");
    out.push_str(&line);
    out.push('\n');
}

/// Minimal CSV quoting: a field containing a comma, double quote or line
/// break is wrapped in double quotes with internal quotes doubled.
fn csv_field(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

pub fn write_csv(table: &ResultTable, path: &Path) -> Result<(), HarnessError> {
    std::fs::write(path, table.to_csv())?;
    Ok(())
}
