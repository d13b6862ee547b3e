//! CSV output formatter

use super::common::escape_csv;
use super::{ExportRow, Formatter};
use crate::error::Result;

/// Formatter for CSV output
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn render<R: ExportRow>(&self, rows: &[R]) -> Result<String> {
        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(R::HEADERS.join(","));

        for row in rows {
            let cells: Vec<String> = row.values().iter().map(|v| escape_csv(v)).collect();
            lines.push(cells.join(","));
        }

        Ok(lines.join("\n"))
    }
}
