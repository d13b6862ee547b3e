//! Table output formatter

use comfy_table::{presets::NOTHING, Table};

use super::{ExportRow, Formatter};
use crate::error::Result;

/// Formatter for ASCII table output
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn render<R: ExportRow>(&self, rows: &[R]) -> Result<String> {
        let mut table = Table::new();
        table.load_preset(NOTHING).set_header(
            R::HEADERS
                .iter()
                .map(|h| h.to_uppercase())
                .collect::<Vec<_>>(),
        );

        for row in rows {
            table.add_row(row.values());
        }

        Ok(table.to_string())
    }
}
