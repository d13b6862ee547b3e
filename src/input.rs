//! CSV input files with a header row
//!
//! Reads the inverse of what `output::escape_csv` writes: fields may be
//! quoted, quoted fields may contain commas, doubled quotes and newlines.

use std::collections::HashMap;
use std::path::Path;

use log::debug;

use crate::error::{Result, ZendeskError};

/// One data row keyed by header name
#[derive(Debug, Clone, Default)]
pub struct CsvRecord {
    line: usize,
    fields: HashMap<String, String>,
}

impl CsvRecord {
    /// Value of a column; `None` if the column is absent
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Value of a column that must exist in the file
    pub fn require(&self, column: &str) -> Result<&str> {
        self.get(column).ok_or_else(|| {
            ZendeskError::Csv(format!("Line {}: missing column '{}'", self.line, column))
        })
    }

    /// Value of a column, `None` when absent or blank
    pub fn non_empty(&self, column: &str) -> Option<&str> {
        self.get(column).map(str::trim).filter(|v| !v.is_empty())
    }

    /// 1-based line number of the record's first line
    pub fn line(&self) -> usize {
        self.line
    }
}

/// Read and parse a CSV file
pub fn read_csv_file(path: &Path) -> Result<Vec<CsvRecord>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ZendeskError::Io(format!("Cannot read {}: {}", path.display(), e)))?;
    let records = parse_csv(&content)?;
    debug!("Read {} rows from {}", records.len(), path.display());
    Ok(records)
}

/// Parse CSV text whose first row is the header
///
/// Short rows leave trailing columns absent; extra cells are ignored.
pub fn parse_csv(content: &str) -> Result<Vec<CsvRecord>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut rows = split_rows(content)?.into_iter();

    let Some((_, headers)) = rows.next() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = headers.into_iter().map(|h| h.trim().to_string()).collect();

    Ok(rows
        .filter(|(_, cells)| !(cells.len() == 1 && cells[0].is_empty()))
        .map(|(line, cells)| CsvRecord {
            line,
            fields: headers.iter().cloned().zip(cells).collect(),
        })
        .collect())
}

/// Split text into rows of cells, tracking each row's starting line
fn split_rows(content: &str) -> Result<Vec<(usize, Vec<String>)>> {
    let mut rows = Vec::new();
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut row_start = 1;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                chars.next();
                cell.push('"');
            }
            ('"', true) => in_quotes = false,
            ('"', false) if cell.is_empty() => in_quotes = true,
            (',', false) => cells.push(std::mem::take(&mut cell)),
            ('\r', false) if chars.peek() == Some(&'\n') => {}
            ('\n', false) => {
                cells.push(std::mem::take(&mut cell));
                rows.push((row_start, std::mem::take(&mut cells)));
                line += 1;
                row_start = line;
            }
            ('\n', true) => {
                line += 1;
                cell.push(c);
            }
            _ => cell.push(c),
        }
    }

    if in_quotes {
        return Err(ZendeskError::Csv(format!(
            "Line {}: unterminated quoted field",
            row_start
        )));
    }
    if !cell.is_empty() || !cells.is_empty() {
        cells.push(cell);
        rows.push((row_start, cells));
    }
    Ok(rows)
}
