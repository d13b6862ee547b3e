//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON, YAML

mod common;
mod csv;
mod field_options;
mod groups;
mod json;
mod major_cert;
mod org_memberships;
mod table;
mod users;
mod workday;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

pub use self::common::{escape_csv, join_sorted, opt};
pub use self::csv::CsvFormatter;
pub use self::field_options::FieldOptionRow;
pub use self::groups::GroupRow;
pub use self::json::{JsonFormatter, YamlFormatter};
pub use self::major_cert::MajorCertRow;
pub use self::org_memberships::OrgMembershipRow;
pub use self::table::TableFormatter;
pub use self::users::UserRow;
pub use self::workday::WorkdayRow;

/// A flat record that every formatter can render
pub trait ExportRow: Serialize {
    /// Column names, in output order
    const HEADERS: &'static [&'static str];

    /// Cell values, aligned with `HEADERS`
    fn values(&self) -> Vec<String>;
}

/// Trait for output formatters
pub trait Formatter {
    /// Render rows to a string, without a trailing newline
    fn render<R: ExportRow>(&self, rows: &[R]) -> Result<String>;
}

/// Render rows in the given format
pub fn render_rows<R: ExportRow>(rows: &[R], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => TableFormatter.render(rows),
        OutputFormat::Csv => CsvFormatter.render(rows),
        OutputFormat::Json => JsonFormatter.render(rows),
        OutputFormat::Yaml => YamlFormatter.render(rows),
    }
}

/// Print rows to stdout in the given format
pub fn output_rows<R: ExportRow>(rows: &[R], format: OutputFormat) -> Result<()> {
    println!("{}", render_rows(rows, format)?);
    Ok(())
}

/// Write rows as CSV to a file
pub fn write_csv_file<R: ExportRow>(rows: &[R], path: &std::path::Path) -> Result<()> {
    let mut content = CsvFormatter.render(rows)?;
    content.push('\n');
    std::fs::write(path, content)?;
    Ok(())
}
