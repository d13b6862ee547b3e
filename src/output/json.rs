//! JSON and YAML output formatters

use super::{ExportRow, Formatter};
use crate::error::{Result, ZendeskError};

/// Formatter for JSON output
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn render<R: ExportRow>(&self, rows: &[R]) -> Result<String> {
        Ok(serde_json::to_string_pretty(rows)?)
    }
}

/// Formatter for YAML output
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn render<R: ExportRow>(&self, rows: &[R]) -> Result<String> {
        let yaml = serde_yml::to_string(rows)
            .map_err(|e| ZendeskError::Json(format!("Error serializing to YAML: {}", e)))?;
        Ok(yaml.trim_end().to_string())
    }
}
