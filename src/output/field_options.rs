//! Ticket field option export rows

use serde::Serialize;

use super::common::opt;
use super::ExportRow;
use crate::zendesk::CustomFieldOption;

#[derive(Serialize, Debug, Clone)]
pub struct FieldOptionRow {
    pub name: String,
    pub value: String,
}

impl From<&CustomFieldOption> for FieldOptionRow {
    fn from(option: &CustomFieldOption) -> Self {
        Self {
            name: opt(&option.name),
            value: opt(&option.value),
        }
    }
}

impl ExportRow for FieldOptionRow {
    const HEADERS: &'static [&'static str] = &["name", "value"];

    fn values(&self) -> Vec<String> {
        vec![self.name.clone(), self.value.clone()]
    }
}
