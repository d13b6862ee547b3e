//! Workday reconciliation rows

use serde::Serialize;

use super::ExportRow;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WorkdayRow {
    pub email: String,
    pub org: String,
    pub in_workday: bool,
}

impl ExportRow for WorkdayRow {
    const HEADERS: &'static [&'static str] = &["email", "org", "in_workday"];

    fn values(&self) -> Vec<String> {
        vec![
            self.email.clone(),
            self.org.clone(),
            self.in_workday.to_string(),
        ]
    }
}
