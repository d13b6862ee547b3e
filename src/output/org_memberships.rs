//! Organization membership export rows

use serde::Serialize;

use super::ExportRow;

/// A member's email paired with the organization name
#[derive(Serialize, Debug, Clone)]
pub struct OrgMembershipRow {
    pub email: String,
    pub organization: String,
}

impl ExportRow for OrgMembershipRow {
    const HEADERS: &'static [&'static str] = &["email", "organization"];

    fn values(&self) -> Vec<String> {
        vec![self.email.clone(), self.organization.clone()]
    }
}
