//! User export rows

use serde::Serialize;

use super::common::{join_sorted, opt};
use super::ExportRow;
use crate::zendesk::{Group, Organization, User};

/// One user with its resolved organizations and groups
#[derive(Serialize, Debug, Clone)]
pub struct UserRow {
    pub user_id: u64,
    pub name: String,
    pub employee_id: String,
    pub active: String,
    pub verified: String,
    pub last_login_at: String,
    pub email: String,
    pub organizations: String,
    pub role: String,
    pub agent_groups: String,
    pub restricted_agent: String,
    pub ticket_restriction: String,
    pub suspended: String,
    pub org_tags: String,
}

impl UserRow {
    pub fn new(user: &User, organizations: &[Organization], groups: &[Group]) -> Self {
        Self {
            user_id: user.id,
            name: opt(&user.name),
            employee_id: opt(&user.external_id),
            active: opt(&user.active),
            verified: opt(&user.verified),
            last_login_at: opt(&user.last_login_at),
            email: opt(&user.email),
            organizations: join_sorted(organizations.iter().filter_map(|o| o.name.clone())),
            role: opt(&user.role),
            agent_groups: join_sorted(groups.iter().filter_map(|g| g.name.clone())),
            restricted_agent: opt(&user.restricted_agent),
            ticket_restriction: opt(&user.ticket_restriction),
            suspended: opt(&user.suspended),
            org_tags: join_sorted(organizations.iter().flat_map(|o| o.tags().to_vec())),
        }
    }
}

impl ExportRow for UserRow {
    const HEADERS: &'static [&'static str] = &[
        "user_id",
        "name",
        "employee_id",
        "active",
        "verified",
        "last_login_at",
        "email",
        "organizations",
        "role",
        "agent_groups",
        "restricted_agent",
        "ticket_restriction",
        "suspended",
        "org_tags",
    ];

    fn values(&self) -> Vec<String> {
        vec![
            self.user_id.to_string(),
            self.name.clone(),
            self.employee_id.clone(),
            self.active.clone(),
            self.verified.clone(),
            self.last_login_at.clone(),
            self.email.clone(),
            self.organizations.clone(),
            self.role.clone(),
            self.agent_groups.clone(),
            self.restricted_agent.clone(),
            self.ticket_restriction.clone(),
            self.suspended.clone(),
            self.org_tags.clone(),
        ]
    }
}
