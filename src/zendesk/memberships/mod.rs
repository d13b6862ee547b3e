//! Memberships module - group and organization membership records

mod api;
mod commands;
mod models;

pub use commands::{org_membership_rows, run_export_org_memberships_command};
pub use models::{GroupMembership, OrganizationMembership};
