//! Organizations module - list, look up and rename organizations

mod api;
mod commands;
mod models;

pub use commands::{
    rename_organizations, run_rename_orgs_command, run_sync_org_memberships_command,
    sync_org_memberships, SyncSummary,
};
pub use models::Organization;
