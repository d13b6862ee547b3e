//! Users module - users, identities and user maintenance tasks

mod api;
mod commands;
mod models;

pub use commands::{
    clear_agent_restrictions, external_ids_by_email, run_export_users_command,
    run_update_agents_command, run_update_external_ids_command, update_external_ids, user_rows,
    ExternalIdSummary,
};
pub use models::{User, UserIdentity};
