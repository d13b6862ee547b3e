//! Groups module - agent groups and their members

mod api;
mod commands;
mod models;

pub use commands::{group_member_emails, run_export_groups_command, run_group_members_command};
pub use models::Group;
