//! User and group task arguments

use std::path::PathBuf;

use clap::Parser;

use crate::config::{defaults, env};

/// Arguments for 'group-members'
#[derive(Parser, Debug)]
pub struct GroupMembersArgs {
    /// Group ID
    #[arg(env = "GROUP_ID")]
    pub group_id: u64,
}

/// Arguments for 'update-external-ids'
#[derive(Parser, Debug)]
pub struct UpdateExternalIdsArgs {
    /// CSV with email and employee_id columns
    #[arg(short, long, env = env::EXTERNAL_ID_FILE, default_value = defaults::EXTERNAL_ID_FILE)]
    pub file: PathBuf,
}
