//! Organization task arguments

use std::path::PathBuf;

use clap::Parser;

/// Arguments for 'sync-org-memberships'
#[derive(Parser, Debug)]
pub struct SyncOrgMembershipsArgs {
    /// CSV with user_id, new_organizations and old_organizations columns
    ///
    /// Organization lists are `|`-separated names.
    #[arg(default_value = "zendesk-people.csv")]
    pub file: PathBuf,
}

/// Arguments for 'rename-orgs'
#[derive(Parser, Debug)]
pub struct RenameOrgsArgs {
    /// Text to replace in organization names (case-sensitive)
    #[arg(long)]
    pub from: String,

    /// Replacement text
    #[arg(long)]
    pub to: String,
}
