//! CLI argument parsing

mod common;
mod export;
mod organizations;
mod tickets;
mod users;
mod workday;

use clap::{Parser, Subcommand};

use crate::config::{defaults, env};
use crate::zendesk::Credentials;

pub use common::OutputFormat;
pub use export::{ExportArgs, ExportResource};
pub use organizations::{RenameOrgsArgs, SyncOrgMembershipsArgs};
pub use tickets::{
    CleanEmailCcsArgs, FieldOptionsArgs, MajorCertTicketsArgs, SolveOldTicketsArgs,
};
pub use users::{GroupMembersArgs, UpdateExternalIdsArgs};
pub use workday::CompareWorkdayArgs;

/// Zendesk administration tasks
#[derive(Parser, Debug)]
#[command(name = "zdctl")]
#[command(version)]
#[command(about = "Administrative tasks for a Zendesk Support account", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Zendesk company subdomain [env: ZENDESK_COMPANY]
    #[arg(short = 'c', long, global = true)]
    pub company: Option<String>,

    /// Login email [env: ZENDESK_USERNAME]
    #[arg(short = 'u', long, global = true)]
    pub username: Option<String>,

    /// Password or API token [env: ZENDESK_PASSWORD]
    #[arg(short = 'p', long, global = true)]
    pub password: Option<String>,

    /// Full API root URL, replaces the company host [env: ZENDESK_URL]
    #[arg(long = "url", global = true)]
    pub base_url: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, env = env::LOG_LEVEL, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinners, no interactive prompts
    #[arg(short = 'b', long, global = true, default_value_t = false)]
    pub batch: bool,
}

impl Cli {
    /// Credentials given on the command line
    pub fn credentials(&self) -> Credentials<'_> {
        Credentials {
            company: self.company.as_deref(),
            username: self.username.as_deref(),
            password: self.password.as_deref(),
            base_url: self.base_url.as_deref(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add and remove organization memberships listed in a CSV file
    #[command(visible_alias = "sync")]
    SyncOrgMemberships(SyncOrgMembershipsArgs),

    /// Export users, groups or organization memberships
    Export {
        #[command(subcommand)]
        resource: ExportResource,
    },

    /// Print the email of every member of a group
    GroupMembers(GroupMembersArgs),

    /// Write the options of a ticket field to a CSV file
    FieldOptions(FieldOptionsArgs),

    /// Rename organizations by replacing part of their name
    RenameOrgs(RenameOrgsArgs),

    /// Set missing user external ids from an employee CSV file
    UpdateExternalIds(UpdateExternalIdsArgs),

    /// Clear the ticket restriction of restricted agents
    UpdateAgents,

    /// Solve unsolved tickets that have not been updated for a long time
    SolveOldTickets(SolveOldTicketsArgs),

    /// Remove an address from the CCs of unsolved tickets
    CleanEmailCcs(CleanEmailCcsArgs),

    /// Write submitter and video link of major certification requests to CSV
    MajorCertTickets(MajorCertTicketsArgs),

    /// Check exported Zendesk users against a Workday report (offline)
    CompareWorkday(CompareWorkdayArgs),
}
