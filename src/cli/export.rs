//! Export command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Resource types for the 'export' command
#[derive(Subcommand, Debug)]
pub enum ExportResource {
    /// Users with their organizations, groups and organization tags
    #[command(visible_alias = "people")]
    Users(ExportArgs),

    /// Agent groups
    Groups(ExportArgs),

    /// Organization memberships as member email and organization name
    #[command(visible_alias = "org-members")]
    OrgMemberships(ExportArgs),
}

/// Arguments shared by every 'export' subcommand
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,
}
