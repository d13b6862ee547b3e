//! zdctl - Main entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use zdctl::cli::{Cli, Command, ExportResource};
use zdctl::zendesk::{
    run_clean_email_ccs_command, run_export_groups_command, run_export_org_memberships_command,
    run_export_users_command, run_field_options_command, run_group_members_command,
    run_major_cert_tickets_command, run_rename_orgs_command, run_solve_old_tickets_command,
    run_sync_org_memberships_command, run_update_agents_command, run_update_external_ids_command,
    ZendeskClient,
};
use zdctl::run_compare_workday_command;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting zdctl v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        // Offline, runs without credentials
        Command::CompareWorkday(args) => run_compare_workday_command(args),
        Command::SyncOrgMemberships(args) => {
            run_sync_org_memberships_command(&connect(cli)?, cli, args).await
        }
        Command::Export { resource } => {
            let client = connect(cli)?;
            match resource {
                ExportResource::Users(args) => run_export_users_command(&client, cli, args).await,
                ExportResource::Groups(args) => {
                    run_export_groups_command(&client, cli, args).await
                }
                ExportResource::OrgMemberships(args) => {
                    run_export_org_memberships_command(&client, cli, args).await
                }
            }
        }
        Command::GroupMembers(args) => run_group_members_command(&connect(cli)?, cli, args).await,
        Command::FieldOptions(args) => run_field_options_command(&connect(cli)?, cli, args).await,
        Command::RenameOrgs(args) => run_rename_orgs_command(&connect(cli)?, cli, args).await,
        Command::UpdateExternalIds(args) => {
            run_update_external_ids_command(&connect(cli)?, cli, args).await
        }
        Command::UpdateAgents => run_update_agents_command(&connect(cli)?, cli).await,
        Command::SolveOldTickets(args) => {
            run_solve_old_tickets_command(&connect(cli)?, cli, args).await
        }
        Command::CleanEmailCcs(args) => {
            run_clean_email_ccs_command(&connect(cli)?, cli, args).await
        }
        Command::MajorCertTickets(args) => {
            run_major_cert_tickets_command(&connect(cli)?, cli, args).await
        }
    }
}

/// Resolve credentials and build the API client
fn connect(cli: &Cli) -> Result<ZendeskClient, Box<dyn std::error::Error>> {
    let config = cli.credentials().resolve()?;
    debug!("Using Zendesk API at {}", config.base_url);
    Ok(ZendeskClient::new(config)?)
}
