//! Organization command handlers

use std::collections::BTreeSet;

use log::{debug, info, warn};

use crate::cli::{Cli, RenameOrgsArgs, SyncOrgMembershipsArgs};
use crate::error::Result;
use crate::input::{read_csv_file, CsvRecord};
use crate::ui::{create_spinner, finish_spinner_with_message, update_spinner};
use crate::zendesk::ZendeskClient;

/// What a membership sync changed
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncSummary {
    pub added: usize,
    pub removed: usize,
    pub skipped_rows: usize,
    pub unknown_organizations: usize,
}

/// Run the 'sync-org-memberships' command
pub async fn run_sync_org_memberships_command(
    client: &ZendeskClient,
    cli: &Cli,
    args: &SyncOrgMembershipsArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    info!("Reading membership changes from {}", args.file.display());
    let records = read_csv_file(&args.file)?;

    let spinner = create_spinner(
        &format!("Syncing memberships for {} rows...", records.len()),
        cli.batch,
    );
    let summary = sync_org_memberships(client, &records).await?;
    finish_spinner_with_message(
        spinner,
        &format!(
            "Added {} and removed {} memberships",
            summary.added, summary.removed
        ),
    );

    if summary.unknown_organizations > 0 {
        eprintln!(
            "{} organization name(s) were not found, see warnings",
            summary.unknown_organizations
        );
    }
    Ok(())
}

/// Apply `user_id,new_organizations,old_organizations` rows
///
/// Organization lists are `|`-separated names. Rows without new
/// organizations are skipped. The first failing request aborts the sync.
pub async fn sync_org_memberships(
    client: &ZendeskClient,
    records: &[CsvRecord],
) -> Result<SyncSummary> {
    let mut summary = SyncSummary::default();

    for record in records {
        let user_id: u64 = match record.require("user_id")?.trim().parse() {
            Ok(id) => id,
            Err(_) => {
                warn!("Line {}: invalid user_id, skipping", record.line());
                summary.skipped_rows += 1;
                continue;
            }
        };
        let Some(user) = client.get_user_by_id(user_id).await? else {
            warn!("Line {}: user {} not found, skipping", record.line(), user_id);
            summary.skipped_rows += 1;
            continue;
        };
        let email = user.email.clone().unwrap_or_default();

        let Some(new_orgs) = record.non_empty("new_organizations").map(split_names) else {
            info!("Skipping {}, no new organizations set", email);
            summary.skipped_rows += 1;
            continue;
        };
        let old_orgs = record
            .non_empty("old_organizations")
            .map(split_names)
            .unwrap_or_default();

        info!("Processing org changes for {}", email);

        for name in new_orgs.difference(&old_orgs) {
            let Some(org) = client.get_organization_by_name(name).await? else {
                warn!("Organization '{}' not found, not adding {}", name, email);
                summary.unknown_organizations += 1;
                continue;
            };
            info!("Adding {} to {}", email, name);
            user.add_org_membership(&org).await?;
            summary.added += 1;
        }

        for name in old_orgs.difference(&new_orgs) {
            let Some(org) = client.get_organization_by_name(name).await? else {
                warn!("Organization '{}' not found, not removing {}", name, email);
                summary.unknown_organizations += 1;
                continue;
            };
            info!("Removing {} from {}", email, name);
            user.unassign_organization(&org).await?;
            summary.removed += 1;
        }
    }

    debug!("Membership sync finished: {:?}", summary);
    Ok(summary)
}

fn split_names(value: &str) -> BTreeSet<String> {
    value
        .split('|')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

/// Run the 'rename-orgs' command
pub async fn run_rename_orgs_command(
    client: &ZendeskClient,
    cli: &Cli,
    args: &RenameOrgsArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    if args.from.is_empty() {
        return Err("--from must not be empty".into());
    }

    let spinner = create_spinner("Fetching organizations...", cli.batch);
    let renamed = rename_organizations(client, &args.from, &args.to, |name| {
        update_spinner(&spinner, &format!("Renaming '{}'...", name))
    })
    .await?;
    finish_spinner_with_message(spinner, &format!("Renamed {} organization(s)", renamed));

    if renamed == 0 {
        eprintln!("No organizations contain '{}'", args.from);
    }
    Ok(())
}

/// Replace `from` with `to` in every organization name containing `from`
///
/// Returns the number of organizations renamed.
pub async fn rename_organizations<F>(
    client: &ZendeskClient,
    from: &str,
    to: &str,
    mut on_rename: F,
) -> Result<usize>
where
    F: FnMut(&str),
{
    let organizations = client.organizations().await?;
    let mut renamed = 0;

    for org in organizations.iter() {
        let Some(name) = org.name.as_deref().filter(|n| n.contains(from)) else {
            continue;
        };
        let new_name = name.replace(from, to);
        on_rename(name);
        info!("Renaming organization {} '{}' to '{}'", org.id, name, new_name);

        let mut org = org.as_ref().clone();
        org.set_name(&new_name).await?;
        renamed += 1;
    }
    Ok(renamed)
}
