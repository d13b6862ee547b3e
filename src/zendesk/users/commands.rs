//! User command handlers

use std::collections::HashMap;

use log::{debug, info, warn};

use crate::cli::{Cli, ExportArgs, UpdateExternalIdsArgs};
use crate::error::Result;
use crate::input::{read_csv_file, CsvRecord};
use crate::output::{output_rows, UserRow};
use crate::ui::{create_spinner, finish_spinner, finish_spinner_with_message, update_spinner};
use crate::zendesk::ZendeskClient;

/// Run 'export users'
pub async fn run_export_users_command(
    client: &ZendeskClient,
    cli: &Cli,
    args: &ExportArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner("Fetching users...", cli.batch);
    let rows = user_rows(client, |done, total| {
        update_spinner(&spinner, &format!("Resolving memberships {}/{}...", done, total))
    })
    .await?;
    finish_spinner(spinner);

    debug!("Exporting {} users as {}", rows.len(), args.format);
    output_rows(&rows, args.format)?;
    Ok(())
}

/// One export row per user, with organizations and groups resolved
pub async fn user_rows<F>(client: &ZendeskClient, mut progress: F) -> Result<Vec<UserRow>>
where
    F: FnMut(usize, usize),
{
    let users = client.users().await?;
    let mut rows = Vec::with_capacity(users.len());

    for (i, user) in users.iter().enumerate() {
        progress(i + 1, users.len());
        let organizations = user.organizations().await?;
        let groups = user.groups().await?;
        rows.push(UserRow::new(user, &organizations, &groups));
    }
    Ok(rows)
}

/// Outcome of an external id reconciliation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExternalIdSummary {
    pub updated: usize,
    pub already_set: usize,
    pub not_found: usize,
}

/// Run the 'update-external-ids' command
pub async fn run_update_external_ids_command(
    client: &ZendeskClient,
    cli: &Cli,
    args: &UpdateExternalIdsArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    info!("Reading external ids from {}", args.file.display());
    let external_ids = external_ids_by_email(&read_csv_file(&args.file)?)?;

    let spinner = create_spinner("Updating external ids...", cli.batch);
    let summary = update_external_ids(client, &external_ids).await?;
    finish_spinner_with_message(
        spinner,
        &format!(
            "Updated {}, already set {}, not in file {}",
            summary.updated, summary.already_set, summary.not_found
        ),
    );
    Ok(())
}

/// Map lower-cased `email` to `employee_id`
pub fn external_ids_by_email(records: &[CsvRecord]) -> Result<HashMap<String, String>> {
    records
        .iter()
        .map(|r| -> Result<(String, String)> {
            Ok((
                r.require("email")?.trim().to_lowercase(),
                r.require("employee_id")?.trim().to_string(),
            ))
        })
        .collect()
}

/// Set `external_id` on every user that has none and appears in `external_ids`
pub async fn update_external_ids(
    client: &ZendeskClient,
    external_ids: &HashMap<String, String>,
) -> Result<ExternalIdSummary> {
    let users = client.users().await?;
    let mut summary = ExternalIdSummary::default();

    for user in users.iter() {
        let name = user.name.as_deref().unwrap_or_default();
        if let Some(existing) = &user.external_id {
            info!("{} ({}) already has external_id: {}", user.id, name, existing);
            summary.already_set += 1;
            continue;
        }

        let email = user.email.as_deref().unwrap_or_default().to_lowercase();
        match external_ids.get(&email) {
            Some(external_id) => {
                warn!("{} ({}) setting external_id to {}", user.id, name, external_id);
                let mut user = user.as_ref().clone();
                user.set_external_id(external_id).await?;
                summary.updated += 1;
            }
            None => {
                warn!(
                    "{} ({}) could not find external_id for {}",
                    user.id, name, email
                );
                summary.not_found += 1;
            }
        }
    }
    Ok(summary)
}

/// Run the 'update-agents' command
pub async fn run_update_agents_command(
    client: &ZendeskClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner("Clearing ticket restrictions...", cli.batch);
    let updated = clear_agent_restrictions(client).await?;
    finish_spinner_with_message(spinner, &format!("Updated {} agent(s)", updated));
    Ok(())
}

/// Clear `ticket_restriction` on every restricted agent
pub async fn clear_agent_restrictions(client: &ZendeskClient) -> Result<usize> {
    let users = client.users().await?;
    let mut updated = 0;

    for user in users.iter().filter(|u| u.is_restricted_agent()) {
        info!("Clearing ticket restriction for agent {}", user.id);
        let mut user = user.as_ref().clone();
        user.set_ticket_restriction(None).await?;
        updated += 1;
    }
    Ok(updated)
}
