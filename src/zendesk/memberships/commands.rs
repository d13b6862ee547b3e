//! Membership command handlers

use std::collections::HashMap;

use log::debug;

use crate::cli::{Cli, ExportArgs};
use crate::error::Result;
use crate::output::{output_rows, OrgMembershipRow};
use crate::ui::{create_spinner, finish_spinner};
use crate::zendesk::ZendeskClient;

/// Run 'export org-memberships'
pub async fn run_export_org_memberships_command(
    client: &ZendeskClient,
    cli: &Cli,
    args: &ExportArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner("Fetching organization memberships...", cli.batch);
    let rows = org_membership_rows(client).await?;
    finish_spinner(spinner);

    debug!("Exporting {} memberships as {}", rows.len(), args.format);
    output_rows(&rows, args.format)?;
    Ok(())
}

/// Member email and organization name for every organization membership
///
/// The name embedded in the membership is used when present, otherwise the
/// organization is looked up by id.
pub async fn org_membership_rows(client: &ZendeskClient) -> Result<Vec<OrgMembershipRow>> {
    let users = client.users().await?;
    let emails: HashMap<u64, &str> = users
        .iter()
        .filter_map(|u| u.email.as_deref().map(|e| (u.id, e)))
        .collect();

    let memberships = client.organization_memberships().await?;
    let mut rows = Vec::with_capacity(memberships.len());
    for membership in memberships.iter() {
        let organization = match &membership.organization_name {
            Some(name) => name.clone(),
            None => client
                .get_organization_by_id(membership.organization_id)
                .await?
                .and_then(|o| o.name)
                .unwrap_or_default(),
        };
        rows.push(OrgMembershipRow {
            email: emails
                .get(&membership.user_id)
                .map(|e| e.to_string())
                .unwrap_or_default(),
            organization,
        });
    }
    Ok(rows)
}
