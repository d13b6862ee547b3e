//! Group command handlers

use log::{debug, info};

use crate::cli::{Cli, ExportArgs, GroupMembersArgs};
use crate::error::Result;
use crate::output::{output_rows, GroupRow};
use crate::ui::{create_spinner, finish_spinner};
use crate::zendesk::ZendeskClient;

/// Run 'export groups'
pub async fn run_export_groups_command(
    client: &ZendeskClient,
    cli: &Cli,
    args: &ExportArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner("Fetching groups...", cli.batch);
    let groups = client.groups().await?;
    finish_spinner(spinner);

    let rows: Vec<GroupRow> = groups.iter().map(|g| GroupRow::from(g.as_ref())).collect();
    debug!("Exporting {} groups as {}", rows.len(), args.format);
    output_rows(&rows, args.format)?;
    Ok(())
}

/// Run the 'group-members' command
pub async fn run_group_members_command(
    client: &ZendeskClient,
    cli: &Cli,
    args: &GroupMembersArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner(
        &format!("Fetching members of group {}...", args.group_id),
        cli.batch,
    );
    let emails = group_member_emails(client, args.group_id).await?;
    finish_spinner(spinner);

    for email in emails {
        println!("{}", email);
    }
    Ok(())
}

/// Emails of the users with a membership in a group, in membership order
///
/// Members without a primary email are left out.
pub async fn group_member_emails(client: &ZendeskClient, group_id: u64) -> Result<Vec<String>> {
    let memberships = client.list_memberships_for_group(group_id).await?;
    info!(
        "Found {} memberships for group {}",
        memberships.len(),
        group_id
    );

    let mut emails = Vec::with_capacity(memberships.len());
    for membership in &memberships {
        match client.get_user_by_id(membership.user_id).await? {
            Some(user) => emails.extend(user.email),
            None => debug!("Member {} is not in the user list", membership.user_id),
        }
    }
    Ok(emails)
}
