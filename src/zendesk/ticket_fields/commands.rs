//! Ticket field command handlers

use log::info;

use crate::cli::{Cli, FieldOptionsArgs};
use crate::error::Result;
use crate::output::{write_csv_file, FieldOptionRow};
use crate::ui::{create_spinner, finish_spinner, finish_spinner_with_message};
use crate::zendesk::{CustomFieldOption, ZendeskClient};

/// Run the 'field-options' command
pub async fn run_field_options_command(
    client: &ZendeskClient,
    cli: &Cli,
    args: &FieldOptionsArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    info!("Collecting options for ticket field: {}", args.field_title);

    let spinner = create_spinner(
        &format!("Fetching options of '{}'...", args.field_title),
        cli.batch,
    );
    let Some(options) = field_options(client, &args.field_title).await? else {
        finish_spinner(spinner);
        return Err(format!("Ticket field '{}' not found", args.field_title).into());
    };

    let rows: Vec<FieldOptionRow> = options.iter().map(FieldOptionRow::from).collect();
    info!("Writing {} options to {}", rows.len(), args.output_file.display());
    write_csv_file(&rows, &args.output_file)?;

    finish_spinner_with_message(
        spinner,
        &format!(
            "Wrote {} options to {}",
            rows.len(),
            args.output_file.display()
        ),
    );
    Ok(())
}

/// Options of the ticket field with the given title
///
/// Uses the options embedded in the field listing and falls back to the
/// options endpoint when none are embedded. `None` if no field has the title.
pub async fn field_options(
    client: &ZendeskClient,
    title: &str,
) -> Result<Option<Vec<CustomFieldOption>>> {
    let Some(field) = client.get_ticket_field_by_title(title).await? else {
        return Ok(None);
    };

    let options = if field.options().is_empty() {
        client.get_ticket_field_options(field.id).await?
    } else {
        field.options().to_vec()
    };
    info!("Found {} options for {}", options.len(), title);
    Ok(Some(options))
}
