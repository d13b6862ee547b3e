//! Offline reconciliation of a Zendesk user export against a Workday report

use std::collections::HashSet;

use log::{debug, info};

use crate::cli::CompareWorkdayArgs;
use crate::error::Result;
use crate::input::{read_csv_file, CsvRecord};
use crate::output::{output_rows, WorkdayRow};

/// Column of the Workday report holding the work email
pub const WORKDAY_EMAIL_COLUMN: &str = "Email Address";

/// Run the 'compare-workday' command
pub fn run_compare_workday_command(
    args: &CompareWorkdayArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    debug!(
        "Comparing {} against {}",
        args.zendesk_file.display(),
        args.workday_file.display()
    );

    let workday = read_csv_file(&args.workday_file)?;
    let zendesk = read_csv_file(&args.zendesk_file)?;
    let rows = compare_workday(&zendesk, &workday)?;

    info!(
        "{} of {} Zendesk users found in Workday",
        rows.iter().filter(|r| r.in_workday).count(),
        rows.len()
    );
    output_rows(&rows, args.format)?;
    Ok(())
}

/// Lower-cased Workday emails
///
/// The email cell may carry trailing text after a space; only the first
/// word is kept.
pub fn workday_emails(records: &[CsvRecord]) -> Result<HashSet<String>> {
    records
        .iter()
        .map(|r| -> Result<String> {
            let cell = r.require(WORKDAY_EMAIL_COLUMN)?;
            Ok(cell
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_lowercase())
        })
        .collect()
}

/// One row per Zendesk user (`Email`, `Organization` columns), flagged
/// when the email also appears in the Workday report
pub fn compare_workday(zendesk: &[CsvRecord], workday: &[CsvRecord]) -> Result<Vec<WorkdayRow>> {
    let known = workday_emails(workday)?;
    zendesk
        .iter()
        .map(|r| -> Result<WorkdayRow> {
            let email = r.require("Email")?;
            Ok(WorkdayRow {
                email: email.to_string(),
                org: r.require("Organization")?.to_string(),
                in_workday: known.contains(&email.to_lowercase()),
            })
        })
        .collect()
}
