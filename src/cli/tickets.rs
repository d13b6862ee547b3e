//! Ticket and ticket field task arguments

use std::path::PathBuf;

use clap::Parser;

use crate::config::defaults;

/// Arguments for 'field-options'
#[derive(Parser, Debug)]
pub struct FieldOptionsArgs {
    /// Exact title of the ticket field
    pub field_title: String,

    /// CSV file to write (name,value)
    pub output_file: PathBuf,
}

/// Arguments for 'solve-old-tickets'
#[derive(Parser, Debug)]
pub struct SolveOldTicketsArgs {
    /// Solve tickets not updated for this many days
    #[arg(long, default_value_t = defaults::STALE_TICKET_DAYS)]
    pub days: i64,

    /// Custom field to fill in when it is empty
    #[arg(long, requires = "field_value")]
    pub field_id: Option<u64>,

    /// Value written to --field-id
    #[arg(long, requires = "field_id")]
    pub field_value: Option<String>,
}

/// Arguments for 'major-cert-tickets'
#[derive(Parser, Debug)]
pub struct MajorCertTicketsArgs {
    /// CSV file to write (id,subject,created_at,submitter,video_url)
    #[arg(default_value = defaults::MAJOR_CERT_FILE)]
    pub output_file: PathBuf,
}

/// Arguments for 'clean-email-ccs'
#[derive(Parser, Debug)]
pub struct CleanEmailCcsArgs {
    /// Address to remove from ticket CCs
    pub email: String,

    /// Skip confirmation prompts
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};

    #[test]
    fn test_solve_old_tickets_defaults() {
        let cli = Cli::parse_from(["zdctl", "solve-old-tickets"]);
        let Command::SolveOldTickets(args) = cli.command else {
            panic!("expected solve-old-tickets");
        };
        assert_eq!(args.days, defaults::STALE_TICKET_DAYS);
        assert!(args.field_id.is_none());
    }

    #[test]
    fn test_major_cert_tickets_default_file() {
        let cli = Cli::parse_from(["zdctl", "major-cert-tickets"]);
        let Command::MajorCertTickets(args) = cli.command else {
            panic!("expected major-cert-tickets");
        };
        assert_eq!(args.output_file, PathBuf::from(defaults::MAJOR_CERT_FILE));
    }

    #[test]
    fn test_field_id_requires_value() {
        let result = Cli::try_parse_from(["zdctl", "solve-old-tickets", "--field-id", "42"]);
        assert!(result.is_err());

        let cli = Cli::parse_from([
            "zdctl",
            "solve-old-tickets",
            "--field-id",
            "42",
            "--field-value",
            "done",
        ]);
        let Command::SolveOldTickets(args) = cli.command else {
            panic!("expected solve-old-tickets");
        };
        assert_eq!(args.field_id, Some(42));
        assert_eq!(args.field_value.as_deref(), Some("done"));
    }
}
