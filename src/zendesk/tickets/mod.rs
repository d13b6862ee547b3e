//! Tickets module - ticket listing, incremental export and bulk edits

mod api;
mod certification;
mod commands;
mod models;

pub use certification::{CertificationRequest, MAJOR_CERT_QUERY};
pub use commands::{
    cc_query, major_cert_rows, run_clean_email_ccs_command, run_major_cert_tickets_command,
    run_solve_old_tickets_command, solve_old_tickets, stale_tickets_query, SolveSummary,
};
pub use models::{CustomFieldValue, IncrementalTickets, Ticket, TicketComment};
