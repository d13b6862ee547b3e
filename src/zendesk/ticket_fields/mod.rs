//! Ticket fields module - custom field definitions and their options

mod api;
mod commands;
mod models;

pub use commands::{field_options, run_field_options_command};
pub use models::{CustomFieldOption, TicketField};
