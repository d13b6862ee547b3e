//! zdctl - Administrative automation for Zendesk Support
//!
//! A typed, async client for the Zendesk REST API plus a CLI of
//! administrative tasks built on it.
//!
//! # Features
//!
//! - Cursor and link pagination drained into ordered collections
//! - Per-client memoization of users, organizations, groups and memberships
//! - Records that resolve relations through membership records
//! - Write-through setters that merge the server's response
//! - Task commands: membership sync, exports, bulk ticket edits
//!
//! # Example
//!
//! ```bash
//! # Export users with their organizations and groups
//! zdctl -c acme export users -o csv > people.csv
//!
//! # Apply organization changes edited in the export
//! zdctl -c acme sync-org-memberships people.csv
//!
//! # Solve tickets untouched for a year
//! zdctl -c acme solve-old-tickets --days 366
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod ui;
pub mod workday;
pub mod zendesk;

pub use cli::{Cli, Command, ExportResource, OutputFormat};
pub use error::{Result, ZendeskError};
pub use workday::run_compare_workday_command;
pub use zendesk::{
    ClientHandle, Credentials, Entity, Group, GroupMembership, NamedEntity, Organization,
    OrganizationMembership, SortOrder, Ticket, TicketField, User, ZendeskClient, ZendeskConfig,
};
