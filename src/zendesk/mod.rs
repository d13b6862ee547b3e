//! Zendesk API client module
//!
//! This module provides a client for the Zendesk Support REST API: the
//! transport, both pagination styles, memoized collections and typed records
//! that resolve their relations and write changes back through the client.

mod cache;
mod client;
mod credentials;
pub mod groups;
pub mod memberships;
pub mod organizations;
mod pagination;
pub mod search;
pub mod ticket_fields;
pub mod tickets;
pub mod traits;
pub mod users;

pub use cache::{ResourceCache, Snapshot};
pub use client::{ClientHandle, ZendeskClient, ZendeskConfig};
pub use credentials::Credentials;
pub use groups::{run_export_groups_command, run_group_members_command, Group};
pub use memberships::{run_export_org_memberships_command, GroupMembership, OrganizationMembership};
pub use organizations::{
    run_rename_orgs_command, run_sync_org_memberships_command, Organization,
};
pub use pagination::{CursorMeta, Page};
pub use search::{SearchResults, SortOrder};
pub use ticket_fields::{run_field_options_command, CustomFieldOption, TicketField};
pub use tickets::{
    run_clean_email_ccs_command, run_major_cert_tickets_command, run_solve_old_tickets_command,
    CertificationRequest, CustomFieldValue, IncrementalTickets, Ticket, TicketComment,
};
pub use traits::{find_by_id, find_by_name, Entity, NamedEntity};
pub use users::{
    run_export_users_command, run_update_agents_command, run_update_external_ids_command, User,
    UserIdentity,
};
