//! Search module - free-text search over tickets, users and organizations

mod api;
mod models;

pub use models::{SearchResults, SortOrder};
