//! Search API operations

use log::debug;

use crate::error::Result;
use crate::zendesk::traits::attach_all;
use crate::zendesk::{Ticket, ZendeskClient};

use super::models::{SearchResults, SortOrder};

impl ZendeskClient {
    /// Free-text search; returns the first page only
    pub async fn search(
        &self,
        query: &str,
        sort_by: Option<&str>,
        sort_order: SortOrder,
    ) -> Result<SearchResults> {
        let mut params = vec![
            ("query", query.to_string()),
            ("sort_order", sort_order.to_string()),
        ];
        if let Some(sort_by) = sort_by {
            params.push(("sort_by", sort_by.to_string()));
        }

        let results: SearchResults = self.get(&self.url("/search.json"), &params).await?;
        debug!(
            "Search '{}' returned {} of {} results",
            query,
            results.results.len(),
            results.count.unwrap_or_default()
        );
        Ok(results)
    }

    /// Tickets on the first page of a search, bound to this client
    pub async fn search_tickets(
        &self,
        query: &str,
        sort_by: Option<&str>,
        sort_order: SortOrder,
    ) -> Result<Vec<Ticket>> {
        let results = self.search(query, sort_by, sort_order).await?;
        let raw = results.of_type("ticket").cloned().collect();
        attach_all(raw, &self.handle())
    }
}
