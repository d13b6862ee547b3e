//! Ticket field API operations

use crate::error::Result;
use crate::zendesk::traits::find_by_name;
use crate::zendesk::ZendeskClient;

use super::models::{CustomFieldOption, TicketField};

impl ZendeskClient {
    /// All ticket fields; every call fetches fresh
    pub async fn ticket_fields(&self) -> Result<Vec<TicketField>> {
        self.fetch_single_page("/ticket_fields.json", &[]).await
    }

    /// First ticket field with exactly the given title, or `None`
    pub async fn get_ticket_field_by_title(&self, title: &str) -> Result<Option<TicketField>> {
        Ok(find_by_name(&self.ticket_fields().await?, title))
    }

    /// Options of a custom field, following every page
    pub async fn get_ticket_field_options(&self, field_id: u64) -> Result<Vec<CustomFieldOption>> {
        let path = format!("/ticket_fields/{}/options.json", field_id);
        self.fetch_all_linked(&path).await
    }
}
