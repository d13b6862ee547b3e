//! Ticket data models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::zendesk::traits::{merge_record, Entity};
use crate::zendesk::ClientHandle;

/// Value of one custom field on a ticket
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CustomFieldValue {
    pub id: u64,
    #[serde(default)]
    pub value: Value,
}

/// Support ticket
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Ticket {
    pub id: u64,
    pub url: Option<String>,
    pub subject: Option<String>,
    pub status: Option<String>,
    pub external_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub requester_id: Option<u64>,
    pub organization_id: Option<u64>,
    pub group_id: Option<u64>,
    #[serde(default)]
    pub custom_fields: Vec<CustomFieldValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    client: ClientHandle,
}

impl Entity for Ticket {
    const COLLECTION_KEY: &'static str = "tickets";

    fn id(&self) -> u64 {
        self.id
    }

    fn handle(&self) -> &ClientHandle {
        &self.client
    }

    fn attach(&mut self, handle: ClientHandle) {
        self.client = handle;
    }
}

impl Ticket {
    /// Value of a custom field, `None` if the field is absent or empty
    pub fn custom_field_value(&self, field_id: u64) -> Option<&Value> {
        self.custom_fields
            .iter()
            .find(|cf| cf.id == field_id)
            .map(|cf| &cf.value)
            .filter(|v| !v.is_null())
    }

    /// Date part (`YYYY-MM-DD`) of `updated_at`
    pub fn updated_on(&self) -> Option<&str> {
        self.updated_at.as_deref().and_then(|s| s.get(..10))
    }

    /// Apply a partial update on the server and merge the server's record
    pub async fn update(&mut self, fields: Value) -> Result<()> {
        let record = self.client.client()?.update_ticket(self.id, fields).await?;
        merge_record(self, record)
    }

    /// Set `external_id` on the server, then merge the server's record
    pub async fn set_external_id(&mut self, external_id: &str) -> Result<()> {
        self.update(serde_json::json!({ "external_id": external_id }))
            .await
    }

    /// Comments on the ticket, oldest first (not memoized)
    pub async fn comments(&self) -> Result<Vec<TicketComment>> {
        self.client.client()?.list_ticket_comments(self.id).await
    }

    /// Drop an address from the ticket's email CCs
    ///
    /// Returns the server's ticket record; the local record is left as is.
    pub async fn remove_email_cc(&self, email: &str) -> Result<Map<String, Value>> {
        let fields = serde_json::json!({
            "email_ccs": [{ "action": "delete", "user_email": email }]
        });
        self.client.client()?.update_ticket(self.id, fields).await
    }
}

/// Public reply or internal note on a ticket
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TicketComment {
    pub id: u64,
    pub author_id: Option<u64>,
    pub body: Option<String>,
    pub html_body: Option<String>,
    pub public: Option<bool>,
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    client: ClientHandle,
}

impl Entity for TicketComment {
    const COLLECTION_KEY: &'static str = "comments";

    fn id(&self) -> u64 {
        self.id
    }

    fn handle(&self) -> &ClientHandle {
        &self.client
    }

    fn attach(&mut self, handle: ClientHandle) {
        self.client = handle;
    }
}

/// One batch of the incremental ticket export
#[derive(Debug, Clone)]
pub struct IncrementalTickets {
    pub tickets: Vec<Ticket>,
    /// Cursor to resume the export from
    pub after_cursor: Option<String>,
    pub end_of_stream: bool,
}
