//! Ticket field data models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::zendesk::traits::{Entity, NamedEntity};
use crate::zendesk::ClientHandle;

/// One selectable option of a drop-down or multi-select field
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CustomFieldOption {
    pub id: u64,
    pub url: Option<String>,
    pub name: Option<String>,
    pub value: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    client: ClientHandle,
}

impl Entity for CustomFieldOption {
    const COLLECTION_KEY: &'static str = "custom_field_options";

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

impl NamedEntity for CustomFieldOption {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// System or custom ticket field definition
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TicketField {
    pub id: u64,
    pub url: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    pub active: Option<bool>,
    pub custom_field_options: Option<Vec<CustomFieldOption>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    client: ClientHandle,
}

impl Entity for TicketField {
    const COLLECTION_KEY: &'static str = "ticket_fields";

    fn id(&self) -> u64 {
        self.id
    }

    fn handle(&self) -> &ClientHandle {
        &self.client
    }

    fn attach(&mut self, handle: ClientHandle) {
        for option in self.custom_field_options.iter_mut().flatten() {
            option.attach(handle.clone());
        }
        self.client = handle;
    }
}

/// Ticket fields are looked up by title
impl NamedEntity for TicketField {
    fn name(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl TicketField {
    /// Options embedded in the field definition; empty for free-form fields
    pub fn options(&self) -> &[CustomFieldOption] {
        self.custom_field_options.as_deref().unwrap_or_default()
    }
}
