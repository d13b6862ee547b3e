//! Group and organization membership data models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::zendesk::traits::Entity;
use crate::zendesk::ClientHandle;

/// Link between a user (agent) and a group
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GroupMembership {
    pub id: u64,
    pub url: Option<String>,
    pub user_id: u64,
    pub group_id: u64,
    pub default: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    client: ClientHandle,
}

impl Entity for GroupMembership {
    const COLLECTION_KEY: &'static str = "group_memberships";

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

/// Link between a user and an organization
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OrganizationMembership {
    pub id: u64,
    pub url: Option<String>,
    pub user_id: u64,
    pub organization_id: u64,
    pub organization_name: Option<String>,
    pub default: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    client: ClientHandle,
}

impl OrganizationMembership {
    /// Whether this is the user's default organization (null is false)
    pub fn is_default(&self) -> bool {
        self.default.unwrap_or(false)
    }
}

impl Entity for OrganizationMembership {
    const COLLECTION_KEY: &'static str = "organization_memberships";

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
