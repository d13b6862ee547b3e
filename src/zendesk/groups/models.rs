//! Group data models

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::zendesk::traits::{Entity, NamedEntity};
use crate::zendesk::{ClientHandle, User};

/// Agent group
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Group {
    pub id: u64,
    pub url: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub default: Option<bool>,
    pub deleted: Option<bool>,
    pub is_public: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    client: ClientHandle,
}

impl Entity for Group {
    const COLLECTION_KEY: &'static str = "groups";

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

impl NamedEntity for Group {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Group {
    /// Users with a membership in this group, in user collection order
    pub async fn users(&self) -> Result<Vec<User>> {
        let client = self.client.client()?;
        let user_ids: HashSet<u64> = client
            .list_memberships_for_group(self.id)
            .await?
            .iter()
            .map(|m| m.user_id)
            .collect();
        let users = client.users().await?;
        Ok(users
            .iter()
            .filter(|u| user_ids.contains(&u.id))
            .map(|r| r.as_ref().clone())
            .collect())
    }
}
