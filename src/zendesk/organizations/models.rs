//! Organization data models

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::zendesk::traits::{merge_record, Entity, NamedEntity};
use crate::zendesk::{ClientHandle, OrganizationMembership, User};

/// Customer organization
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Organization {
    pub id: u64,
    pub url: Option<String>,
    pub name: Option<String>,
    pub external_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub domain_names: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    client: ClientHandle,
}

impl Entity for Organization {
    const COLLECTION_KEY: &'static str = "organizations";

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

impl NamedEntity for Organization {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl std::fmt::Display for Organization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name.as_deref().unwrap_or(""))
    }
}

impl Organization {
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Memberships pointing at this organization
    pub async fn memberships(&self) -> Result<Vec<OrganizationMembership>> {
        self.client.client()?.list_memberships_for_org(self.id).await
    }

    /// Members of this organization, in user collection order
    pub async fn users(&self) -> Result<Vec<User>> {
        let client = self.client.client()?;
        let user_ids: HashSet<u64> = self.memberships().await?.iter().map(|m| m.user_id).collect();
        let users = client.users().await?;
        Ok(users
            .iter()
            .filter(|u| user_ids.contains(&u.id))
            .map(|r| r.as_ref().clone())
            .collect())
    }

    /// Rename the organization
    ///
    /// The local record changes only after the server accepts the update,
    /// and then reflects the server's response.
    pub async fn set_name(&mut self, name: &str) -> Result<()> {
        let client = self.client.client()?;
        let record = client
            .update_organization(self.id, serde_json::json!({ "name": name }))
            .await?;
        merge_record(self, record)?;
        client.inner.cache.organizations.replace(self).await;
        Ok(())
    }
}
