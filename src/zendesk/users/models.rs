//! User and identity data models

use std::collections::HashSet;

use chrono::{DateTime, FixedOffset};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::api;
use crate::error::Result;
use crate::zendesk::traits::{merge_record, Entity, NamedEntity};
use crate::zendesk::{ClientHandle, Group, Organization, OrganizationMembership};

/// End user, agent or admin
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct User {
    pub id: u64,
    pub url: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub active: Option<bool>,
    pub verified: Option<bool>,
    pub role: Option<String>,
    pub external_id: Option<String>,
    /// Raw ISO-8601 timestamp, parsed by `last_login_at()`
    pub last_login_at: Option<String>,
    pub organization_id: Option<u64>,
    pub restricted_agent: Option<bool>,
    pub shared: Option<bool>,
    pub suspended: Option<bool>,
    pub ticket_restriction: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    client: ClientHandle,
}

impl Entity for User {
    const COLLECTION_KEY: &'static str = "users";

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

impl NamedEntity for User {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name.as_deref().unwrap_or(""))
    }
}

impl User {
    /// Parsed `last_login_at`; `None` if never logged in or unparseable
    pub fn last_login_at(&self) -> Option<DateTime<FixedOffset>> {
        self.last_login_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    }

    pub fn is_agent(&self) -> bool {
        self.role.as_deref() == Some("agent")
    }

    /// Agent whose ticket access is restricted
    pub fn is_restricted_agent(&self) -> bool {
        self.is_agent() && self.restricted_agent.unwrap_or(false)
    }

    /// Identities of this user, fetched fresh on every call
    pub async fn identities(&self) -> Result<Vec<UserIdentity>> {
        self.client.client()?.list_user_identities(self.id).await
    }

    /// Every email address on the user's identities
    pub async fn emails(&self) -> Result<Vec<String>> {
        Ok(self
            .identities()
            .await?
            .into_iter()
            .filter(UserIdentity::is_email)
            .filter_map(|i| i.value)
            .collect())
    }

    /// Organizations the user is a member of, in organization collection order
    pub async fn organizations(&self) -> Result<Vec<Organization>> {
        let client = self.client.client()?;
        let org_ids: HashSet<u64> = client
            .list_org_memberships_for_user(self.id)
            .await?
            .iter()
            .map(|m| m.organization_id)
            .collect();
        let organizations = client.organizations().await?;
        Ok(organizations
            .iter()
            .filter(|o| org_ids.contains(&o.id))
            .map(|r| r.as_ref().clone())
            .collect())
    }

    /// Groups the user is a member of, in group collection order
    pub async fn groups(&self) -> Result<Vec<Group>> {
        let client = self.client.client()?;
        let group_ids: HashSet<u64> = client
            .list_group_memberships_for_user(self.id)
            .await?
            .iter()
            .map(|m| m.group_id)
            .collect();
        let groups = client.groups().await?;
        Ok(groups
            .iter()
            .filter(|g| group_ids.contains(&g.id))
            .map(|r| r.as_ref().clone())
            .collect())
    }

    /// Set `external_id` on the server, then merge the server's record
    pub async fn set_external_id(&mut self, external_id: &str) -> Result<()> {
        self.write_through(serde_json::json!({ "external_id": external_id }))
            .await
    }

    /// Set `ticket_restriction` on the server, then merge the server's record
    ///
    /// Values outside `assigned`, `groups`, `organization`, `requested` (or
    /// `None`) are ignored without a request and without an error.
    pub async fn set_ticket_restriction(&mut self, restriction: Option<&str>) -> Result<()> {
        if let Some(value) = restriction {
            if !api::TICKET_RESTRICTIONS.contains(&value) {
                debug!(
                    "Ignoring ticket_restriction '{}' for user {}: not an accepted value",
                    value, self.id
                );
                return Ok(());
            }
        }
        self.write_through(serde_json::json!({ "ticket_restriction": restriction }))
            .await
    }

    /// Add this user to an organization
    pub async fn add_org_membership(
        &self,
        organization: &Organization,
    ) -> Result<OrganizationMembership> {
        self.client
            .client()?
            .create_organization_membership(self.id, organization.id)
            .await
    }

    /// Remove this user from an organization
    pub async fn unassign_organization(&self, organization: &Organization) -> Result<()> {
        self.client
            .client()?
            .unassign_organization(self.id, organization.id)
            .await
    }

    async fn write_through(&mut self, fields: Value) -> Result<()> {
        let client = self.client.client()?;
        let record = client.update_user(self.id, fields).await?;
        merge_record(self, record)?;
        client.inner.cache.users.replace(self).await;
        Ok(())
    }
}

/// One identity (email, phone, social account) of a user
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UserIdentity {
    pub id: u64,
    pub url: Option<String>,
    pub user_id: Option<u64>,
    #[serde(rename = "type")]
    pub identity_type: Option<String>,
    pub value: Option<String>,
    pub verified: Option<bool>,
    pub primary: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    client: ClientHandle,
}

impl UserIdentity {
    pub fn is_email(&self) -> bool {
        self.identity_type.as_deref() == Some("email")
    }
}

impl Entity for UserIdentity {
    const COLLECTION_KEY: &'static str = "identities";

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
