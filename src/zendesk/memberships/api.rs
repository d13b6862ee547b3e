//! Membership API operations

use log::debug;
use serde_json::Value;

use crate::error::{Result, ZendeskError};
use crate::zendesk::cache::Snapshot;
use crate::zendesk::traits::{attach_all, Entity};
use crate::zendesk::ZendeskClient;

use super::models::{GroupMembership, OrganizationMembership};

impl ZendeskClient {
    /// All group memberships (memoized)
    pub async fn group_memberships(&self) -> Result<Snapshot<GroupMembership>> {
        self.inner
            .cache
            .group_memberships
            .get_or_fetch(|| self.fetch_all_cursor::<GroupMembership>("/group_memberships.json"))
            .await
    }

    /// All organization memberships (memoized)
    pub async fn organization_memberships(&self) -> Result<Snapshot<OrganizationMembership>> {
        self.inner
            .cache
            .organization_memberships
            .get_or_fetch(|| {
                self.fetch_all_cursor::<OrganizationMembership>("/organization_memberships.json")
            })
            .await
    }

    /// Group memberships belonging to a user
    pub async fn list_group_memberships_for_user(
        &self,
        user_id: u64,
    ) -> Result<Vec<GroupMembership>> {
        Ok(self
            .group_memberships()
            .await?
            .iter()
            .filter(|m| m.user_id == user_id)
            .map(|m| m.as_ref().clone())
            .collect())
    }

    /// Memberships of a group
    pub async fn list_memberships_for_group(&self, group_id: u64) -> Result<Vec<GroupMembership>> {
        Ok(self
            .group_memberships()
            .await?
            .iter()
            .filter(|m| m.group_id == group_id)
            .map(|m| m.as_ref().clone())
            .collect())
    }

    /// Memberships of an organization
    pub async fn list_memberships_for_org(
        &self,
        organization_id: u64,
    ) -> Result<Vec<OrganizationMembership>> {
        Ok(self
            .organization_memberships()
            .await?
            .iter()
            .filter(|m| m.organization_id == organization_id)
            .map(|m| m.as_ref().clone())
            .collect())
    }

    /// Organization memberships belonging to a user
    pub async fn list_org_memberships_for_user(
        &self,
        user_id: u64,
    ) -> Result<Vec<OrganizationMembership>> {
        Ok(self
            .organization_memberships()
            .await?
            .iter()
            .filter(|m| m.user_id == user_id)
            .map(|m| m.as_ref().clone())
            .collect())
    }

    /// Add a user to an organization
    ///
    /// The memoized membership collection is not updated.
    pub async fn create_organization_membership(
        &self,
        user_id: u64,
        organization_id: u64,
    ) -> Result<OrganizationMembership> {
        let body = serde_json::json!({
            "organization_membership": {
                "organization_id": organization_id,
                "user_id": user_id,
            }
        });
        let mut response: Value = self
            .post(&self.url("/organization_memberships.json"), &body)
            .await?;

        let created = response
            .get_mut("organization_membership")
            .map(Value::take)
            .ok_or_else(|| {
                ZendeskError::Json("Create response has no 'organization_membership'".to_string())
            })?;
        let membership = attach_all::<OrganizationMembership>(vec![created], &self.handle())?
            .remove(0);

        debug!(
            "Created organization membership {} (user {}, organization {})",
            membership.id(),
            user_id,
            organization_id
        );
        Ok(membership)
    }

    /// Remove a user from an organization
    ///
    /// The memoized membership collection is not updated.
    pub async fn unassign_organization(&self, user_id: u64, organization_id: u64) -> Result<()> {
        let path = format!("/users/{}/organizations/{}.json", user_id, organization_id);
        self.delete(&self.url(&path)).await
    }
}
