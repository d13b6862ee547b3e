//! Organization API operations

use serde_json::{Map, Value};

use crate::error::Result;
use crate::zendesk::cache::Snapshot;
use crate::zendesk::traits::{find_by_id, find_by_name};
use crate::zendesk::ZendeskClient;

use super::models::Organization;

impl ZendeskClient {
    /// All organizations (memoized)
    pub async fn organizations(&self) -> Result<Snapshot<Organization>> {
        self.inner
            .cache
            .organizations
            .get_or_fetch(|| self.fetch_all_cursor::<Organization>("/organizations.json"))
            .await
    }

    /// Organization with the given id, or `None`
    pub async fn get_organization_by_id(&self, organization_id: u64) -> Result<Option<Organization>> {
        Ok(find_by_id(&self.organizations().await?, organization_id))
    }

    /// First organization with exactly the given name, or `None`
    pub async fn get_organization_by_name(&self, name: &str) -> Result<Option<Organization>> {
        Ok(find_by_name(&self.organizations().await?, name))
    }

    /// Partially update an organization and return the server's record
    pub async fn update_organization(
        &self,
        organization_id: u64,
        fields: Value,
    ) -> Result<Map<String, Value>> {
        let path = format!("/organizations/{}.json", organization_id);
        self.update_record(&path, "organization", fields).await
    }
}
