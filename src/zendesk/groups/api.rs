//! Group API operations

use crate::error::Result;
use crate::zendesk::cache::Snapshot;
use crate::zendesk::traits::{find_by_id, find_by_name};
use crate::zendesk::ZendeskClient;

use super::models::Group;

impl ZendeskClient {
    /// All groups (memoized)
    pub async fn groups(&self) -> Result<Snapshot<Group>> {
        self.inner
            .cache
            .groups
            .get_or_fetch(|| self.fetch_all_cursor::<Group>("/groups.json"))
            .await
    }

    /// Group with the given id, or `None`
    pub async fn get_group_by_id(&self, group_id: u64) -> Result<Option<Group>> {
        Ok(find_by_id(&self.groups().await?, group_id))
    }

    /// First group with exactly the given name, or `None`
    pub async fn get_group_by_name(&self, name: &str) -> Result<Option<Group>> {
        Ok(find_by_name(&self.groups().await?, name))
    }
}
