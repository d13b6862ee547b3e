//! Per-client memoization of unfiltered collections

use std::future::Future;
use std::sync::Arc;

use log::debug;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::zendesk::traits::Entity;
use crate::zendesk::{Group, GroupMembership, Organization, OrganizationMembership, User};

/// A cached collection: one shared slot per record
///
/// Readers keep their snapshot for as long as they hold it. A write swaps a
/// single slot, so records are never copied to update the cache.
pub type Snapshot<T> = Arc<Vec<Arc<T>>>;

enum CacheState<T> {
    Unfetched,
    Fetched(Snapshot<T>),
}

/// Memoized collection of one resource
///
/// The first successful fetch is kept for the lifetime of the client. A
/// failed fetch leaves the cache unfetched. The lock is held while
/// fetching, so concurrent callers share a single fetch.
pub struct ResourceCache<T> {
    state: Mutex<CacheState<T>>,
}

impl<T> Default for ResourceCache<T> {
    fn default() -> Self {
        Self {
            state: Mutex::new(CacheState::Unfetched),
        }
    }
}

impl<T: Entity> ResourceCache<T> {
    /// Return the cached collection, running `fetch` on first use
    pub async fn get_or_fetch<F, Fut>(&self, fetch: F) -> Result<Snapshot<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        let mut state = self.state.lock().await;
        if let CacheState::Fetched(records) = &*state {
            return Ok(Arc::clone(records));
        }

        let records: Snapshot<T> =
            Arc::new(fetch().await?.into_iter().map(Arc::new).collect());
        debug!("Cached {} {}", records.len(), T::COLLECTION_KEY);
        *state = CacheState::Fetched(Arc::clone(&records));
        Ok(records)
    }

    /// Whether the collection has been fetched
    pub async fn is_fetched(&self) -> bool {
        matches!(&*self.state.lock().await, CacheState::Fetched(_))
    }

    /// Replace the cached record with the same id, if cached
    ///
    /// Callers holding an earlier snapshot keep it. Other records stay
    /// shared between the old and the new snapshot.
    pub async fn replace(&self, record: &T) {
        let mut state = self.state.lock().await;
        let CacheState::Fetched(records) = &mut *state else {
            return;
        };
        let Some(index) = records.iter().position(|r| r.id() == record.id()) else {
            return;
        };
        Arc::make_mut(records)[index] = Arc::new(record.clone());
    }
}

/// The memoized collections owned by one client
#[derive(Default)]
pub(crate) struct Collections {
    pub users: ResourceCache<User>,
    pub organizations: ResourceCache<Organization>,
    pub groups: ResourceCache<Group>,
    pub group_memberships: ResourceCache<GroupMembership>,
    pub organization_memberships: ResourceCache<OrganizationMembership>,
}
