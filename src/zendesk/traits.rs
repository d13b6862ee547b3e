//! Common traits for Zendesk records

use std::borrow::Borrow;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Result, ZendeskError};
use crate::zendesk::ClientHandle;

/// A typed record fetched from the Zendesk API
///
/// Every record carries a weak handle to the client that fetched it, used
/// to resolve relations and to perform writes.
pub trait Entity: DeserializeOwned + Serialize + Clone {
    /// Name of the array holding records in list responses (e.g. `users`)
    const COLLECTION_KEY: &'static str;

    /// Immutable record id
    fn id(&self) -> u64;

    /// Handle to the owning client
    fn handle(&self) -> &ClientHandle;

    /// Bind the record to a client after deserialization
    fn attach(&mut self, handle: ClientHandle);
}

/// Records that can be looked up by a display name
pub trait NamedEntity: Entity {
    fn name(&self) -> Option<&str>;

    /// Check for an exact name match
    fn matches_name(&self, name: &str) -> bool {
        self.name() == Some(name)
    }
}

/// First record with the given id, cloned out of the collection
///
/// Accepts plain records as well as the shared slots of a cached snapshot.
pub fn find_by_id<T: Entity, R: Borrow<T>>(records: &[R], id: u64) -> Option<T> {
    records
        .iter()
        .map(Borrow::<T>::borrow)
        .find(|r| r.id() == id)
        .cloned()
}

/// First record with exactly the given name
pub fn find_by_name<T: NamedEntity, R: Borrow<T>>(records: &[R], name: &str) -> Option<T> {
    records
        .iter()
        .map(Borrow::<T>::borrow)
        .find(|r| r.matches_name(name))
        .cloned()
}

/// Deserialize raw JSON records and bind each to the client
pub(crate) fn attach_all<T: Entity>(raw: Vec<Value>, handle: &ClientHandle) -> Result<Vec<T>> {
    raw.into_iter()
        .map(|value| {
            let mut record: T = serde_json::from_value(value)?;
            record.attach(handle.clone());
            Ok(record)
        })
        .collect()
}

/// Overlay a server response onto a local record
///
/// Keys present in `update` replace local values, keys absent from it are
/// kept. The record id never changes.
pub(crate) fn merge_record<T: Entity>(record: &mut T, update: Map<String, Value>) -> Result<()> {
    let id = record.id();
    let handle = record.handle().clone();

    let Value::Object(mut fields) = serde_json::to_value(&*record)? else {
        return Err(ZendeskError::Json(format!(
            "{} record {} did not serialize to an object",
            T::COLLECTION_KEY,
            id
        )));
    };
    for (key, value) in update {
        if key != "id" {
            fields.insert(key, value);
        }
    }

    let mut merged: T = serde_json::from_value(Value::Object(fields))?;
    merged.attach(handle);
    *record = merged;
    Ok(())
}
