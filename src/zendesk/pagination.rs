//! Cursor and link pagination over Zendesk list endpoints
//!
//! Zendesk exposes two pagination styles:
//!
//! - cursor: requests carry `page[size]` (and `page[after]` after the first
//!   page); responses carry `meta.has_more` and `meta.after_cursor`
//! - link: responses carry `next_page`, a complete URL or `null`
//!
//! Both drain the endpoint sequentially into one ordered list. A failed page
//! aborts the whole fetch and nothing is returned.

use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::api;
use crate::error::{Result, ZendeskError};
use crate::zendesk::traits::{attach_all, Entity};
use crate::zendesk::ZendeskClient;

/// Cursor metadata (`meta` object) of a cursor-paginated response
#[derive(Deserialize, Debug, Default, Clone)]
pub struct CursorMeta {
    #[serde(default)]
    pub has_more: bool,
    pub after_cursor: Option<String>,
    pub before_cursor: Option<String>,
}

/// One page of any list response
#[derive(Deserialize, Debug)]
pub struct Page {
    #[serde(default)]
    pub meta: Option<CursorMeta>,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
    /// Everything else, including the record array
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

impl Page {
    /// Remove and return the raw records stored under `key`
    ///
    /// A missing or null array is an empty page.
    pub fn take_array(&mut self, key: &str) -> Result<Vec<Value>> {
        match self.body.remove(key) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(ZendeskError::Json(format!(
                "Expected '{}' to be an array, got {}",
                key, other
            ))),
        }
    }

    /// Cursor for the next request, if the server reports more data
    pub fn next_cursor(&self) -> Option<&str> {
        match &self.meta {
            Some(CursorMeta {
                has_more: true,
                after_cursor: Some(cursor),
                ..
            }) => Some(cursor.as_str()),
            _ => None,
        }
    }
}

impl ZendeskClient {
    /// Fetch one page and bind its records
    async fn fetch_page<T: Entity>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<(Page, Vec<T>)> {
        let mut page: Page = self.get(url, params).await?;
        let raw = page.take_array(T::COLLECTION_KEY)?;
        let records = attach_all(raw, &self.handle())?;
        Ok((page, records))
    }

    /// Drain a cursor-paginated endpoint
    ///
    /// A response without `meta` is treated as the last page.
    pub(crate) async fn fetch_all_cursor<T: Entity>(&self, path: &str) -> Result<Vec<T>> {
        let url = self.url(path);
        let mut params = vec![("page[size]", api::DEFAULT_PAGE_SIZE.to_string())];
        let mut all_records = Vec::new();
        let mut page_num = 1;

        loop {
            let (page, records) = self.fetch_page::<T>(&url, &params).await?;
            debug!(
                "{} page {} returned {} records",
                T::COLLECTION_KEY,
                page_num,
                records.len()
            );
            all_records.extend(records);

            let Some(cursor) = page.next_cursor() else {
                break;
            };
            let cursor = cursor.to_string();
            params.retain(|(k, _)| *k != "page[after]");
            params.push(("page[after]", cursor));
            page_num += 1;
        }

        debug!(
            "Fetched {} {} in {} page(s)",
            all_records.len(),
            T::COLLECTION_KEY,
            page_num
        );
        Ok(all_records)
    }

    /// Drain a link-paginated endpoint by following `next_page`
    pub(crate) async fn fetch_all_linked<T: Entity>(&self, path: &str) -> Result<Vec<T>> {
        let mut next_url = Some(self.url(path));
        let mut all_records = Vec::new();
        let mut page_num = 0;

        while let Some(url) = next_url.take() {
            page_num += 1;
            let (page, records) = self.fetch_page::<T>(&url, &[]).await?;
            debug!(
                "{} page {} returned {} records",
                T::COLLECTION_KEY,
                page_num,
                records.len()
            );
            all_records.extend(records);
            next_url = page.next_page;
        }

        Ok(all_records)
    }

    /// Fetch exactly one page, ignoring any pagination metadata
    pub(crate) async fn fetch_single_page<T: Entity>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let (_, records) = self.fetch_page::<T>(&self.url(path), params).await?;
        Ok(records)
    }
}
