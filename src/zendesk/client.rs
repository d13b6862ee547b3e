//! Zendesk HTTP client and request primitives

use std::sync::{Arc, Weak};
use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use log::debug;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::config::api;
use crate::error::{Result, ZendeskError};
use crate::zendesk::cache::Collections;

/// Connection settings for one set of Zendesk credentials
#[derive(Debug, Clone)]
pub struct ZendeskConfig {
    /// API root, e.g. `https://acme.zendesk.com/api/v2`
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl ZendeskConfig {
    /// Config for a hosted Zendesk account (`https://{company}.zendesk.com/api/v2`)
    pub fn for_company(company: &str, username: &str, password: &str) -> Result<Self> {
        let company = company.trim();
        if company.is_empty() || company.contains('/') || company.contains(':') {
            return Err(ZendeskError::Config(format!(
                "Invalid Zendesk company '{}': expected the subdomain only",
                company
            )));
        }
        let base_url = format!("https://{}.{}{}", company, api::HOST_SUFFIX, api::BASE_PATH);
        Self::with_base_url(&base_url, username, password)
    }

    /// Config with an explicit API root (mock servers, proxies)
    pub fn with_base_url(base_url: &str, username: &str, password: &str) -> Result<Self> {
        if !base_url.starts_with("https://") && !base_url.starts_with("http://") {
            return Err(ZendeskError::Config(format!(
                "Invalid base URL '{}': must start with http:// or https://",
                base_url
            )));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// State shared by a client and every handle to it
pub(crate) struct ClientInner {
    http: Client,
    base_url: String,
    pub(crate) cache: Collections,
}

/// Zendesk API client
///
/// Cloning is cheap and every clone shares the same connection pool and
/// memoized collections. Records fetched through the client keep a weak
/// [`ClientHandle`] back to it.
#[derive(Clone)]
pub struct ZendeskClient {
    pub(crate) inner: Arc<ClientInner>,
}

impl ZendeskClient {
    /// Create a new client. Credentials are fixed for its lifetime.
    pub fn new(config: ZendeskConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let credentials = BASE64.encode(format!("{}:{}", config.username, config.password));
        let mut auth_value = header::HeaderValue::from_str(&format!("Basic {}", credentials))
            .map_err(|_| ZendeskError::Config("Invalid characters in credentials".to_string()))?;
        auth_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth_value);

        let http = Client::builder()
            .default_headers(headers)
            .pool_idle_timeout(Duration::from_secs(90))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ZendeskError::Config(format!("Failed to build HTTP client: {}", e)))?;

        debug!("Zendesk base url is {}", config.base_url);

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url: config.base_url,
                cache: Collections::default(),
            }),
        })
    }

    /// API root all endpoint paths are appended to
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Build an absolute URL for an API path such as `/users.json`
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }

    /// Weak handle for records fetched by this client
    pub(crate) fn handle(&self) -> ClientHandle {
        ClientHandle(Arc::downgrade(&self.inner))
    }

    /// GET a URL and parse the JSON body
    pub(crate) async fn get<T>(&self, url: &str, params: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = with_query(url, params);
        debug!("GET {}", url);
        let response = self.inner.http.get(&url).send().await?;
        parse_response(response).await
    }

    /// PUT a JSON body and parse the JSON response
    pub(crate) async fn put<T>(&self, url: &str, body: &Value) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!("PUT {} / {}", url, body);
        let response = self.inner.http.put(url).json(body).send().await?;
        parse_response(response).await
    }

    /// POST a JSON body and parse the JSON response
    pub(crate) async fn post<T>(&self, url: &str, body: &Value) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!("POST {} / {}", url, body);
        let response = self.inner.http.post(url).json(body).send().await?;
        parse_response(response).await
    }

    /// DELETE a URL; the response body is discarded
    pub(crate) async fn delete(&self, url: &str) -> Result<()> {
        debug!("DELETE {}", url);
        let response = self.inner.http.delete(url).send().await?;
        check_status(response).await?;
        Ok(())
    }

    /// PUT `{"<key>": fields}` and return the record echoed back under `key`
    pub(crate) async fn update_record(
        &self,
        path: &str,
        key: &str,
        fields: Value,
    ) -> Result<Map<String, Value>> {
        let mut body = Map::new();
        body.insert(key.to_string(), fields);
        let mut response: Value = self.put(&self.url(path), &Value::Object(body)).await?;

        match response.get_mut(key).map(Value::take) {
            Some(Value::Object(record)) => Ok(record),
            _ => Err(ZendeskError::Json(format!(
                "Update response for {} has no '{}' object",
                path, key
            ))),
        }
    }
}

/// Weak reference from a fetched record to the client that fetched it
///
/// Never keeps the client alive. Records built without a client (for
/// example deserialized directly in tests) hold an empty handle.
#[derive(Clone, Default)]
pub struct ClientHandle(Weak<ClientInner>);

impl ClientHandle {
    /// Resolve the owning client, failing if it has been dropped
    pub fn client(&self) -> Result<ZendeskClient> {
        self.0
            .upgrade()
            .map(|inner| ZendeskClient { inner })
            .ok_or(ZendeskError::ClientDropped)
    }
}

impl std::fmt::Debug for ClientHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientHandle")
            .field("attached", &(self.0.strong_count() > 0))
            .finish()
    }
}

/// Append URL-encoded query parameters, respecting an existing query string
fn with_query(url: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    let query: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect();
    let separator = if url.contains('?') { "&" } else { "?" };
    format!("{}{}{}", url, separator, query.join("&"))
}

/// Fail with `ZendeskError::Http` on any non-2xx status
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ZendeskError::Http {
        status: status.as_u16(),
        body,
    })
}

async fn parse_response<T>(response: reqwest::Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let response = check_status(response).await?;
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
impl ZendeskClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        let config = ZendeskConfig::with_base_url(base_url, "agent@example.com", "secret")
            .expect("mock server uri is a valid base url");
        Self::new(config).expect("test client builds")
    }
}
