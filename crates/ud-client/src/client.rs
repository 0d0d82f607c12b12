use crate::{CacheKey, ClientError, ClientResult, QueryCache};

use std::time::{Duration, Instant};

use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use ud_config::{ApiConfig, CacheConfig};
use ud_core::{UserId, UserRecord};

/// Default freshness window when none is configured
pub const DEFAULT_FRESHNESS: Duration = Duration::from_secs(60);

/// HTTP client for the users API
#[derive(Debug)]
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
    cache: QueryCache,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API URL (e.g., "https://jsonplaceholder.typicode.com")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
            cache: QueryCache::new(DEFAULT_FRESHNESS),
        }
    }

    /// Create a client with the configured request timeout and freshness window
    pub fn from_config(api: &ApiConfig, cache: &CacheConfig) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(api.timeout())
            .build()
            .map_err(ClientError::from_reqwest)?;

        Ok(Self {
            base_url: api.base_url.trim_end_matches('/').to_string(),
            client,
            cache: QueryCache::new(cache.freshness()),
        })
    }

    /// Replace the freshness window, dropping anything already cached
    pub fn with_freshness(mut self, freshness: Duration) -> Self {
        self.cache = QueryCache::new(freshness);
        self
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// List all users
    pub async fn fetch_list(&self) -> ClientResult<Vec<UserRecord>> {
        self.fetch(CacheKey::Users).await
    }

    /// Get one user by id
    pub async fn fetch_one(&self, id: UserId) -> ClientResult<UserRecord> {
        self.fetch(CacheKey::User(id)).await
    }

    /// Drop one cached response
    pub async fn invalidate(&self, key: &CacheKey) -> bool {
        self.cache.invalidate(key).await
    }

    /// Drop every cached response
    pub async fn clear(&self) {
        self.cache.clear().await
    }

    // =========================================================================
    // Plumbing
    // =========================================================================

    /// Serve `key` from cache while fresh, otherwise fetch, decode and cache it.
    /// Only responses that decode into `T` are cached.
    async fn fetch<T: DeserializeOwned>(&self, key: CacheKey) -> ClientResult<T> {
        if let Some(value) = self.cache.get_fresh(&key, Instant::now()).await {
            debug!("Cache hit for {}", key);
            return serde_json::from_value(value).map_err(ClientError::invalid_payload);
        }

        let value = self.fetch_json(&key.path()).await?;
        let decoded = serde_json::from_value(value.clone()).map_err(|e| {
            warn!("Unexpected payload for {}: {}", key, e);
            ClientError::invalid_payload(e)
        })?;

        self.cache.insert(key, value, Instant::now()).await;
        Ok(decoded)
    }

    /// Build a request against the base URL
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Issue a GET and parse the body as JSON
    async fn fetch_json(&self, path: &str) -> ClientResult<Value> {
        let req = self.request(Method::GET, path);
        debug!("GET {}{}", self.base_url, path);

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let url = response.url().to_string();
            warn!("GET {} failed with status {}", url, status.as_u16());
            return Err(ClientError::network(status.as_u16(), url));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(ClientError::from_json)
    }
}
