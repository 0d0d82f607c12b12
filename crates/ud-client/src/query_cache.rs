use crate::CacheKey;

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde_json::Value;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    fetched_at: Instant,
}

/// Successful responses keyed by request, each fresh for a fixed window.
///
/// Only successes are stored. An expired entry stays until the next insert
/// for its key replaces it.
#[derive(Debug)]
pub struct QueryCache {
    freshness: Duration,
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
}

impl QueryCache {
    pub fn new(freshness: Duration) -> Self {
        Self {
            freshness,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn freshness(&self) -> Duration {
        self.freshness
    }

    /// Cached value for `key` if it was fetched less than `freshness` before `now`
    pub async fn get_fresh(&self, key: &CacheKey, now: Instant) -> Option<Value> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;

        if now.saturating_duration_since(entry.fetched_at) < self.freshness {
            Some(entry.value.clone())
        } else {
            None
        }
    }

    pub async fn insert(&self, key: CacheKey, value: Value, fetched_at: Instant) {
        self.entries
            .write()
            .await
            .insert(key, CacheEntry { value, fetched_at });
    }

    /// Drop one entry. Returns true if it existed.
    pub async fn invalidate(&self, key: &CacheKey) -> bool {
        self.entries.write().await.remove(key).is_some()
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
