use crate::{ConfigError, ConfigErrorResult, DEFAULT_FRESHNESS_SECS, MAX_FRESHNESS_SECS};

use std::time::Duration;

use serde::Deserialize;

/// Fetch cache settings.
///
/// A successful response stays fresh for `freshness_secs`; requests for the
/// same key inside that window are answered from memory. Zero disables reuse.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub freshness_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            freshness_secs: DEFAULT_FRESHNESS_SECS,
        }
    }
}

impl CacheConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.freshness_secs > MAX_FRESHNESS_SECS {
            return Err(ConfigError::config(format!(
                "cache.freshness_secs must be 0-{}, got {}",
                MAX_FRESHNESS_SECS, self.freshness_secs
            )));
        }

        Ok(())
    }

    pub fn freshness(&self) -> Duration {
        Duration::from_secs(self.freshness_secs)
    }
}
