use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CONFIRMATION_SECS, DEFAULT_LIST_LIMIT,
    MAX_CONFIRMATION_SECS, MAX_LIST_LIMIT, MIN_CONFIRMATION_SECS, MIN_LIST_LIMIT,
};

use std::time::Duration;

use serde::Deserialize;

/// Presentation settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// How many fetched users the list view considers
    pub list_limit: usize,
    /// Seconds before the save confirmation dismisses itself
    pub confirmation_secs: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            list_limit: DEFAULT_LIST_LIMIT,
            confirmation_secs: DEFAULT_CONFIRMATION_SECS,
        }
    }
}

impl ViewConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.list_limit < MIN_LIST_LIMIT || self.list_limit > MAX_LIST_LIMIT {
            return Err(ConfigError::view(format!(
                "view.list_limit must be {}-{}, got {}",
                MIN_LIST_LIMIT, MAX_LIST_LIMIT, self.list_limit
            )));
        }

        if self.confirmation_secs < MIN_CONFIRMATION_SECS
            || self.confirmation_secs > MAX_CONFIRMATION_SECS
        {
            return Err(ConfigError::view(format!(
                "view.confirmation_secs must be {}-{}, got {}",
                MIN_CONFIRMATION_SECS, MAX_CONFIRMATION_SECS, self.confirmation_secs
            )));
        }

        Ok(())
    }

    pub fn confirmation_delay(&self) -> Duration {
        Duration::from_secs(self.confirmation_secs)
    }
}
