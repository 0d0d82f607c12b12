use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, MAX_MAX_LENGTH,
    MAX_MIN_LENGTH, MIN_MAX_LENGTH, MIN_MIN_LENGTH,
};

use serde::Deserialize;

/// Length bounds applied to the free-text fields of the profile form
/// (name, username, city, company name).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum number of characters
    pub min_length: usize,
    /// Maximum number of characters
    pub max_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_length < MIN_MIN_LENGTH || self.min_length > MAX_MIN_LENGTH {
            return Err(ConfigError::validation(format!(
                "validation.min_length must be {}-{}, got {}",
                MIN_MIN_LENGTH, MAX_MIN_LENGTH, self.min_length
            )));
        }

        if self.max_length < MIN_MAX_LENGTH || self.max_length > MAX_MAX_LENGTH {
            return Err(ConfigError::validation(format!(
                "validation.max_length must be {}-{}, got {}",
                MIN_MAX_LENGTH, MAX_MAX_LENGTH, self.max_length
            )));
        }

        if self.min_length > self.max_length {
            return Err(ConfigError::validation(format!(
                "validation.min_length ({}) must not exceed validation.max_length ({})",
                self.min_length, self.max_length
            )));
        }

        Ok(())
    }
}
