use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, CacheConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, ValidationConfig, ViewConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub cache: CacheConfig,
    pub view: ViewConfig,
    pub validation: ValidationConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for UD_CONFIG_DIR env var, else use ./.ud/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply UD_* environment variable overrides
    ///
    /// The config directory is never created. Does NOT validate - call
    /// validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: UD_CONFIG_DIR env var > ./.ud/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.cache.validate()?;
        self.view.validate()?;
        self.validation.validate()?;

        Ok(())
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout {}s)",
            self.api.base_url, self.api.timeout_secs
        );
        info!("  cache: freshness={}s", self.cache.freshness_secs);
        info!(
            "  view: list_limit={}, confirmation={}s",
            self.view.list_limit, self.view.confirmation_secs
        );
        info!(
            "  validation: length {}-{}",
            self.validation.min_length, self.validation.max_length
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("UD_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_parse("UD_API_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Cache
        Self::apply_env_parse("UD_CACHE_FRESHNESS_SECS", &mut self.cache.freshness_secs);

        // View
        Self::apply_env_parse("UD_VIEW_LIST_LIMIT", &mut self.view.list_limit);
        Self::apply_env_parse(
            "UD_VIEW_CONFIRMATION_SECS",
            &mut self.view.confirmation_secs,
        );

        // Validation
        Self::apply_env_parse(
            "UD_VALIDATION_MIN_LENGTH",
            &mut self.validation.min_length,
        );
        Self::apply_env_parse(
            "UD_VALIDATION_MAX_LENGTH",
            &mut self.validation.max_length,
        );

        // Logging
        Self::apply_env_parse("UD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("UD_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("UD_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
