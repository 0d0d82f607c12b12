mod api_config;
mod cache_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod validation_config;
mod view_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use cache_config::CacheConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use validation_config::ValidationConfig;
pub use view_config::ViewConfig;

const CONFIG_DIR_ENV: &str = "UD_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".ud";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 120;

const DEFAULT_FRESHNESS_SECS: u64 = 60;
const MAX_FRESHNESS_SECS: u64 = 3600;

const DEFAULT_LIST_LIMIT: usize = 6;
const MIN_LIST_LIMIT: usize = 1;
const MAX_LIST_LIMIT: usize = 100;

const DEFAULT_CONFIRMATION_SECS: u64 = 4;
const MIN_CONFIRMATION_SECS: u64 = 1;
const MAX_CONFIRMATION_SECS: u64 = 60;

const DEFAULT_MIN_LENGTH: usize = 2;
const MIN_MIN_LENGTH: usize = 1;
const MAX_MIN_LENGTH: usize = 64;
const DEFAULT_MAX_LENGTH: usize = 64;
const MIN_MAX_LENGTH: usize = 2;
const MAX_MAX_LENGTH: usize = 1024;

const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
