use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;
use ud_client::ClientError;
use ud_config::ConfigError;
use ud_core::CoreError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("{0}")]
    Client(#[from] ClientError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    Session {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// A session command that cannot run on the current screen
    #[track_caller]
    pub fn session<S: Into<String>>(message: S) -> Self {
        CliError::Session {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Short text for the session output, without source locations
    pub fn user_message(&self) -> String {
        match self {
            CliError::Client(err) => err.user_message(),
            CliError::Core(CoreError::InvalidRoute { path, .. }) => {
                format!("Unknown route: {path}")
            }
            CliError::Core(CoreError::InvalidUserId { value, .. }) => {
                format!("Invalid user id: {value}")
            }
            CliError::Core(CoreError::UnknownField { name, .. }) => {
                format!("Unknown field: {name}")
            }
            CliError::Session { message, .. } | CliError::Logger { message, .. } => {
                message.clone()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
