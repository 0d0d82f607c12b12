use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors that can occur while fetching users
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP {status} from {url} {location}")]
    Network {
        status: u16,
        url: String,
        location: ErrorLocation,
    },

    #[error("HTTP request error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("JSON parse error: {message} {location}")]
    Parse {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid payload: {message} {location}")]
    InvalidPayload {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Non-success HTTP status
    #[track_caller]
    pub fn network<S: Into<String>>(status: u16, url: S) -> Self {
        ClientError::Network {
            status,
            url: url.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Transport {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Body was not JSON
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Parse {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// JSON that does not have the expected shape
    #[track_caller]
    pub fn invalid_payload(err: serde_json::Error) -> Self {
        ClientError::InvalidPayload {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Short text suitable for showing in place of the content
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Network { status, .. } => {
                format!("Failed to load data: server responded with status {status}.")
            }
            ClientError::Transport { message, .. } => {
                format!("Failed to load data: {message}")
            }
            ClientError::Parse { .. } | ClientError::InvalidPayload { .. } => {
                "Data not loaded or has an invalid format.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
