use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid route: {path} {location}")]
    InvalidRoute {
        path: String,
        location: ErrorLocation,
    },

    #[error("Invalid user id: {value} {location}")]
    InvalidUserId {
        value: String,
        location: ErrorLocation,
    },

    #[error("Unknown form field: {name} {location}")]
    UnknownField {
        name: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn invalid_route<S: Into<String>>(path: S) -> Self {
        CoreError::InvalidRoute {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_user_id<S: Into<String>>(value: S) -> Self {
        CoreError::InvalidUserId {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_field<S: Into<String>>(name: S) -> Self {
        CoreError::UnknownField {
            name: name.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
