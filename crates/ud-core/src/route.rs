use crate::{CoreError, Result as CoreErrorResult, UserId};

use std::fmt;
use std::str::FromStr;

/// Screens reachable by path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`
    List,
    /// `/users/{id}`
    EditUser(UserId),
}

impl FromStr for Route {
    type Err = CoreError;

    /// Accepts an optional leading `#` (hash routing) and a trailing `/`
    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        let path = s.trim();
        let path = path.strip_prefix('#').unwrap_or(path);

        let Some(rest) = path.strip_prefix('/') else {
            return Err(CoreError::invalid_route(s));
        };
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        if rest.is_empty() {
            return Ok(Route::List);
        }

        let segments: Vec<&str> = rest.split('/').collect();
        match segments.as_slice() {
            ["users", id] if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) => id
                .parse::<UserId>()
                .map(Route::EditUser)
                .map_err(|_| CoreError::invalid_route(s)),
            _ => Err(CoreError::invalid_route(s)),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List => write!(f, "/"),
            Route::EditUser(id) => write!(f, "/users/{}", id),
        }
    }
}
