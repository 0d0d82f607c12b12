use ud_core::UserId;

use std::fmt;

/// Identity of a cached response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// The full user list
    Users,
    /// A single user
    User(UserId),
}

impl CacheKey {
    /// Path of the request this key caches, relative to the base URL
    pub fn path(&self) -> String {
        match self {
            CacheKey::Users => "/users".to_string(),
            CacheKey::User(id) => format!("/users/{}", id),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Users => write!(f, "[users]"),
            CacheKey::User(id) => write!(f, "[user, {}]", id),
        }
    }
}
