//! ud-client
//!
//! Read-only HTTP access to the users API with a per-key freshness cache.

pub mod cache_key;
pub mod client;
pub mod error;
pub mod load_state;
pub mod query_cache;

#[cfg(test)]
mod tests;

pub use cache_key::CacheKey;
pub use client::Client;
pub use error::{ClientError, Result as ClientResult};
pub use load_state::LoadState;
pub use query_cache::QueryCache;
