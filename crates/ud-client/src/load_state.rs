use crate::{ClientError, ClientResult};

use std::future::Future;

/// Progress of loading the data behind a route
#[derive(Debug)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(ClientError),
}

impl<T> LoadState<T> {
    /// Await a fetch and settle on its outcome
    pub async fn resolve<F>(fetch: F) -> Self
    where
        F: Future<Output = ClientResult<T>>,
    {
        fetch.await.into()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ClientError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> LoadState<U> {
        match self {
            LoadState::Loading => LoadState::Loading,
            LoadState::Ready(value) => LoadState::Ready(f(value)),
            LoadState::Failed(err) => LoadState::Failed(err),
        }
    }
}

impl<T> From<ClientResult<T>> for LoadState<T> {
    fn from(result: ClientResult<T>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(err) => LoadState::Failed(err),
        }
    }
}
