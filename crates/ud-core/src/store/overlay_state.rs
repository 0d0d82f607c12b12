use crate::{UserId, UserRecord};

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Immutable view of the local overlay.
///
/// Each container sits behind its own `Arc`, so a mutation replaces only the
/// container it touches and every other container is shared with the previous
/// state. The three containers are independent of each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayState {
    archived_ids: Arc<HashSet<UserId>>,
    hidden_ids: Arc<HashSet<UserId>>,
    edited_users: Arc<HashMap<UserId, UserRecord>>,
}

impl OverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn archived_ids(&self) -> &HashSet<UserId> {
        &self.archived_ids
    }

    pub fn hidden_ids(&self) -> &HashSet<UserId> {
        &self.hidden_ids
    }

    pub fn edited_users(&self) -> &HashMap<UserId, UserRecord> {
        &self.edited_users
    }

    pub fn is_archived(&self, id: UserId) -> bool {
        self.archived_ids.contains(&id)
    }

    pub fn is_hidden(&self, id: UserId) -> bool {
        self.hidden_ids.contains(&id)
    }

    pub fn edited_user(&self, id: UserId) -> Option<&UserRecord> {
        self.edited_users.get(&id)
    }

    /// The record to show for `raw`: its local edit when one exists,
    /// otherwise `raw` itself. Only the id of `raw` is consulted.
    pub fn effective_user<'a>(&'a self, raw: &'a UserRecord) -> &'a UserRecord {
        self.edited_users.get(&raw.id).unwrap_or(raw)
    }

    pub(crate) fn with_archived(&self, archived_ids: HashSet<UserId>) -> Self {
        Self {
            archived_ids: Arc::new(archived_ids),
            ..self.clone()
        }
    }

    pub(crate) fn with_hidden(&self, hidden_ids: HashSet<UserId>) -> Self {
        Self {
            hidden_ids: Arc::new(hidden_ids),
            ..self.clone()
        }
    }

    pub(crate) fn with_edited(&self, edited_users: HashMap<UserId, UserRecord>) -> Self {
        Self {
            edited_users: Arc::new(edited_users),
            ..self.clone()
        }
    }
}
