//! Session-scoped store of local edits layered over fetched users.

use crate::{OverlayState, SubscriptionId, UserId, UserRecord};

use std::fmt;
use std::sync::Arc;

use log::debug;

/// Shared, immutable snapshot handed to readers and listeners
pub type OverlaySnapshot = Arc<OverlayState>;

type Listener = Box<dyn FnMut(&OverlaySnapshot) + Send>;

/// Owner of the overlay state.
///
/// Every mutation swaps in a freshly built `OverlayState` and then calls each
/// listener synchronously, in subscription order, with the new snapshot.
/// Snapshots taken earlier are never modified.
pub struct OverlayStore {
    state: OverlaySnapshot,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl OverlayStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(OverlayState::new()),
            listeners: Vec::new(),
            next_subscription: 1,
        }
    }

    /// Current state
    pub fn snapshot(&self) -> OverlaySnapshot {
        Arc::clone(&self.state)
    }

    /// Register a listener called after every mutation
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&OverlaySnapshot) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));

        debug!(
            "Store listener {} subscribed ({} total)",
            id,
            self.listeners.len()
        );

        id
    }

    /// Remove a listener. Returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        let removed = self.listeners.len() != before;

        if removed {
            debug!(
                "Store listener {} unsubscribed ({} remaining)",
                id,
                self.listeners.len()
            );
        }

        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Mark a user archived. Ids are not checked against any fetched list.
    pub fn archive_user(&mut self, id: UserId) {
        let mut archived = self.state.archived_ids().clone();
        archived.insert(id);
        let next = self.state.with_archived(archived);

        debug!("Archived user {}", id);
        self.publish(next);
    }

    pub fn unarchive_user(&mut self, id: UserId) {
        let mut archived = self.state.archived_ids().clone();
        archived.remove(&id);
        let next = self.state.with_archived(archived);

        debug!("Unarchived user {}", id);
        self.publish(next);
    }

    /// Hide a user for the rest of the session. There is no way back.
    pub fn hide_user(&mut self, id: UserId) {
        let mut hidden = self.state.hidden_ids().clone();
        hidden.insert(id);
        let next = self.state.with_hidden(hidden);

        debug!("Hid user {}", id);
        self.publish(next);
    }

    /// Store `record` as the local edit for its id, replacing any earlier edit
    /// wholesale.
    pub fn upsert_edited_user(&mut self, record: UserRecord) {
        let id = record.id;
        let mut edited = self.state.edited_users().clone();
        edited.insert(id, record);
        let next = self.state.with_edited(edited);

        debug!("Stored local edit for user {}", id);
        self.publish(next);
    }

    /// The record to display for a fetched record
    pub fn effective_user(&self, raw: &UserRecord) -> UserRecord {
        self.state.effective_user(raw).clone()
    }

    fn publish(&mut self, next: OverlayState) {
        self.state = Arc::new(next);

        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }
}

impl Default for OverlayStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OverlayStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayStore")
            .field("state", &self.state)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}
