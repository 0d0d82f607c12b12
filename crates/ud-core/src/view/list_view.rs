use crate::{OverlayState, UserRecord};

use serde::Serialize;

/// The home screen: fetched users split into active and archived groups.
///
/// Hidden users are in neither group. Hidden wins over archived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub active: Vec<UserRecord>,
    pub archived: Vec<UserRecord>,
    /// Number of records the server returned, before the limit
    pub fetched: usize,
}

impl ListView {
    /// Take the first `limit` records, swap in local edits, and group them
    /// in fetch order.
    pub fn project(records: &[UserRecord], state: &OverlayState, limit: usize) -> Self {
        let mut view = Self {
            fetched: records.len(),
            ..Self::default()
        };

        for raw in records.iter().take(limit) {
            let user = state.effective_user(raw);
            if state.is_hidden(user.id) {
                continue;
            }

            if state.is_archived(user.id) {
                view.archived.push(user.clone());
            } else {
                view.active.push(user.clone());
            }
        }

        view
    }

    /// The server returned no users at all
    pub fn has_no_users(&self) -> bool {
        self.fetched == 0
    }

    /// Whether the archived section should be shown
    pub fn has_archived(&self) -> bool {
        !self.archived.is_empty()
    }
}
