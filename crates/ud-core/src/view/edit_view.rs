use crate::{EditForm, FormSchema, OverlayState, OverlayStore, SubmitOutcome, SuccessNotice, UserRecord};

use std::time::{Duration, Instant};

pub const AVATAR_BASE_URL: &str = "https://i.pravatar.cc/240?u=";

/// Profile screen for one user
#[derive(Debug, Clone)]
pub struct EditView {
    /// Effective record at the time the view was opened or last saved
    pub user: UserRecord,
    pub avatar_url: String,
    pub form: EditForm,
    pub notice: SuccessNotice,
}

impl EditView {
    /// Open the form for a fetched record, pre-filled with its local edit if
    /// there is one.
    pub fn open(
        raw: &UserRecord,
        state: &OverlayState,
        schema: FormSchema,
        notice_delay: Duration,
    ) -> Self {
        let user = state.effective_user(raw).clone();
        Self {
            avatar_url: format!("{}{}", AVATAR_BASE_URL, user.id),
            form: EditForm::new(&user, schema),
            notice: SuccessNotice::new(notice_delay),
            user,
        }
    }

    /// Submit the form; a successful save shows the confirmation
    pub fn save(&mut self, store: &mut OverlayStore, now: Instant) -> SubmitOutcome {
        let outcome = self.form.submit(store);
        if let SubmitOutcome::Saved(record) = &outcome {
            self.user = record.clone();
            self.notice.show(now);
        }
        outcome
    }
}
