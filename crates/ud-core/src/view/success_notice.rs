use std::time::{Duration, Instant};

/// Save confirmation that closes itself after a fixed delay.
///
/// Time is passed in by the caller so the notice stays free of clocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessNotice {
    delay: Duration,
    shown_at: Option<Instant>,
}

impl SuccessNotice {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            shown_at: None,
        }
    }

    pub fn show(&mut self, now: Instant) {
        self.shown_at = Some(now);
    }

    /// Dismiss before the delay runs out
    pub fn close(&mut self) {
        self.shown_at = None;
    }

    pub fn is_open(&self, now: Instant) -> bool {
        self.remaining(now).is_some()
    }

    /// Time left before auto-dismiss, `None` once closed or expired
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let shown_at = self.shown_at?;
        let elapsed = now.saturating_duration_since(shown_at);
        self.delay.checked_sub(elapsed).filter(|left| !left.is_zero())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}
