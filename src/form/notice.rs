//! Confirmation messages that disappear after a while.

use std::time::{Duration, Instant};

/// A message that is visible for a fixed duration after it is shown.
#[derive(Debug, Clone)]
pub struct TransientNotice {
    text: String,
    shown_at: Instant,
    ttl: Duration,
}

impl TransientNotice {
    /// Show `text` from now for `ttl`.
    pub fn new(text: impl Into<String>, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            shown_at: Instant::now(),
            ttl,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the notice has not yet expired.
    pub fn is_visible(&self) -> bool {
        self.shown_at.elapsed() < self.ttl
    }

    /// Time left before the notice expires (zero once expired).
    pub fn remaining(&self) -> Duration {
        self.ttl.saturating_sub(self.shown_at.elapsed())
    }

    /// The text while the notice is still visible.
    pub fn visible_text(&self) -> Option<&str> {
        self.is_visible().then_some(self.text.as_str())
    }
}
