use std::any::Any;

use chrono::{DateTime, Utc};
use gatehouse_states::State;

/// How long a toast stays on screen.
const NOTIFICATION_TTL_SECONDS: i64 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A single toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Toast queue.
///
/// Takes `now` as a parameter everywhere so tests can pin the clock via the
/// `Time` state.
#[derive(Debug, Default)]
pub struct Notifications {
    entries: Vec<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_success(&mut self, text: impl Into<String>, now: DateTime<Utc>) {
        self.push(Severity::Success, text.into(), now);
    }

    pub fn push_error(&mut self, text: impl Into<String>, now: DateTime<Utc>) {
        self.push(Severity::Error, text.into(), now);
    }

    fn push(&mut self, severity: Severity, text: String, now: DateTime<Utc>) {
        log::debug!("notification ({severity:?}): {text}");
        self.entries.push(Notification {
            severity,
            text,
            created_at: now,
        });
    }

    /// Drop entries older than the display interval.
    pub fn expire(&mut self, now: DateTime<Utc>) {
        self.entries.retain(|n| {
            now.signed_duration_since(n.created_at).num_seconds() < NOTIFICATION_TTL_SECONDS
        });
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }
}

impl State for Notifications {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
