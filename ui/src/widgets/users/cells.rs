//! Pure cell-derivation helpers.
//!
//! Display rows derive from records by pure mapping so the placeholder and
//! gating rules stay unit-testable without a UI.

use chrono::{DateTime, Utc};
use gatehouse_business::UserRecord;

/// Placeholder for values with nothing meaningful to show.
pub const PLACEHOLDER: &str = "-";

/// A missing timestamp renders as the placeholder.
pub fn timestamp_text(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => PLACEHOLDER.to_owned(),
    }
}

/// The 2FA method label, gated on the capability flags: a method without a
/// registered factor renders as the placeholder.
pub fn method_text(record: &UserRecord) -> &'static str {
    if record.has_second_factor() {
        let label = record.second_factor_method.label();
        if label.is_empty() { PLACEHOLDER } else { label }
    } else {
        PLACEHOLDER
    }
}

/// The displayed email is the primary entry.
pub fn email_text(record: &UserRecord) -> &str {
    record.primary_email().unwrap_or(PLACEHOLDER)
}
