use std::any::Any;

use chrono::{DateTime, Utc};
use gatehouse_states::State;

use super::model::UserRecord;

/// The fetched user list and its refresh bookkeeping.
///
/// The list is replaced wholesale on every refetch; there is no incremental
/// patching and no cache across records. `needs_refresh` starts true so the
/// panel fetches on first render, and is set again after every successful
/// save (the only two refresh triggers).
#[derive(Debug)]
pub struct DirectoryState {
    pub users: Vec<UserRecord>,
    pub is_fetching: bool,
    pub needs_refresh: bool,
    pub error: Option<String>,
    pub last_fetch: Option<DateTime<Utc>>,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            is_fetching: false,
            needs_refresh: true,
            error: None,
            last_fetch: None,
        }
    }
}

impl DirectoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fetch has been issued.
    pub fn set_fetching(&mut self) {
        self.is_fetching = true;
        self.needs_refresh = false;
        self.error = None;
    }

    /// Replace the list from a completed fetch.
    ///
    /// Takes `now` as a parameter to allow test mockability via the `Time`
    /// state.
    pub fn update_users(&mut self, users: Vec<UserRecord>, now: DateTime<Utc>) {
        self.users = users;
        self.is_fetching = false;
        self.error = None;
        self.last_fetch = Some(now);
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
        self.is_fetching = false;
    }

    /// The displayed list is stale; refetch on the next panel render.
    pub fn mark_stale(&mut self) {
        self.needs_refresh = true;
    }

    /// Re-derive a record by username from the latest fetched list.
    pub fn find_user(&self, username: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.username == username)
    }
}

impl State for DirectoryState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::model::SecondFactorMethod;

    fn record(username: &str) -> UserRecord {
        UserRecord {
            username: username.to_owned(),
            display_name: username.to_uppercase(),
            emails: vec![format!("{username}@x.com")],
            groups: Vec::new(),
            second_factor_method: SecondFactorMethod::None,
            has_webauthn: false,
            has_totp: false,
            has_duo: false,
            last_logged_in: None,
            last_password_change: None,
            user_created_at: None,
            disabled: None,
            logout_required: None,
            password_change_required: None,
        }
    }

    #[test]
    fn test_needs_refresh_on_creation() {
        let state = DirectoryState::new();
        assert!(state.needs_refresh, "first render must trigger a fetch");
        assert!(!state.is_fetching);
    }

    #[test]
    fn test_fetch_cycle_clears_flags() {
        let mut state = DirectoryState::new();

        state.set_fetching();
        assert!(state.is_fetching);
        assert!(!state.needs_refresh);

        let now = Utc::now();
        state.update_users(vec![record("alice")], now);
        assert!(!state.is_fetching);
        assert_eq!(state.last_fetch, Some(now));
        assert_eq!(state.users.len(), 1);
    }

    #[test]
    fn test_error_stops_fetching() {
        let mut state = DirectoryState::new();
        state.set_fetching();
        state.set_error("boom".to_owned());
        assert!(!state.is_fetching);
        assert_eq!(state.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_find_user_by_username() {
        let mut state = DirectoryState::new();
        state.update_users(vec![record("alice"), record("bob")], Utc::now());

        assert_eq!(state.find_user("bob").map(|u| u.username.as_str()), Some("bob"));
        assert!(state.find_user("carol").is_none());
    }
}
