use std::any::Any;

use gatehouse_states::State;
use serde::{Deserialize, Serialize};

use crate::directory::api::DirectoryError;

/// Admin surface configuration served by `GET /admin/config`.
///
/// Consumed for permission gating only; this client never writes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminConfig {
    pub enabled: bool,
    pub admin_group: String,
    pub allow_admins_to_add_admins: bool,
}

/// Parse the admin config payload.
pub fn parse_admin_config(bytes: &[u8]) -> Result<AdminConfig, DirectoryError> {
    serde_json::from_slice(bytes)
        .map_err(|e| DirectoryError::MalformedResponse(format!("admin config: {e}")))
}

/// Fetch state for the admin configuration.
#[derive(Debug, Default)]
pub struct AdminConfigState {
    pub config: Option<AdminConfig>,
    pub is_fetching: bool,
}

impl AdminConfigState {
    pub fn set_fetching(&mut self) {
        self.is_fetching = true;
    }

    pub fn resolve(&mut self, config: AdminConfig) {
        self.config = Some(config);
        self.is_fetching = false;
    }

    /// A failed config fetch leaves the surface gated off.
    pub fn fail(&mut self) {
        self.config = None;
        self.is_fetching = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.config.as_ref().is_some_and(|c| c.enabled)
    }
}

impl State for AdminConfigState {
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

    #[test]
    fn test_parse_admin_config() {
        let body = br#"{"enabled": true, "admin_group": "admins", "allow_admins_to_add_admins": false}"#;
        let config = parse_admin_config(body).expect("valid payload");
        assert!(config.enabled);
        assert_eq!(config.admin_group, "admins");
        assert!(!config.allow_admins_to_add_admins);
    }

    #[test]
    fn test_parse_admin_config_rejects_wrong_shape() {
        let err = parse_admin_config(b"[1, 2, 3]").expect_err("shape violation");
        assert!(matches!(err, DirectoryError::MalformedResponse(_)));
    }

    #[test]
    fn test_gating_defaults_to_disabled() {
        let mut state = AdminConfigState::default();
        assert!(!state.is_enabled());

        state.resolve(AdminConfig {
            enabled: true,
            admin_group: "admins".to_owned(),
            allow_admins_to_add_admins: true,
        });
        assert!(state.is_enabled());

        state.fail();
        assert!(!state.is_enabled());
    }
}
