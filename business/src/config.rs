use std::any::Any;

use gatehouse_states::State;

/// Portal endpoint configuration.
///
/// The base URL points at the authentication portal that serves the admin
/// API. Tests and local setups override it via `GATEHOUSE_PORTAL_URL`.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub base_url: String,
}

impl PortalConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn admin_users_url(&self) -> String {
        format!("{}/admin/users", self.base())
    }

    pub fn admin_config_url(&self) -> String {
        format!("{}/admin/config", self.base())
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        let base_url = std::env::var("GATEHOUSE_PORTAL_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:9091/api".to_owned());
        Self { base_url }
    }
}

impl State for PortalConfig {
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
    fn test_urls_join_without_double_slash() {
        let config = PortalConfig::new("https://portal.example.com/api/");
        assert_eq!(
            config.admin_users_url(),
            "https://portal.example.com/api/admin/users"
        );
        assert_eq!(
            config.admin_config_url(),
            "https://portal.example.com/api/admin/config"
        );
    }
}
