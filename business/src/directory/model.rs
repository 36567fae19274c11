use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Second-factor method configured for an account.
///
/// The backend encodes this as a raw code string; unknown codes normalize to
/// `None` rather than failing the whole list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecondFactorMethod {
    #[default]
    None,
    Totp,
    Webauthn,
    MobilePush,
}

impl SecondFactorMethod {
    pub fn from_code(code: &str) -> Self {
        match code {
            "totp" => Self::Totp,
            "webauthn" => Self::Webauthn,
            "mobile_push" => Self::MobilePush,
            _ => Self::None,
        }
    }

    /// Human-readable label. `None` has no meaningful label; callers gate on
    /// the capability flags before showing one.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Totp => "One-Time Password",
            Self::Webauthn => "Security Key - WebAuthn",
            Self::MobilePush => "Push Notification",
        }
    }
}

/// The backend has shipped `emails` both as a single string and as a list,
/// depending on version. Accept either shape; the canonical form is a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EmailField {
    One(String),
    Many(Vec<String>),
}

impl Default for EmailField {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl EmailField {
    pub fn into_list(self) -> Vec<String> {
        match self {
            Self::One(email) => vec![email],
            Self::Many(emails) => emails,
        }
    }
}

/// A user record as the backend serializes it.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawUserRecord {
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub emails: EmailField,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub has_webauthn: bool,
    #[serde(default)]
    pub has_totp: bool,
    #[serde(default)]
    pub has_duo: bool,
    #[serde(default)]
    pub last_logged_in: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_password_change: Option<DateTime<Utc>>,
    #[serde(default)]
    pub user_created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub disabled: Option<bool>,
    #[serde(default)]
    pub logout_required: Option<bool>,
    #[serde(default)]
    pub password_change_required: Option<bool>,
}

/// A normalized user record.
///
/// `PartialEq` is derived over the whole record; the edit workflow derives
/// its dirty flag from exactly this comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub display_name: String,
    pub emails: Vec<String>,
    pub groups: Vec<String>,
    pub second_factor_method: SecondFactorMethod,
    pub has_webauthn: bool,
    pub has_totp: bool,
    pub has_duo: bool,
    pub last_logged_in: Option<DateTime<Utc>>,
    pub last_password_change: Option<DateTime<Utc>>,
    pub user_created_at: Option<DateTime<Utc>>,
    pub disabled: Option<bool>,
    pub logout_required: Option<bool>,
    pub password_change_required: Option<bool>,
}

impl UserRecord {
    pub(crate) fn from_raw(raw: RawUserRecord) -> Self {
        Self {
            username: raw.username,
            display_name: raw.display_name,
            emails: raw.emails.into_list(),
            groups: raw.groups,
            second_factor_method: raw
                .method
                .as_deref()
                .map(SecondFactorMethod::from_code)
                .unwrap_or_default(),
            has_webauthn: raw.has_webauthn,
            has_totp: raw.has_totp,
            has_duo: raw.has_duo,
            last_logged_in: raw.last_logged_in,
            last_password_change: raw.last_password_change,
            user_created_at: raw.user_created_at,
            disabled: raw.disabled,
            logout_required: raw.logout_required,
            password_change_required: raw.password_change_required,
        }
    }

    pub fn primary_email(&self) -> Option<&str> {
        self.emails.first().map(String::as_str)
    }

    /// True when the account has at least one registered second factor.
    /// A method label without a registered factor is meaningless.
    pub fn has_second_factor(&self) -> bool {
        self.has_webauthn || self.has_totp || self.has_duo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_codes_normalize() {
        assert_eq!(
            SecondFactorMethod::from_code("totp"),
            SecondFactorMethod::Totp
        );
        assert_eq!(
            SecondFactorMethod::from_code("webauthn"),
            SecondFactorMethod::Webauthn
        );
        assert_eq!(
            SecondFactorMethod::from_code("mobile_push"),
            SecondFactorMethod::MobilePush
        );
        assert_eq!(
            SecondFactorMethod::from_code("carrier_pigeon"),
            SecondFactorMethod::None
        );
    }

    #[test]
    fn test_email_field_accepts_both_shapes() {
        let single: EmailField = serde_json::from_str(r#""a@x.com""#).expect("single string");
        assert_eq!(single.into_list(), vec!["a@x.com".to_owned()]);

        let many: EmailField =
            serde_json::from_str(r#"["a@x.com", "b@x.com"]"#).expect("string list");
        assert_eq!(
            many.into_list(),
            vec!["a@x.com".to_owned(), "b@x.com".to_owned()]
        );
    }

    #[test]
    fn test_has_second_factor_requires_a_capability_flag() {
        let raw: RawUserRecord =
            serde_json::from_str(r#"{"username": "alice", "method": "totp"}"#).expect("valid");
        let record = UserRecord::from_raw(raw);

        assert_eq!(record.second_factor_method, SecondFactorMethod::Totp);
        assert!(!record.has_second_factor());
    }
}
