//! Wire types and response parsing for the `/admin/users` endpoints.
//!
//! Network IO itself lives in the UI crate (ehttp callbacks); this module
//! owns the contract: body shapes, parsing, and the error taxonomy.

use serde::Serialize;
use thiserror::Error;

use super::model::{RawUserRecord, UserRecord};

/// Errors crossing the service boundary.
///
/// Both variants are converted into user-visible notifications at the poll
/// boundary; neither may propagate into the render path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// Network failure or a non-2xx status, carrying the backend's message.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response arrived but violates the contract shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Body for `POST /admin/users`.
///
/// `email` carries the draft's primary entry; the backend contract takes a
/// single address even though records store a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserChangeBody {
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub groups: Vec<String>,
}

/// Parse the `GET /admin/users` payload into normalized records.
///
/// A top-level value that is not a list is a contract violation; callers
/// degrade to an empty list and surface a notification.
pub fn parse_user_list(bytes: &[u8]) -> Result<Vec<UserRecord>, DirectoryError> {
    let value: serde_json::Value = serde_json::from_slice(bytes)
        .map_err(|e| DirectoryError::MalformedResponse(format!("invalid JSON: {e}")))?;

    if !value.is_array() {
        return Err(DirectoryError::MalformedResponse(
            "expected a list of user records".to_owned(),
        ));
    }

    let raw: Vec<RawUserRecord> = serde_json::from_value(value)
        .map_err(|e| DirectoryError::MalformedResponse(format!("user record: {e}")))?;

    Ok(raw.into_iter().map(UserRecord::from_raw).collect())
}
