//! API calls for the admin user-management endpoints.
//!
//! Each call runs on ehttp's background thread and deposits its outcome into
//! the egui memory mailbox; `poll_users_responses` drains the mailbox into
//! states on the UI thread. Teardown is safe: a callback firing after the
//! last frame writes into a context nobody polls again.

use gatehouse_business::{
    AdminConfig, DirectoryError, UserChangeBody, UserRecord, parse_admin_config, parse_user_list,
};

/// Mailbox keys drained by `poll_users_responses`.
pub(crate) const USERS_RESPONSE: &str = "admin_users_response";
pub(crate) const USERS_MALFORMED: &str = "admin_users_malformed";
pub(crate) const USERS_ERROR: &str = "admin_users_error";
pub(crate) const SAVE_SUCCESS: &str = "admin_user_save_success";
pub(crate) const SAVE_ERROR: &str = "admin_user_save_error";
pub(crate) const CONFIG_RESPONSE: &str = "admin_config_response";
pub(crate) const CONFIG_ERROR: &str = "admin_config_error";

fn insert<T: Clone + Send + Sync + 'static>(ctx: &egui::Context, key: &str, value: T) {
    let id = egui::Id::new(key);
    ctx.memory_mut(|mem| mem.data.insert_temp(id, value));
}

/// The backend's message for a failed call, falling back to the status code.
fn transport_message(response: &ehttp::Response) -> String {
    match response.text() {
        Some(text) if !text.trim().is_empty() => text.trim().to_owned(),
        _ => format!("API returned status: {}", response.status),
    }
}

/// GET `{base}/admin/users`
pub fn fetch_users(url: &str, ctx: egui::Context) {
    let request = ehttp::Request::get(url);

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        match result {
            Ok(response) if response.ok => match parse_user_list(&response.bytes) {
                Ok(users) => insert::<Vec<UserRecord>>(&ctx, USERS_RESPONSE, users),
                Err(err) => insert(&ctx, USERS_MALFORMED, err.to_string()),
            },
            Ok(response) => {
                let err = DirectoryError::Transport(transport_message(&response));
                insert(&ctx, USERS_ERROR, err.to_string());
            }
            Err(err) => {
                let err = DirectoryError::Transport(err);
                insert(&ctx, USERS_ERROR, err.to_string());
            }
        }
    });
}

/// POST `{base}/admin/users` with the user change body.
pub fn post_user_change(url: &str, body: &UserChangeBody, ctx: egui::Context) {
    let bytes = match serde_json::to_vec(body) {
        Ok(bytes) => bytes,
        Err(err) => {
            // Plain strings and lists; this cannot happen in practice.
            insert(&ctx, SAVE_ERROR, format!("Failed to serialize request: {err}"));
            return;
        }
    };

    let request = ehttp::Request {
        method: "POST".to_owned(),
        url: url.to_owned(),
        body: bytes,
        headers: ehttp::Headers::new(&[("Content-Type", "application/json")]),
    };

    let username = body.username.clone();
    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        match result {
            Ok(response) if response.ok => insert(&ctx, SAVE_SUCCESS, username.clone()),
            Ok(response) => insert(&ctx, SAVE_ERROR, transport_message(&response)),
            Err(err) => insert(&ctx, SAVE_ERROR, err),
        }
    });
}

/// GET `{base}/admin/config`
pub fn fetch_admin_config(url: &str, ctx: egui::Context) {
    let request = ehttp::Request::get(url);

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        match result {
            Ok(response) if response.ok => match parse_admin_config(&response.bytes) {
                Ok(config) => insert::<AdminConfig>(&ctx, CONFIG_RESPONSE, config),
                Err(err) => insert(&ctx, CONFIG_ERROR, err.to_string()),
            },
            Ok(response) => insert(&ctx, CONFIG_ERROR, transport_message(&response)),
            Err(err) => insert(&ctx, CONFIG_ERROR, err),
        }
    });
}
