//! Translation lookup for user-facing strings.
//!
//! Strings are keyed so the full UI vocabulary lives in one table; `translate`
//! falls back to the key itself for anything unknown, which keeps missing
//! entries visible instead of blank.

static MESSAGES: &[(&str, &str)] = &[
    ("users.title", "User Management"),
    ("users.refresh", "Refresh"),
    ("users.loading", "Loading..."),
    ("users.disabled", "User management is disabled for this portal."),
    ("users.checking", "Checking permissions..."),
    ("users.fetch_failed", "There was an issue retrieving user info"),
    ("users.header.username", "Username"),
    ("users.header.display_name", "Display Name"),
    ("users.header.email", "Email"),
    ("users.header.last_logged_in", "Last Log In"),
    ("users.header.last_password_change", "Last Password Change"),
    ("users.header.created_at", "User Created At"),
    ("users.header.method", "Default 2FA Method"),
    ("users.header.actions", "Actions"),
    ("users.edit_tooltip", "Edit User"),
    ("dialog.title", "Edit {item}: {username}"),
    ("dialog.item_user", "User"),
    ("dialog.display_name", "Display Name"),
    ("dialog.email", "Email"),
    ("dialog.groups", "Groups"),
    ("dialog.add_group", "Add"),
    ("dialog.save", "Save"),
    ("dialog.exit", "Exit"),
    ("dialog.saving", "Saving changes..."),
    ("dialog.save_success", "User modified successfully."),
    ("dialog.save_failed", "Failed to modify user."),
    ("verify.title", "Unsaved Changes"),
    (
        "verify.body",
        "You have unsaved changes. Are you sure you want to exit without saving?",
    ),
    ("verify.cancel", "Cancel"),
    ("verify.confirm", "Exit Without Saving"),
];

/// Look up a UI string by key. Unknown keys render as themselves.
pub fn translate(key: &str) -> &str {
    MESSAGES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}

/// Look up a UI string and substitute `{name}` placeholders.
pub fn translate_with(key: &str, params: &[(&str, &str)]) -> String {
    let mut text = translate(key).to_owned();
    for (name, value) in params {
        text = text.replace(&format!("{{{name}}}"), value);
    }
    text
}
