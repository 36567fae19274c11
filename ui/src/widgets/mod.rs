//! Widgets for the Gatehouse admin console.

mod env_version;
mod notifications;
pub mod users;

pub use env_version::env_version;
pub use notifications::show_toasts;
pub use users::{poll_users_responses, users_panel};
