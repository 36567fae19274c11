//! User management panel and its submodules:
//! - `api`: ehttp calls against the `/admin` endpoints
//! - `cells`: pure cell-derivation helpers
//! - `panel`: main panel widget and the per-frame poll function
//! - `dialogs`: edit dialog and exit confirmation

mod api;
pub mod cells;
mod dialogs;
mod panel;

pub use api::{fetch_admin_config, fetch_users};
pub use panel::{poll_users_responses, users_panel};
