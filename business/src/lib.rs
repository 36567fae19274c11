//! Domain layer for the Gatehouse admin console.
//!
//! UI code stays "dumb": it reads states, dispatches commands, and renders.
//! Everything with behavior — the user directory model and parsing, the edit
//! workflow state machine, notifications, configuration — lives here.

mod admin_config;
mod config;
pub mod directory;
mod notifications;

pub use admin_config::{AdminConfig, AdminConfigState, parse_admin_config};
pub use config::PortalConfig;
pub use directory::api::{DirectoryError, UserChangeBody, parse_user_list};
pub use directory::model::{SecondFactorMethod, UserRecord};
pub use directory::state::DirectoryState;
pub use directory::workflow::{EditPhase, EditWorkflowState};
pub use directory::workflow_commands::{
    CancelExitEditCommand, ConfirmExitEditCommand, OpenEditUserCommand, RequestCloseEditCommand,
    WorkflowInput,
};
pub use notifications::{Notification, Notifications, Severity};
