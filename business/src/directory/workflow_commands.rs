//! Commands the UI dispatches into the edit workflow.
//!
//! The UI follows the pattern:
//! - UI sets input state via `ctx.update::<WorkflowInput>(...)`
//! - UI dispatches commands via `ctx.dispatch::<Command>()`
//! - Commands read input and update state
//! - UI reads back via `ctx.state::<State>()`

use std::any::Any;

use gatehouse_states::{Command, Dep, State, Time};
use ustr::Ustr;

use super::state::DirectoryState;
use super::workflow::EditWorkflowState;
use crate::notifications::Notifications;

/// Input state for workflow commands.
///
/// UI sets these fields before dispatching the corresponding command.
#[derive(Debug, Clone, Default)]
pub struct WorkflowInput {
    /// Username for `OpenEditUserCommand`.
    pub open_username: Option<Ustr>,
}

impl State for WorkflowInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Open the edit dialog for the user named in `WorkflowInput.open_username`.
///
/// The record is re-derived from the latest fetched list at dispatch time,
/// not captured at render time: a row that survived on screen across a
/// refetch may name a user that no longer exists. That stale activation is
/// recoverable — it surfaces as an error toast and the dialog stays closed.
#[derive(Debug, Default)]
pub struct OpenEditUserCommand;

impl Command for OpenEditUserCommand {
    fn run(&self, deps: &mut Dep<'_>) {
        let Some(username) = deps.state_ref::<WorkflowInput>().open_username else {
            return;
        };

        let record = deps
            .state_ref::<DirectoryState>()
            .find_user(username.as_str())
            .cloned();

        match record {
            Some(record) => deps.state_mut::<EditWorkflowState>().open(record),
            None => {
                log::warn!("row activation for unknown user {username}");
                let now = deps.state_ref::<Time>().now();
                deps.state_mut::<Notifications>()
                    .push_error("Unable to edit user.", now);
            }
        }
    }
}

/// Every completed close reconciles the parent list, matching the
/// save path (which marks stale when the write resolves).
fn mark_stale_if_closed(deps: &mut Dep<'_>) {
    if !deps.state_ref::<EditWorkflowState>().is_open() {
        deps.state_mut::<DirectoryState>().mark_stale();
    }
}

/// The user asked to dismiss the edit dialog.
#[derive(Debug, Default)]
pub struct RequestCloseEditCommand;

impl Command for RequestCloseEditCommand {
    fn run(&self, deps: &mut Dep<'_>) {
        deps.state_mut::<EditWorkflowState>().request_close();
        mark_stale_if_closed(deps);
    }
}

/// Exit without saving: discard the draft and close.
#[derive(Debug, Default)]
pub struct ConfirmExitEditCommand;

impl Command for ConfirmExitEditCommand {
    fn run(&self, deps: &mut Dep<'_>) {
        deps.state_mut::<EditWorkflowState>().confirm_exit();
        mark_stale_if_closed(deps);
    }
}

/// Stay in the dialog; keep the draft.
#[derive(Debug, Default)]
pub struct CancelExitEditCommand;

impl Command for CancelExitEditCommand {
    fn run(&self, deps: &mut Dep<'_>) {
        deps.state_mut::<EditWorkflowState>().cancel_exit();
    }
}
