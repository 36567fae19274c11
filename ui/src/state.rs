use gatehouse_business::{
    AdminConfigState, CancelExitEditCommand, ConfirmExitEditCommand, DirectoryState,
    EditWorkflowState, Notifications, OpenEditUserCommand, PortalConfig, RequestCloseEditCommand,
    WorkflowInput,
};
use gatehouse_states::{StateCtx, Time};

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

fn register(mut ctx: StateCtx, config: PortalConfig) -> StateCtx {
    ctx.add_state(Time::default());
    ctx.add_state(config);
    ctx.add_state(AdminConfigState::default());
    ctx.add_state(DirectoryState::default());
    ctx.add_state(EditWorkflowState::default());
    ctx.add_state(WorkflowInput::default());
    ctx.add_state(Notifications::default());

    ctx.record_command(OpenEditUserCommand);
    ctx.record_command(RequestCloseEditCommand);
    ctx.record_command(ConfirmExitEditCommand);
    ctx.record_command(CancelExitEditCommand);
    ctx
}

impl Default for State {
    fn default() -> Self {
        Self {
            ctx: register(StateCtx::new(), PortalConfig::default()),
        }
    }
}

impl State {
    /// State wired against an explicit portal URL. Used by tests.
    pub fn test(base_url: impl Into<String>) -> Self {
        Self {
            ctx: register(StateCtx::new(), PortalConfig::new(base_url)),
        }
    }
}
