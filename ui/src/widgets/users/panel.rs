//! Main panel for the user directory.
//!
//! Uses a Typora-like table style with clean borders and minimal styling.

use egui::{Color32, Frame, Id, InnerResponse, Margin, Response, ScrollArea, Stroke, Ui};
use gatehouse_business::{
    AdminConfig, AdminConfigState, DirectoryState, EditPhase, EditWorkflowState, Notifications,
    OpenEditUserCommand, PortalConfig, UserRecord, WorkflowInput,
};
use gatehouse_states::{StateCtx, Time};
use ustr::Ustr;

use super::api;
use super::cells;
use super::dialogs::{show_edit_user_dialog, show_verify_exit_dialog};
use crate::i18n::translate;

/// Border color for Typora-like table style (subtle gray)
const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Header background color for Typora-like table style (light gray)
const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

/// Column headers, in render order.
const HEADER_KEYS: [&str; 8] = [
    "users.header.username",
    "users.header.display_name",
    "users.header.email",
    "users.header.last_logged_in",
    "users.header.last_password_change",
    "users.header.created_at",
    "users.header.method",
    "users.header.actions",
];

/// Helper to create a Typora-style header cell with background.
fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

/// Helper to create a Typora-style data cell with padding.
fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

/// Displays the user directory: toolbar, table, and the edit dialogs.
pub fn users_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    // The only refresh triggers funnel through `needs_refresh`: first render,
    // a manual refresh, and a completed dialog close. Issue the fetch here
    // when nothing is in flight.
    let users_url = state_ctx.state::<PortalConfig>().admin_users_url();
    {
        let directory = state_ctx.state_mut::<DirectoryState>();
        if directory.needs_refresh && !directory.is_fetching {
            directory.set_fetching();
            api::fetch_users(&users_url, ui.ctx().clone());
        }
    }

    let mut refresh_clicked = false;
    let mut activated: Option<Ustr> = None;

    let response = ui.vertical(|ui| {
        let directory = state_ctx.state::<DirectoryState>();

        // Toolbar row
        ui.horizontal(|ui| {
            if ui
                .button(format!("🔄 {}", translate("users.refresh")))
                .clicked()
                && !directory.is_fetching
            {
                refresh_clicked = true;
            }
            if directory.is_fetching {
                ui.spinner();
                ui.label(translate("users.loading"));
            }
        });

        // Error display
        if let Some(error) = &directory.error {
            ui.colored_label(Color32::RED, format!("Error: {error}"));
        }

        ui.add_space(8.0);

        // Typora-like table with frame border
        Frame::NONE
            .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
            .inner_margin(Margin::ZERO)
            .show(ui, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    egui::Grid::new("users_table")
                        .num_columns(HEADER_KEYS.len())
                        .striped(true)
                        .spacing([16.0, 0.0])
                        .min_col_width(60.0)
                        .show(ui, |ui| {
                            // Header row with background
                            for key in HEADER_KEYS {
                                header_cell(ui, |ui| {
                                    ui.strong(translate(key));
                                });
                            }
                            ui.end_row();

                            // User rows with cell padding
                            for user in &directory.users {
                                data_cell(ui, |ui| {
                                    ui.label(&user.username);
                                });
                                data_cell(ui, |ui| {
                                    ui.label(&user.display_name);
                                });
                                data_cell(ui, |ui| {
                                    ui.label(cells::email_text(user));
                                });
                                data_cell(ui, |ui| {
                                    ui.label(cells::timestamp_text(user.last_logged_in));
                                });
                                data_cell(ui, |ui| {
                                    ui.label(cells::timestamp_text(user.last_password_change));
                                });
                                data_cell(ui, |ui| {
                                    ui.label(cells::timestamp_text(user.user_created_at));
                                });
                                data_cell(ui, |ui| {
                                    ui.label(cells::method_text(user));
                                });
                                data_cell(ui, |ui| {
                                    if ui
                                        .button("✏")
                                        .on_hover_text(translate("users.edit_tooltip"))
                                        .clicked()
                                    {
                                        activated = Some(Ustr::from(&user.username));
                                    }
                                });
                                ui.end_row();
                            }
                        });
                });
            });
    });

    if refresh_clicked {
        state_ctx.state_mut::<DirectoryState>().mark_stale();
    }

    // Row activation re-derives the record from the latest list inside the
    // command, never from a reference captured at render time.
    if let Some(username) = activated {
        state_ctx.update::<WorkflowInput>(|input| {
            input.open_username = Some(username);
        });
        state_ctx.dispatch::<OpenEditUserCommand>();
    }

    // Dialogs (a single instance; the workflow state owns the session)
    let phase = state_ctx.state::<EditWorkflowState>().phase();
    if phase != EditPhase::Closed {
        show_edit_user_dialog(state_ctx, ui);
    }
    if phase == EditPhase::ConfirmingExit {
        show_verify_exit_dialog(state_ctx, ui);
    }

    response.response
}

/// Poll for async responses and update state.
/// Call this once per frame, before rendering.
pub fn poll_users_responses(state_ctx: &mut StateCtx, ctx: &egui::Context) {
    // Users list arrived
    if let Some(users) =
        ctx.memory(|mem| mem.data.get_temp::<Vec<UserRecord>>(Id::new(api::USERS_RESPONSE)))
    {
        let now = state_ctx.state::<Time>().now();
        state_ctx
            .state_mut::<DirectoryState>()
            .update_users(users, now);
        ctx.memory_mut(|mem| {
            mem.data
                .remove::<Vec<UserRecord>>(Id::new(api::USERS_RESPONSE));
        });
    }

    // The response violated the contract shape: degrade to an empty list and
    // surface a notification.
    if let Some(error) =
        ctx.memory(|mem| mem.data.get_temp::<String>(Id::new(api::USERS_MALFORMED)))
    {
        log::warn!("user list response malformed: {error}");
        let now = state_ctx.state::<Time>().now();
        let directory = state_ctx.state_mut::<DirectoryState>();
        directory.users.clear();
        directory.set_error(error);
        state_ctx
            .state_mut::<Notifications>()
            .push_error(translate("users.fetch_failed"), now);
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(Id::new(api::USERS_MALFORMED));
        });
    }

    // Transport failure for the list call
    if let Some(error) = ctx.memory(|mem| mem.data.get_temp::<String>(Id::new(api::USERS_ERROR))) {
        let now = state_ctx.state::<Time>().now();
        state_ctx.state_mut::<DirectoryState>().set_error(error);
        state_ctx
            .state_mut::<Notifications>()
            .push_error(translate("users.fetch_failed"), now);
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(Id::new(api::USERS_ERROR));
        });
    }

    // A save resolved: close the dialog, toast, and mark the list stale so
    // the next panel render refetches.
    if let Some(username) =
        ctx.memory(|mem| mem.data.get_temp::<String>(Id::new(api::SAVE_SUCCESS)))
    {
        log::info!("user {username} modified");
        let now = state_ctx.state::<Time>().now();
        state_ctx.state_mut::<EditWorkflowState>().save_succeeded();
        state_ctx
            .state_mut::<Notifications>()
            .push_success(translate("dialog.save_success"), now);
        state_ctx.state_mut::<DirectoryState>().mark_stale();
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(Id::new(api::SAVE_SUCCESS));
        });
    }

    // A save failed: generic toast, draft intact for retry.
    if let Some(error) = ctx.memory(|mem| mem.data.get_temp::<String>(Id::new(api::SAVE_ERROR))) {
        log::error!("user change failed: {error}");
        let now = state_ctx.state::<Time>().now();
        state_ctx.state_mut::<EditWorkflowState>().save_failed();
        state_ctx
            .state_mut::<Notifications>()
            .push_error(translate("dialog.save_failed"), now);
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(Id::new(api::SAVE_ERROR));
        });
    }

    // Admin config
    if let Some(config) =
        ctx.memory(|mem| mem.data.get_temp::<AdminConfig>(Id::new(api::CONFIG_RESPONSE)))
    {
        state_ctx.state_mut::<AdminConfigState>().resolve(config);
        ctx.memory_mut(|mem| {
            mem.data.remove::<AdminConfig>(Id::new(api::CONFIG_RESPONSE));
        });
    }

    if let Some(error) = ctx.memory(|mem| mem.data.get_temp::<String>(Id::new(api::CONFIG_ERROR))) {
        log::warn!("admin config fetch failed: {error}");
        state_ctx.state_mut::<AdminConfigState>().fail();
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(Id::new(api::CONFIG_ERROR));
        });
    }
}
