//! Edit-user dialog and the exit confirmation.

use egui::{Color32, RichText, Ui, Window};
use gatehouse_business::{
    CancelExitEditCommand, ConfirmExitEditCommand, EditPhase, EditWorkflowState, PortalConfig,
    RequestCloseEditCommand,
};
use gatehouse_states::StateCtx;

use super::api;
use crate::i18n::{translate, translate_with};

fn field_label(ui: &mut Ui, text: &str, has_error: bool) {
    if has_error {
        ui.colored_label(Color32::RED, text);
    } else {
        ui.label(text);
    }
}

/// Shows the edit dialog for the current workflow session.
///
/// The session owns the draft; this widget only renders it and collects
/// gestures. Dismissal funnels through `RequestCloseEditCommand`, so a dirty
/// draft always lands in the confirmation instead of silently closing.
pub(crate) fn show_edit_user_dialog(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let title = {
        let workflow = state_ctx.state::<EditWorkflowState>();
        let Some(username) = workflow.username() else {
            return;
        };
        translate_with(
            "dialog.title",
            &[("item", translate("dialog.item_user")), ("username", username)],
        )
    };

    let mut open = true;
    let mut save_clicked = false;
    let mut exit_clicked = false;
    let mut add_group_clicked = false;
    let mut remove_group: Option<usize> = None;

    {
        let workflow = state_ctx.state_mut::<EditWorkflowState>();

        Window::new(title)
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ui.ctx(), |ui| {
                if workflow.phase() == EditPhase::Saving {
                    ui.label(translate("dialog.saving"));
                    ui.spinner();
                    return;
                }

                let dirty = workflow.is_dirty();
                let display_name_error = workflow.display_name_error();
                let email_error = workflow.email_error();

                {
                    let Some(draft) = workflow.draft_mut() else {
                        return;
                    };

                    field_label(ui, translate("dialog.display_name"), display_name_error);
                    ui.text_edit_singleline(&mut draft.display_name);
                    ui.add_space(8.0);

                    // Only the primary entry is editable; the slot is ensured
                    // when the session opens.
                    field_label(ui, translate("dialog.email"), email_error);
                    if let Some(email) = draft.emails.first_mut() {
                        ui.text_edit_singleline(email);
                    }
                    ui.add_space(8.0);

                    ui.label(translate("dialog.groups"));
                    ui.horizontal_wrapped(|ui| {
                        for (index, group) in draft.groups.iter().enumerate() {
                            if ui.small_button(format!("{group} ✕")).clicked() {
                                remove_group = Some(index);
                            }
                        }
                    });
                }

                ui.horizontal(|ui| {
                    ui.text_edit_singleline(&mut workflow.group_entry);
                    if ui.button(translate("dialog.add_group")).clicked() {
                        add_group_clicked = true;
                    }
                });

                ui.add_space(16.0);

                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(dirty, egui::Button::new(translate("dialog.save")))
                        .clicked()
                    {
                        save_clicked = true;
                    }
                    if ui.button(translate("dialog.exit")).clicked() {
                        exit_clicked = true;
                    }
                });
            });
    }

    if add_group_clicked {
        let workflow = state_ctx.state_mut::<EditWorkflowState>();
        let entry = std::mem::take(&mut workflow.group_entry);
        workflow.add_group(entry.trim());
    }

    if let Some(index) = remove_group {
        state_ctx.state_mut::<EditWorkflowState>().remove_group(index);
    }

    if save_clicked {
        let url = state_ctx.state::<PortalConfig>().admin_users_url();
        // Validation runs inside the workflow; a failed check never builds a
        // body, so no request leaves this block.
        if let Some(body) = state_ctx.state_mut::<EditWorkflowState>().begin_save() {
            api::post_user_change(&url, &body, ui.ctx().clone());
        }
    }

    if exit_clicked || !open {
        state_ctx.dispatch::<RequestCloseEditCommand>();
    }
}

/// Blocking confirmation shown when dismissing a dirty draft.
pub(crate) fn show_verify_exit_dialog(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let mut confirm_clicked = false;
    let mut cancel_clicked = false;

    Window::new(translate("verify.title"))
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.label(translate("verify.body"));
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui.button(translate("verify.cancel")).clicked() {
                    cancel_clicked = true;
                }
                if ui
                    .button(RichText::new(translate("verify.confirm")).color(Color32::RED))
                    .clicked()
                {
                    confirm_clicked = true;
                }
            });
        });

    if confirm_clicked {
        state_ctx.dispatch::<ConfirmExitEditCommand>();
    }
    if cancel_clicked {
        state_ctx.dispatch::<CancelExitEditCommand>();
    }
}

#[cfg(test)]
mod edit_dialog_tests {
    use chrono::Utc;
    use egui_kittest::Harness;
    use gatehouse_business::{DirectoryState, SecondFactorMethod, UserRecord};
    use kittest::Queryable;

    use super::*;

    fn alice() -> UserRecord {
        UserRecord {
            username: "alice".to_owned(),
            display_name: "Alice A".to_owned(),
            emails: vec!["a@x.com".to_owned()],
            groups: vec!["g1".to_owned()],
            second_factor_method: SecondFactorMethod::None,
            has_webauthn: false,
            has_totp: false,
            has_duo: false,
            last_logged_in: None,
            last_password_change: None,
            user_created_at: None,
            disabled: None,
            logout_required: None,
            password_change_required: None,
        }
    }

    /// Harness rendering the dialogs the way the panel dispatches them.
    fn dialog_harness(state_ctx: StateCtx) -> Harness<'static, StateCtx> {
        Harness::new_ui_state(
            |ui, state_ctx| {
                let phase = state_ctx.state::<EditWorkflowState>().phase();
                if phase != EditPhase::Closed {
                    show_edit_user_dialog(state_ctx, ui);
                }
                if phase == EditPhase::ConfirmingExit {
                    show_verify_exit_dialog(state_ctx, ui);
                }
            },
            state_ctx,
        )
    }

    fn open_ctx() -> StateCtx {
        let mut state_ctx = crate::state::State::test("http://test").ctx;
        state_ctx
            .state_mut::<DirectoryState>()
            .update_users(vec![alice()], Utc::now());
        state_ctx.state_mut::<EditWorkflowState>().open(alice());
        state_ctx
    }

    #[test]
    fn test_dialog_renders_fields_and_actions() {
        let harness = dialog_harness(open_ctx());

        assert!(harness.query_by_label("Display Name").is_some());
        assert!(harness.query_by_label("Email").is_some());
        assert!(harness.query_by_label("Groups").is_some());
        assert!(harness.query_by_label("Save").is_some());
        assert!(harness.query_by_label("Exit").is_some());
        assert!(
            harness.query_by_label_contains("g1").is_some(),
            "existing group tags should render"
        );
    }

    #[test]
    fn test_clean_exit_closes_without_confirmation() {
        let mut harness = dialog_harness(open_ctx());
        harness.step();

        if let Some(exit_button) = harness.query_by_label("Exit") {
            exit_button.click();
        }
        harness.step();

        assert_eq!(
            harness.state_mut().state::<EditWorkflowState>().phase(),
            EditPhase::Closed,
            "a clean session closes immediately"
        );
        assert!(
            harness
                .query_by_label_contains("You have unsaved changes")
                .is_none(),
            "no confirmation for a clean session"
        );
    }

    #[test]
    fn test_dirty_exit_requires_confirmation() {
        let mut harness = dialog_harness(open_ctx());
        harness.step();

        harness
            .state_mut()
            .state_mut::<EditWorkflowState>()
            .draft_mut()
            .expect("open")
            .display_name = "Alice B".to_owned();

        if let Some(exit_button) = harness.query_by_label("Exit") {
            exit_button.click();
        }
        harness.step();

        assert_eq!(
            harness.state_mut().state::<EditWorkflowState>().phase(),
            EditPhase::ConfirmingExit
        );
        harness.step();
        assert!(
            harness
                .query_by_label_contains("You have unsaved changes")
                .is_some(),
            "confirmation dialog should appear"
        );
    }

    #[test]
    fn test_cancel_exit_keeps_draft() {
        let mut harness = dialog_harness(open_ctx());
        harness.step();

        harness
            .state_mut()
            .state_mut::<EditWorkflowState>()
            .draft_mut()
            .expect("open")
            .display_name = "Alice B".to_owned();

        if let Some(exit_button) = harness.query_by_label("Exit") {
            exit_button.click();
        }
        harness.step();
        harness.step();

        if let Some(cancel_button) = harness.query_by_label("Cancel") {
            cancel_button.click();
        }
        harness.step();

        let workflow = harness.state_mut().state::<EditWorkflowState>();
        assert_eq!(workflow.phase(), EditPhase::Editing);
        assert_eq!(
            workflow.draft().map(|d| d.display_name.as_str()),
            Some("Alice B"),
            "cancel leaves the draft untouched"
        );
    }

    #[test]
    fn test_confirm_exit_discards_draft_and_closes() {
        let mut harness = dialog_harness(open_ctx());
        harness.step();

        harness
            .state_mut()
            .state_mut::<EditWorkflowState>()
            .draft_mut()
            .expect("open")
            .emails[0] = "new@x.com".to_owned();

        if let Some(exit_button) = harness.query_by_label("Exit") {
            exit_button.click();
        }
        harness.step();
        harness.step();

        if let Some(confirm_button) = harness.query_by_label("Exit Without Saving") {
            confirm_button.click();
        }
        harness.step();

        assert_eq!(
            harness.state_mut().state::<EditWorkflowState>().phase(),
            EditPhase::Closed,
            "confirming exit closes the dialog"
        );
    }

    #[test]
    fn test_save_is_inert_while_clean() {
        let mut harness = dialog_harness(open_ctx());
        harness.step();

        if let Some(save_button) = harness.query_by_label("Save") {
            save_button.click();
        }
        harness.step();

        assert_eq!(
            harness.state_mut().state::<EditWorkflowState>().phase(),
            EditPhase::Editing,
            "save is disabled until the draft is dirty"
        );
    }

    #[test]
    fn test_save_with_blank_display_name_flags_field_and_stays_open() {
        let mut harness = dialog_harness(open_ctx());
        harness.step();

        harness
            .state_mut()
            .state_mut::<EditWorkflowState>()
            .draft_mut()
            .expect("open")
            .display_name = String::new();

        if let Some(save_button) = harness.query_by_label("Save") {
            save_button.click();
        }
        harness.step();

        let workflow = harness.state_mut().state::<EditWorkflowState>();
        assert_eq!(
            workflow.phase(),
            EditPhase::Editing,
            "validation failure keeps the dialog open"
        );
        assert!(workflow.display_name_error());
        assert!(!workflow.email_error());
    }

    #[test]
    fn test_valid_save_enters_saving_phase() {
        let mut harness = dialog_harness(open_ctx());
        harness.step();

        harness
            .state_mut()
            .state_mut::<EditWorkflowState>()
            .draft_mut()
            .expect("open")
            .display_name = "Alice B".to_owned();

        if let Some(save_button) = harness.query_by_label("Save") {
            save_button.click();
        }
        harness.step();

        assert_eq!(
            harness.state_mut().state::<EditWorkflowState>().phase(),
            EditPhase::Saving,
            "a valid dirty draft issues the write and blocks further input"
        );
        harness.step();
        assert!(
            harness.query_by_label_contains("Saving changes").is_some(),
            "saving indicator should be visible"
        );
    }
}
