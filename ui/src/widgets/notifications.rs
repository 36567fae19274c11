use egui::{Align2, Color32, Context, Frame, Id, RichText};
use gatehouse_business::{Notifications, Severity};
use gatehouse_states::StateCtx;

/// Render the toast stack in the bottom-right corner.
///
/// Expiry runs in the app update loop against the `Time` state; this widget
/// only draws and handles manual dismissal.
pub fn show_toasts(state_ctx: &mut StateCtx, ctx: &Context) {
    let mut dismiss: Option<usize> = None;

    {
        let notifications = state_ctx.state::<Notifications>();
        if notifications.entries().is_empty() {
            return;
        }

        egui::Area::new(Id::new("toasts"))
            .anchor(Align2::RIGHT_BOTTOM, [-12.0, -12.0])
            .show(ctx, |ui| {
                for (index, notification) in notifications.entries().iter().enumerate() {
                    let accent = match notification.severity {
                        Severity::Success => Color32::from_rgb(34, 139, 34),
                        Severity::Error => Color32::RED,
                    };

                    Frame::popup(ui.style()).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.colored_label(accent, RichText::new(&notification.text));
                            if ui.small_button("✕").clicked() {
                                dismiss = Some(index);
                            }
                        });
                    });
                }
            });
    }

    if let Some(index) = dismiss {
        state_ctx.state_mut::<Notifications>().dismiss(index);
    }
}
