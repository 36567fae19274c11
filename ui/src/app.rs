use chrono::Utc;
use gatehouse_business::{AdminConfigState, Notifications, PortalConfig};
use gatehouse_states::Time;

use crate::i18n::translate;
use crate::state::State;
use crate::widgets;

/// The Gatehouse admin console.
pub struct GatehouseApp {
    state: State,
    /// The permission-gate config is fetched exactly once, on the first
    /// frame; a failed fetch leaves the surface gated off.
    config_requested: bool,
}

impl GatehouseApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            config_requested: false,
        }
    }
}

impl eframe::App for GatehouseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Advance the shared clock, then drain async results before rendering.
        self.state.ctx.update::<Time>(|time| time.set(Utc::now()));
        widgets::poll_users_responses(&mut self.state.ctx, ctx);

        if !self.config_requested {
            self.config_requested = true;
            let url = self.state.ctx.state::<PortalConfig>().admin_config_url();
            self.state.ctx.state_mut::<AdminConfigState>().set_fetching();
            widgets::users::fetch_admin_config(&url, ctx.clone());
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.heading(translate("users.title"));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::env_version(ui);
                });
            });
        });

        let (enabled, fetching) = {
            let admin = self.state.ctx.state::<AdminConfigState>();
            (admin.is_enabled(), admin.is_fetching)
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            if enabled {
                widgets::users_panel(&mut self.state.ctx, ui);
            } else if fetching {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(translate("users.checking"));
                });
            } else {
                ui.label(translate("users.disabled"));
            }
        });

        // Toasts: expire against the clock, then draw what is left.
        let now = self.state.ctx.state::<Time>().now();
        self.state.ctx.state_mut::<Notifications>().expire(now);
        widgets::show_toasts(&mut self.state.ctx, ctx);
    }
}
