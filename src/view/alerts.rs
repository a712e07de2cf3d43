// Alert panels

use crate::state::{Alert, Alerts};
use crate::style;
use eframe::egui;

const STACK_OFFSET: f32 = 24.0;

/// Window id of `alert`, stable for as long as it is open.
pub fn alert_window_id(alert: &Alert) -> egui::Id {
    egui::Id::new(("alert", &alert.title, &alert.message))
}

/// Draw every open alert as a centered, closable window.
pub fn render_alerts(ctx: &egui::Context, alerts: &mut Alerts) {
    let mut dismissed = Vec::new();

    for (index, alert) in alerts.iter().enumerate() {
        let mut open = true;
        let mut acknowledged = false;
        let stack = index as f32 * STACK_OFFSET;

        egui::Window::new(alert.title.as_str())
            .id(alert_window_id(alert))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [stack, stack])
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                ui.label(alert.message.as_str());
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    acknowledged = true;
                }
            });

        if !open || acknowledged {
            dismissed.push(index);
        }
    }

    for index in dismissed.into_iter().rev() {
        alerts.dismiss(index);
    }
}
