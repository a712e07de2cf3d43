// Widget services owned by the render loop

use crate::config::Config;
use crate::state::{Alerts, InputId, Selection, TextInputs};
use crate::view::{self, FileSelect, TextPrompt};
use eframe::egui;

/// The reusable widgets, each an independent service with its own state.
pub struct Components {
    pub alerts: Alerts,
    pub inputs: TextInputs,
    pub file_select: FileSelect,
}

impl Components {
    pub fn new(config: &Config) -> Self {
        Self {
            alerts: Alerts::new(),
            inputs: TextInputs::new(),
            file_select: FileSelect::from_config(&config.browser),
        }
    }

    pub fn ui_alert(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.alerts.alert(title, message);
    }

    pub fn ui_error(&mut self, message: impl Into<String>) {
        self.alerts.error(message);
    }

    /// Draw a text prompt and run `action` with its text when submitted.
    pub fn ui_text_input(
        &mut self,
        ctx: &egui::Context,
        prompt: &TextPrompt,
        action: impl FnOnce(&str),
    ) {
        if let Some(text) = view::prompt::text_prompt(ctx, &mut self.inputs, prompt) {
            action(&text);
        }
    }

    pub fn text(&self, id: &InputId) -> Option<&str> {
        self.inputs.text(id)
    }

    pub fn ui_file_select(&mut self, ctx: &egui::Context, completion: impl FnOnce(Selection)) {
        self.file_select.show(ctx, completion);
    }

    pub fn render_alerts(&mut self, ctx: &egui::Context) {
        view::alerts::render_alerts(ctx, &mut self.alerts);
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_are_independent() {
        let mut components = Components::default();
        components.ui_error("boom");
        assert_eq!(components.alerts.len(), 1);
        assert!(components.inputs.is_empty());
        assert!(components.file_select.navigator().is_none());
    }

    #[test]
    fn test_alert_stays_open_until_dismissed() {
        let mut components = Components::default();
        components.ui_alert("Notice", "Saved");

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| components.render_alerts(ctx));
        assert_eq!(components.alerts.len(), 1);
    }
}
