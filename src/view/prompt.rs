// Text input prompt window

use crate::state::{InputId, TextInputs};
use crate::style;
use eframe::egui;

/// A window with a message, one text field and a labelled button.
#[derive(Clone, Debug)]
pub struct TextPrompt {
    pub title: String,
    pub message: String,
    pub button: String,
    pub id: InputId,
    /// Maximum number of characters accepted by the field
    pub max_len: usize,
}

impl TextPrompt {
    /// The prompt's value is stored under its title unless [`TextPrompt::with_tag`] is used.
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        button: impl Into<String>,
    ) -> Self {
        let title = title.into();
        Self {
            id: InputId::new(title.as_str()),
            title,
            message: message.into(),
            button: button.into(),
            max_len: style::DEFAULT_INPUT_LEN,
        }
    }

    /// Store the value under `tag`. A blank tag keeps the title.
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.id = InputId::from_tag_or_title(Some(tag), &self.title);
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }
}

/// Draw the prompt. Returns the entered text when the button is pressed (or
/// Enter is hit) with a non-empty value.
pub fn text_prompt(
    ctx: &egui::Context,
    inputs: &mut TextInputs,
    prompt: &TextPrompt,
) -> Option<String> {
    let mut submitted = None;

    egui::Window::new(prompt.title.as_str())
        .id(egui::Id::new(("text_prompt", &prompt.id)))
        .collapsible(false)
        .resizable(false)
        .default_width(style::modal_width(ctx))
        .show(ctx, |ui| {
            ui.label(prompt.message.as_str());
            ui.add_space(5.0);

            let response = ui.add(
                egui::TextEdit::singleline(inputs.value_mut(&prompt.id))
                    .char_limit(prompt.max_len)
                    .desired_width(f32::INFINITY),
            );
            let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.add_space(5.0);
            if ui.button(prompt.button.as_str()).clicked() || entered {
                submitted = inputs.submit(&prompt.id);
            }
        });

    submitted
}
