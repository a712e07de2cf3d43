use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn visuals(self) -> egui::Visuals {
        match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        }
    }
}

// --- Sizing ---
pub const ICON_COL_WIDTH: f32 = 30.0;
pub const ROW_HEIGHT: f32 = 24.0;
pub const LIST_MIN_HEIGHT: f32 = 240.0;

// --- Modals ---
pub const MODAL_MIN_WIDTH: f32 = 300.0;
pub const MODAL_MAX_WIDTH: f32 = 500.0;
pub const MODAL_WIDTH_RATIO: f32 = 0.6;
pub const MODAL_HEIGHT_RATIO: f32 = 0.8;

// --- Text ---
pub const DEFAULT_INPUT_LEN: usize = 64;
pub const LINKOUT_TAIL_CHARS: usize = 32;
pub const LOG_PATH_CHARS: usize = 64;
/// Tooltip wrap width, in multiples of the font size
pub const TOOLTIP_WRAP_EMS: f32 = 35.0;

// --- Colors ---
pub const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(230, 90, 90);

// --- Helper functions ---

pub fn modal_width(ctx: &egui::Context) -> f32 {
    let width = ctx.input(|i| {
        i.viewport()
            .inner_rect
            .map(|r| r.width())
            .unwrap_or(800.0)
    });
    (width * MODAL_WIDTH_RATIO).clamp(MODAL_MIN_WIDTH, MODAL_MAX_WIDTH)
}

pub fn modal_max_height(ctx: &egui::Context) -> f32 {
    let height = ctx.input(|i| {
        i.viewport()
            .inner_rect
            .map(|r| r.height())
            .unwrap_or(600.0)
    });
    height * MODAL_HEIGHT_RATIO
}

/// The last `n` characters of `text`, cut on a char boundary.
pub fn tail_chars(text: &str, n: usize) -> &str {
    let count = text.chars().count();
    if count <= n {
        return text;
    }
    text.char_indices()
        .nth(count - n)
        .map_or("", |(idx, _)| &text[idx..])
}

/// The first `n` characters of `text`, with " ..." appended when cut.
pub fn head_chars(text: &str, n: usize) -> String {
    match text.char_indices().nth(n) {
        Some((idx, _)) => format!("{} ...", &text[..idx]),
        None => text.to_string(),
    }
}

pub fn truncated_label(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate())
}
