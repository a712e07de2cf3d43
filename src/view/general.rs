// General UI helpers: external links and help tooltips

use crate::style;
use eframe::egui;
use log::{debug, warn};
use std::io;
use std::path::Path;

/// `"{title}: "` followed by a button that opens `path` with the system handler.
///
/// Returns `Ok(true)` when the button was clicked and the path opened.
pub fn linkout_button(ui: &mut egui::Ui, title: &str, path: &Path) -> io::Result<bool> {
    let clicked = ui
        .horizontal(|ui| {
            ui.label(format!("{}: ", title));
            let shown = path.to_string_lossy();
            let label = format!("... {}", style::tail_chars(&shown, style::LINKOUT_TAIL_CHARS));
            ui.button(label).on_hover_text("Open externally").clicked()
        })
        .inner;

    if clicked {
        open_externally(path)?;
    }
    Ok(clicked)
}

/// Open `path` in the platform's file browser or default application.
pub fn open_externally(path: &Path) -> io::Result<()> {
    debug!("Opening {} externally", path.display());
    open::that(path).map_err(|e| {
        warn!("Could not open {}: {}", path.display(), e);
        e
    })
}

/// A dimmed "(?)" marker that shows `text` as a wrapped tooltip on hover.
pub fn help_marker(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let wrap_width = ui.text_style_height(&egui::TextStyle::Body) * style::TOOLTIP_WRAP_EMS;
    ui.add(egui::Label::new(egui::RichText::new("(?)").weak()).sense(egui::Sense::hover()))
        .on_hover_ui(|ui| {
            ui.set_max_width(wrap_width);
            ui.label(text);
        })
}
