// File select window driven by the directory navigator

use crate::config::BrowserConfig;
use crate::error::NavigationError;
use crate::input::{self, NavigatorKey};
use crate::state::{Activation, Navigator, NavigatorOptions, Selection};
use crate::style;
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use log::{debug, warn};
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
enum FileSelectAction {
    Select(usize),
    Enter(usize),
    EnterSelected,
    Move(isize),
    Up,
    Refresh,
    Commit,
    Complete,
    Cancel,
}

impl From<NavigatorKey> for FileSelectAction {
    fn from(key: NavigatorKey) -> Self {
        match key {
            NavigatorKey::Previous => FileSelectAction::Move(-1),
            NavigatorKey::Next => FileSelectAction::Move(1),
            NavigatorKey::Enter => FileSelectAction::EnterSelected,
            NavigatorKey::Parent => FileSelectAction::Up,
            NavigatorKey::Cancel => FileSelectAction::Cancel,
        }
    }
}

/// Local file picker.
///
/// The navigator is created on the first call to [`FileSelect::show`] and
/// stays closed after a selection or cancel until [`FileSelect::reopen`].
pub struct FileSelect {
    start_dir: PathBuf,
    options: NavigatorOptions,
    navigator: Option<Navigator>,
    error: Option<String>,
}

impl FileSelect {
    pub fn new(start_dir: impl Into<PathBuf>, options: NavigatorOptions) -> Self {
        Self {
            start_dir: start_dir.into(),
            options,
            navigator: None,
            error: None,
        }
    }

    pub fn from_config(config: &BrowserConfig) -> Self {
        Self::new(
            config.start_dir.clone(),
            NavigatorOptions {
                show_hidden: config.show_hidden,
            },
        )
    }

    pub fn navigator(&self) -> Option<&Navigator> {
        self.navigator.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.navigator.as_ref().is_some_and(Navigator::is_open)
    }

    /// Message of the last failed navigation, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Open the picker again in the directory it was last showing.
    pub fn reopen(&mut self) {
        let result = match &mut self.navigator {
            Some(navigator) if !navigator.is_open() => {
                let directory = navigator.current_directory().to_path_buf();
                let directory = if directory.as_os_str().is_empty() {
                    self.start_dir.clone()
                } else {
                    directory
                };
                navigator.open(directory)
            }
            _ => Ok(()),
        };
        if let Err(e) = result {
            self.report(e);
        }
    }

    /// Draw the picker if it is open. `on_complete` receives the chosen path,
    /// or `None` when the user cancels.
    pub fn show(&mut self, ctx: &egui::Context, on_complete: impl FnOnce(Selection)) {
        if self.navigator.is_none() {
            let mut navigator = Navigator::local(self.options);
            let opened = navigator.open(&self.start_dir);
            self.navigator = Some(navigator);
            if let Err(e) = opened {
                self.report(e);
                on_complete(None);
                return;
            }
        }

        let Some(navigator) = self.navigator.as_mut() else {
            return;
        };
        if !navigator.is_open() {
            return;
        }

        // A field focused when the frame starts may drop focus on this frame's key.
        let typing = ctx.wants_keyboard_input();
        let mut action = None;
        let window = egui::Window::new("File Select")
            .collapsible(false)
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                action = render_window(ui, navigator, self.error.as_deref());
            });
        let active = window.is_some_and(|window| {
            window.response.contains_pointer()
                || ctx.top_layer_id() == Some(window.response.layer_id)
        });
        if action.is_none() && active && !typing {
            action = input::navigator_key(ctx).map(FileSelectAction::from);
        }

        let Some(action) = action else {
            return;
        };
        match apply(navigator, action) {
            Ok(Some(selection)) => {
                self.error = None;
                on_complete(selection);
            }
            Ok(None) => self.error = None,
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, error: NavigationError) {
        warn!("{}", error);
        self.error = Some(error.to_string());
    }
}

/// Apply one user action. Returns the selection when the picker finished.
fn apply(
    navigator: &mut Navigator,
    action: FileSelectAction,
) -> Result<Option<Selection>, NavigationError> {
    debug!("File select action: {:?}", action);
    match action {
        FileSelectAction::Select(index) => navigator.select_index(index),
        FileSelectAction::Enter(index) => {
            if let Activation::File(_) = navigator.enter_index(index)? {
                return Ok(Some(navigator.complete_selection()));
            }
        }
        FileSelectAction::EnterSelected => {
            let index = navigator.selected_index();
            if let Activation::File(_) = navigator.enter_index(index)? {
                return Ok(Some(navigator.complete_selection()));
            }
        }
        FileSelectAction::Move(delta) => navigator.select_delta(delta),
        FileSelectAction::Up => navigator.go_up()?,
        FileSelectAction::Refresh => navigator.refresh()?,
        FileSelectAction::Commit => {
            let text = navigator.pending_input().to_string();
            navigator.commit_input_path(&text)?;
        }
        FileSelectAction::Complete => return Ok(Some(navigator.complete_selection())),
        FileSelectAction::Cancel => return Ok(Some(navigator.cancel())),
    }
    Ok(None)
}

fn render_window(
    ui: &mut egui::Ui,
    navigator: &mut Navigator,
    error: Option<&str>,
) -> Option<FileSelectAction> {
    let mut action = None;

    // Top input bar
    ui.horizontal(|ui| {
        if ui.button("\u{2b06}").on_hover_text("Parent directory").clicked() {
            action = Some(FileSelectAction::Up);
        }
        if ui.button("\u{27f3}").on_hover_text("Refresh").clicked() {
            action = Some(FileSelectAction::Refresh);
        }
        let response = ui.add(
            egui::TextEdit::singleline(navigator.pending_input_mut())
                .desired_width(f32::INFINITY),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            action = Some(FileSelectAction::Commit);
        }
    });
    if let Some(error) = error {
        ui.colored_label(style::ERROR_COLOR, error);
    }
    ui.separator();

    // Directory content
    let list_height = style::modal_max_height(ui.ctx()).max(style::LIST_MIN_HEIGHT) * 0.6;
    let entries = navigator.entries();
    let selected = navigator.selected_index();
    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .max_scroll_height(list_height)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(style::ICON_COL_WIDTH))
        .column(Column::remainder().clip(true))
        .body(|body| {
            body.rows(style::ROW_HEIGHT, entries.len(), |mut row| {
                let index = row.index();
                let entry = &entries[index];
                let is_selected = index == selected;
                row.set_selected(is_selected);

                row.col(|ui| {
                    ui.label(entry.get_icon());
                });
                row.col(|ui| {
                    let hint = if entry.is_dir() {
                        "Double-click to open"
                    } else {
                        "Double-click to select"
                    };
                    let response = ui
                        .selectable_label(is_selected, entry.display_name())
                        .on_hover_text(hint);
                    if response.double_clicked() {
                        action = Some(FileSelectAction::Enter(index));
                    } else if response.clicked() {
                        action = Some(FileSelectAction::Select(index));
                    }
                });
            });
        });

    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("Select").clicked() {
            action = Some(FileSelectAction::Complete);
        }
        if ui.button("Cancel").clicked() {
            action = Some(FileSelectAction::Cancel);
        }
        style::truncated_label(ui, navigator.current_directory().display().to_string());
    });

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.txt"), "a").unwrap();
        std::fs::create_dir(temp.path().join("sub")).unwrap();
        temp
    }

    fn frame(
        ctx: &egui::Context,
        select: &mut FileSelect,
        events: Vec<egui::Event>,
    ) -> Option<Selection> {
        frame_with(ctx, select, events, |_| {})
    }

    /// One frame that also draws `other` after the picker.
    fn frame_with(
        ctx: &egui::Context,
        select: &mut FileSelect,
        events: Vec<egui::Event>,
        mut other: impl FnMut(&egui::Context),
    ) -> Option<Selection> {
        let result = RefCell::new(None);
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            select.show(ctx, |selection| *result.borrow_mut() = Some(selection));
            other(ctx);
        });
        result.into_inner()
    }

    fn press(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_navigator_created_lazily() {
        let temp = fixture();
        let mut select = FileSelect::new(temp.path(), NavigatorOptions::default());
        let ctx = egui::Context::default();
        assert!(select.navigator().is_none());
        assert!(!select.is_open());

        assert_eq!(frame(&ctx, &mut select, Vec::new()), None);
        assert!(select.is_open());
        assert_eq!(select.navigator().unwrap().entry_names(), vec!["..", "a.txt", "sub"]);
    }

    #[test]
    fn test_missing_start_dir_opens_nearest_ancestor() {
        let temp = fixture();
        let mut select = FileSelect::new(temp.path().join("gone"), NavigatorOptions::default());
        let ctx = egui::Context::default();

        assert_eq!(frame(&ctx, &mut select, Vec::new()), None);
        assert!(select.is_open());
        assert_eq!(select.last_error(), None);
        assert_eq!(
            select.navigator().unwrap().current_directory(),
            crate::io::normalize(temp.path())
        );
    }

    #[test]
    fn test_keyboard_cancel_completes_with_none() {
        let temp = fixture();
        let mut select = FileSelect::new(temp.path(), NavigatorOptions::default());
        let ctx = egui::Context::default();
        frame(&ctx, &mut select, Vec::new());

        assert_eq!(frame(&ctx, &mut select, vec![press(egui::Key::Escape)]), Some(None));
        assert!(!select.is_open());
        assert_eq!(frame(&ctx, &mut select, Vec::new()), None);

        select.reopen();
        assert!(select.is_open());
    }

    #[test]
    fn test_keys_ignored_while_another_window_is_on_top() {
        let temp = fixture();
        let mut select = FileSelect::new(temp.path(), NavigatorOptions::default());
        let ctx = egui::Context::default();
        let other = |ctx: &egui::Context| {
            egui::Window::new("Other").show(ctx, |ui| ui.label("busy"));
        };
        frame_with(&ctx, &mut select, Vec::new(), other);

        let finished = frame_with(
            &ctx,
            &mut select,
            vec![press(egui::Key::Escape), press(egui::Key::Backspace)],
            other,
        );
        assert_eq!(finished, None);
        assert!(select.is_open());
        assert_eq!(
            select.navigator().unwrap().current_directory(),
            crate::io::normalize(temp.path())
        );
    }

    #[test]
    fn test_apply_select_by_index() {
        let temp = fixture();
        let mut navigator = Navigator::local(NavigatorOptions::default());
        navigator.open(temp.path()).unwrap();

        assert_eq!(apply(&mut navigator, FileSelectAction::Select(2)).unwrap(), None);
        assert_eq!(navigator.selected_entry().unwrap().name, "sub");
        assert_eq!(apply(&mut navigator, FileSelectAction::Enter(2)).unwrap(), None);
        assert!(navigator.current_directory().ends_with("sub"));
    }

    #[test]
    fn test_apply_enter_file_completes() {
        let temp = fixture();
        let mut navigator = Navigator::local(NavigatorOptions::default());
        navigator.open(temp.path()).unwrap();

        let finished = apply(&mut navigator, FileSelectAction::Enter(1)).unwrap();
        assert_eq!(finished, Some(Some(temp.path().join("a.txt"))));
        assert!(!navigator.is_open());
    }

    #[test]
    fn test_apply_navigation_keeps_open() {
        let temp = fixture();
        let mut navigator = Navigator::local(NavigatorOptions::default());
        navigator.open(temp.path()).unwrap();

        assert_eq!(apply(&mut navigator, FileSelectAction::Move(2)).unwrap(), None);
        assert_eq!(navigator.selected_entry().unwrap().name, "sub");
        assert_eq!(apply(&mut navigator, FileSelectAction::EnterSelected).unwrap(), None);
        assert!(navigator.current_directory().ends_with("sub"));
        assert_eq!(apply(&mut navigator, FileSelectAction::Up).unwrap(), None);
        assert_eq!(navigator.selected_entry().unwrap().name, "sub");
        assert!(navigator.is_open());
    }

    #[test]
    fn test_apply_commit_uses_pending_input() {
        let temp = fixture();
        let mut navigator = Navigator::local(NavigatorOptions::default());
        navigator.open(temp.path().join("sub")).unwrap();
        navigator.set_pending_input(temp.path().join("a.txt").to_string_lossy());

        assert_eq!(apply(&mut navigator, FileSelectAction::Commit).unwrap(), None);
        assert_eq!(navigator.selected_entry().unwrap().name, "a.txt");

        let finished = apply(&mut navigator, FileSelectAction::Complete).unwrap();
        assert_eq!(finished, Some(Some(temp.path().join("a.txt"))));
    }
}
