// Keyboard events for the render loop and the file picker

use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: egui::Key,
    pub modifiers: egui::Modifiers,
    pub pressed: bool,
}

/// Key presses and releases received this frame. Auto-repeats are skipped.
pub fn key_events(ctx: &egui::Context) -> Vec<KeyEvent> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed,
                    repeat: false,
                    modifiers,
                    ..
                } => Some(KeyEvent {
                    key: *key,
                    modifiers: *modifiers,
                    pressed: *pressed,
                }),
                _ => None,
            })
            .collect()
    })
}

/// Keys the file picker reacts to while its text field is not focused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigatorKey {
    Previous,
    Next,
    Enter,
    Parent,
    Cancel,
}

pub fn navigator_key(ctx: &egui::Context) -> Option<NavigatorKey> {
    if ctx.wants_keyboard_input() {
        return None;
    }
    ctx.input(|i| {
        if i.key_pressed(egui::Key::ArrowDown) {
            Some(NavigatorKey::Next)
        } else if i.key_pressed(egui::Key::ArrowUp) {
            Some(NavigatorKey::Previous)
        } else if i.key_pressed(egui::Key::Enter) {
            Some(NavigatorKey::Enter)
        } else if i.key_pressed(egui::Key::Backspace) {
            Some(NavigatorKey::Parent)
        } else if i.key_pressed(egui::Key::Escape) {
            Some(NavigatorKey::Cancel)
        } else {
            None
        }
    })
}

/// Reports the window size when it differs from the last one seen.
#[derive(Default, Debug)]
pub struct ResizeTracker {
    last: Option<egui::Vec2>,
}

impl ResizeTracker {
    pub fn update(&mut self, size: egui::Vec2) -> Option<egui::Vec2> {
        if self.last == Some(size) {
            return None;
        }
        self.last = Some(size);
        Some(size)
    }
}
