use crate::components::Components;
use crate::config::{Config, WindowOptions};
use crate::error::{ImageError, RendererError};
use crate::input::{self, ResizeTracker};
use crate::style::Theme;
use eframe::egui;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Duration;

type GuiHandler = Box<dyn FnMut(&egui::Context, &mut Components)>;
type BackgroundHandler = Box<dyn FnMut(&egui::Context, &egui::Painter)>;
type ResizeHandler = Box<dyn FnMut(f32, f32)>;
type KeyHandler = Box<dyn FnMut(egui::Key, egui::Modifiers)>;

/// Icon files looked up in the icons directory, largest first.
const ICON_FILES: [&str; 4] = ["128.png", "64.png", "32.png", "16.png"];

/// Opens a native window and drives the registered per-frame handlers.
///
/// Each frame runs, in order: key and resize handlers, the background
/// handler (painted below all windows), the main menu bar, the GUI handler
/// and finally any open alerts.
pub struct Renderer {
    options: WindowOptions,
    theme: Theme,
    components: Components,
    gui: Option<GuiHandler>,
    background: Option<BackgroundHandler>,
    resize: Option<ResizeHandler>,
    key_press: Option<KeyHandler>,
    key_release: Option<KeyHandler>,
    resize_tracker: ResizeTracker,
}

impl Renderer {
    pub fn new(options: WindowOptions) -> Self {
        Self {
            options,
            theme: Theme::Dark,
            components: Components::default(),
            gui: None,
            background: None,
            resize: None,
            key_press: None,
            key_release: None,
            resize_tracker: ResizeTracker::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut renderer = Self::new(config.window.clone());
        renderer.theme = config.theme.theme();
        renderer.components = Components::new(config);
        renderer
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    pub fn components_mut(&mut self) -> &mut Components {
        &mut self.components
    }

    pub fn on_gui(mut self, handler: impl FnMut(&egui::Context, &mut Components) + 'static) -> Self {
        self.gui = Some(Box::new(handler));
        self
    }

    pub fn on_background(
        mut self,
        handler: impl FnMut(&egui::Context, &egui::Painter) + 'static,
    ) -> Self {
        self.background = Some(Box::new(handler));
        self
    }

    /// Called with the new inner width and height, including once at startup.
    pub fn on_resize(mut self, handler: impl FnMut(f32, f32) + 'static) -> Self {
        self.resize = Some(Box::new(handler));
        self
    }

    pub fn on_key_press(mut self, handler: impl FnMut(egui::Key, egui::Modifiers) + 'static) -> Self {
        self.key_press = Some(Box::new(handler));
        self
    }

    pub fn on_key_release(
        mut self,
        handler: impl FnMut(egui::Key, egui::Modifiers) + 'static,
    ) -> Self {
        self.key_release = Some(Box::new(handler));
        self
    }

    /// Open the window and run until it is closed.
    pub fn present(self) -> Result<(), RendererError> {
        let native_options = eframe::NativeOptions {
            viewport: self.viewport()?,
            ..Default::default()
        };
        let title = self.options.title.clone();
        let theme = self.theme;

        info!("Opening window \"{}\"", title);
        eframe::run_native(
            &title,
            native_options,
            Box::new(move |cc| {
                cc.egui_ctx.set_visuals(theme.visuals());
                Ok(Box::new(self))
            }),
        )
        .map_err(|e| RendererError::Eframe(e.to_string()))?;
        info!("Window closed");
        Ok(())
    }

    /// Change the window title.
    pub fn set_title(ctx: &egui::Context, title: &str) {
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.to_string()));
    }

    fn viewport(&self) -> Result<egui::ViewportBuilder, RendererError> {
        let mut viewport = egui::ViewportBuilder::default()
            .with_title(self.options.title.as_str())
            .with_inner_size([self.options.width, self.options.height])
            .with_resizable(true)
            .with_maximized(self.options.maximized)
            .with_fullscreen(self.options.fullscreen);

        match resolve_icons_dir(self.options.icons_path.as_deref()) {
            Some(dir) => {
                if let Some(icon) = load_window_icon(&dir)? {
                    viewport = viewport.with_icon(icon);
                }
            }
            None => debug!("No icons directory found"),
        }
        Ok(viewport)
    }

    fn dispatch_events(&mut self, ctx: &egui::Context) {
        let size = ctx.input(|i| i.viewport().inner_rect.map(|r| r.size()));
        if let Some(size) = size.and_then(|size| self.resize_tracker.update(size)) {
            debug!("Window resized to {}x{}", size.x, size.y);
            if let Some(handler) = &mut self.resize {
                handler(size.x, size.y);
            }
        }

        for event in input::key_events(ctx) {
            let handler = if event.pressed {
                &mut self.key_press
            } else {
                &mut self.key_release
            };
            if let Some(handler) = handler {
                handler(event.key, event.modifiers);
            }
        }
    }

    fn render_menu_bar(ctx: &egui::Context) {
        let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
        let mut quit = ctx.input_mut(|i| i.consume_shortcut(&quit_shortcut));

        egui::TopBottomPanel::top("main_menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let quit_button = egui::Button::new("Quit")
                        .shortcut_text(ui.ctx().format_shortcut(&quit_shortcut));
                    if ui.add(quit_button).clicked() {
                        quit = true;
                    }
                });
            });
        });

        if quit {
            info!("Quit requested");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    /// One frame: events, background, menu bar, GUI handler, then alerts.
    fn run_frame(&mut self, ctx: &egui::Context) {
        self.dispatch_events(ctx);

        if let Some(background) = &mut self.background {
            let painter = ctx.layer_painter(egui::LayerId::background());
            background(ctx, &painter);
        }

        Self::render_menu_bar(ctx);

        if let Some(gui) = &mut self.gui {
            gui(ctx, &mut self.components);
        }
        self.components.render_alerts(ctx);

        if let Some(interval) = frame_interval(self.options.frame_rate) {
            ctx.request_repaint_after(interval);
        }
    }
}

impl eframe::App for Renderer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_frame(ctx);
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }
}

/// Delay between redraws for `frame_rate` frames per second.
pub fn frame_interval(frame_rate: f32) -> Option<Duration> {
    (frame_rate.is_finite() && frame_rate > 0.0).then(|| Duration::from_secs_f32(1.0 / frame_rate))
}

/// The configured icons directory if it exists, otherwise `./icons`, otherwise
/// `icons` inside the config directory.
pub fn resolve_icons_dir(configured: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = configured.filter(|dir| dir.is_dir()) {
        return Some(dir.to_path_buf());
    }
    std::iter::once(PathBuf::from("icons"))
        .chain(Config::config_dir().map(|dir| dir.join("icons")))
        .find(|dir| dir.is_dir())
}

/// Load the largest of the standard icon sizes present in `dir`.
pub fn load_window_icon(dir: &Path) -> Result<Option<egui::IconData>, ImageError> {
    let Some(path) = ICON_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
    else {
        return Ok(None);
    };

    let image = image::open(&path)
        .map_err(|source| ImageError::Decode {
            path: path.clone(),
            source,
        })?
        .to_rgba8();
    let (width, height) = image.dimensions();
    debug!("Using window icon {}", path.display());
    Ok(Some(egui::IconData {
        rgba: image.into_raw(),
        width,
        height,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;

    #[test]
    fn test_frame_interval() {
        assert_eq!(frame_interval(120.0), Some(Duration::from_secs_f32(1.0 / 120.0)));
        assert_eq!(frame_interval(0.0), None);
        assert_eq!(frame_interval(f32::NAN), None);
    }

    #[test]
    fn test_window_icon_prefers_largest() {
        let temp = TempDir::new().unwrap();
        image::RgbaImage::new(16, 16).save(temp.path().join("16.png")).unwrap();
        image::RgbaImage::new(64, 64).save(temp.path().join("64.png")).unwrap();

        let icon = load_window_icon(temp.path()).unwrap().unwrap();
        assert_eq!((icon.width, icon.height), (64, 64));
        assert_eq!(icon.rgba.len(), 64 * 64 * 4);
    }

    #[test]
    fn test_window_icon_missing() {
        let temp = TempDir::new().unwrap();
        assert!(load_window_icon(temp.path()).unwrap().is_none());
    }

    #[test]
    fn test_configured_icons_dir_wins() {
        let temp = TempDir::new().unwrap();
        assert_eq!(resolve_icons_dir(Some(temp.path())), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn test_frame_runs_handlers_in_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let (bg, gui, press) = (calls.clone(), calls.clone(), calls.clone());

        let mut renderer = Renderer::new(WindowOptions::default())
            .on_background(move |_, _| bg.borrow_mut().push("background"))
            .on_gui(move |_, components| {
                assert!(components.alerts.is_empty());
                components.ui_error("from gui");
                gui.borrow_mut().push("gui");
            })
            .on_key_press(move |key, _| {
                assert_eq!(key, egui::Key::A);
                press.borrow_mut().push("key");
            });

        let ctx = egui::Context::default();
        let input = egui::RawInput {
            events: vec![egui::Event::Key {
                key: egui::Key::A,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::NONE,
            }],
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| renderer.run_frame(ctx));

        assert_eq!(*calls.borrow(), vec!["key", "background", "gui"]);

        // The alert raised by the gui handler is drawn in the same frame.
        let alert = renderer.components.alerts.iter().next().unwrap().clone();
        let layer = egui::LayerId::new(egui::Order::Middle, view::alerts::alert_window_id(&alert));
        assert!(ctx.memory(|m| m.areas().visible_last_frame(&layer)));
        assert_eq!(renderer.components.alerts.len(), 1);
    }
}
