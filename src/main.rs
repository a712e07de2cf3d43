use eframe::egui;
use log::{error, info};
use renderkit::image_display::{DrawOptions, ImageDisplay};
use renderkit::view::general::{help_marker, linkout_button};
use renderkit::view::TextPrompt;
use renderkit::{Config, Renderer};
use std::env;
use std::path::PathBuf;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load();
    let mut image = env::args_os()
        .nth(1)
        .map(|path| ImageDisplay::new(path, Some(config.image.thumb_limit())));
    if let Some(image) = &mut image {
        if let Err(e) = image.load(None) {
            error!("{}", e);
        }
    }

    let config_path = Config::config_path().unwrap_or_else(|| PathBuf::from("config.toml"));
    let prompt = TextPrompt::new("Name", "What should we call you?", "OK").with_tag("name");

    let mut renderer = Renderer::from_config(&config)
        .on_resize(|width, height| info!("Resized to {}x{}", width, height))
        .on_gui(move |ctx, components| {
            egui::Window::new("Custom window").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Immediate-mode widgets");
                    help_marker(ui, "Each window below is an independent component.");
                });
                if let Err(e) = linkout_button(ui, "Config", &config_path) {
                    error!("{}", e);
                }
                if ui.button("Browse...").clicked() {
                    components.file_select.reopen();
                }
                if let Some(name) = components.text(&prompt.id).filter(|name| !name.is_empty()) {
                    ui.label(format!("Hello, {}!", name));
                }
            });

            components.ui_text_input(ctx, &prompt, |text| info!("Name entered: {}", text));
            components.ui_file_select(ctx, |selection| match selection {
                Some(path) => {
                    info!("Selected {}", path.display());
                    Renderer::set_title(ctx, &format!("renderkit - {}", path.display()));
                }
                None => info!("File select cancelled"),
            });

            if let Some(image) = &mut image {
                egui::Window::new("Image").show(ctx, |ui| {
                    image.draw(ui, egui::vec2(480.0, 320.0), &DrawOptions::default());
                });
            }
        });
    renderer.components_mut().ui_error("This is a demo error.");

    if let Err(e) = renderer.present() {
        error!("{}", e);
        std::process::exit(1);
    }
}
