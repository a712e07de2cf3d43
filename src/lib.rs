//! Immediate-mode GUI conveniences on top of eframe: a render loop with
//! handler hooks, alert and text prompt windows, a file select window
//! backed by a directory navigator, and image display helpers.

pub mod app;
pub mod components;
pub mod config;
pub mod entry;
pub mod error;
pub mod image_display;
pub mod input;
pub mod io;
pub mod state;
pub mod style;
pub mod view;

pub use app::Renderer;
pub use components::Components;
pub use config::{Config, WindowOptions};
pub use error::{ConfigError, ImageError, NavigationError, RendererError};
pub use image_display::{DrawOptions, ImageDisplay};
pub use state::{Navigator, NavigatorOptions, Selection};
