use crate::error::ConfigError;
use crate::style::Theme;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub window: WindowOptions,
    pub browser: BrowserConfig,
    pub image: ImageConfig,
    pub theme: ThemeConfig,
}

/// Native window configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WindowOptions {
    pub title: String,
    /// Initial inner width (in points)
    pub width: f32,
    /// Initial inner height (in points)
    pub height: f32,
    pub maximized: bool,
    pub fullscreen: bool,
    /// Target redraws per second while idle
    pub frame_rate: f32,
    /// Directory holding 16.png, 32.png, 64.png and 128.png
    pub icons_path: Option<PathBuf>,
}

/// File select configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct BrowserConfig {
    /// Directory the picker opens in; `~` is expanded
    pub start_dir: PathBuf,
    /// List names starting with a dot
    pub show_hidden: bool,
}

/// Image display configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ImageConfig {
    /// Longest side of generated display textures (in pixels)
    pub thumb_long: u32,
    /// Shortest side of generated display textures (in pixels)
    pub thumb_short: u32,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

impl Default for WindowOptions {
    fn default() -> Self {
        WindowOptions {
            title: "renderkit".to_string(),
            width: 1280.0,
            height: 720.0,
            maximized: false,
            fullscreen: false,
            frame_rate: 120.0,
            icons_path: None,
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        BrowserConfig {
            start_dir: PathBuf::from("."),
            show_hidden: true,
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        ImageConfig {
            thumb_long: 1280,
            thumb_short: 720,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            mode: "dark".to_string(),
        }
    }
}

impl ThemeConfig {
    pub fn theme(&self) -> Theme {
        if self.mode.eq_ignore_ascii_case("light") {
            Theme::Light
        } else {
            Theme::Dark
        }
    }
}

impl ImageConfig {
    pub fn thumb_limit(&self) -> (u32, u32) {
        (self.thumb_long, self.thumb_short)
    }
}

impl Config {
    /// Get the directory holding the config file
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "renderkit")
            .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
    }

    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match fs::read_to_string(&path) {
                    Ok(contents) => match Self::parse(&contents) {
                        Ok(config) => return config,
                        Err(e) => {
                            warn!("Failed to parse config file: {}", e);
                            warn!("Using default configuration");
                        }
                    },
                    Err(e) => {
                        warn!("Failed to read config file: {}", e);
                        warn!("Using default configuration");
                    }
                }
            }
        }
        Config::default()
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<(), ConfigError> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                Config::default().save()?;
            }
        }
        Ok(())
    }
}
