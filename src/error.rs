//! Error types for renderkit.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while moving the directory navigator.
///
/// A failed navigation never modifies the navigator; the previous listing and
/// selection stay in place.
#[derive(Error, Debug)]
pub enum NavigationError {
    /// Neither the path nor any of its ancestors is a directory.
    #[error("no directory found at or above '{}'", .0.display())]
    PathNotFound(PathBuf),

    /// The directory exists but could not be enumerated.
    #[error("cannot list '{}': {source}", path.display())]
    ListingDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors raised by [`crate::image_display::ImageDisplay`] and icon loading.
#[derive(Error, Debug)]
pub enum ImageError {
    /// The image path does not point to a file.
    #[error("image file '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be decoded.
    #[error("failed to decode '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Errors raised while reading or writing the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("config I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Errors raised by the render loop.
#[derive(Error, Debug)]
pub enum RendererError {
    /// The native window or graphics context could not be created.
    #[error("window error: {0}")]
    Eframe(String),

    /// A window icon was found but could not be loaded.
    #[error("icon error: {0}")]
    Icon(#[from] ImageError),
}

/// A specialized Result type for navigator operations.
pub type Result<T> = std::result::Result<T, NavigationError>;
