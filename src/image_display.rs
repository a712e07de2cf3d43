// Image display helpers: decode, thumbnail, upload and draw as egui textures

use crate::error::ImageError;
use crate::style;
use eframe::egui;
use image::{DynamicImage, RgbaImage};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// How an image is placed inside its container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawOptions {
    /// `true` shows the whole image (letterboxed), `false` covers the container (cropped).
    pub fit: bool,
    /// Center horizontally in the available width.
    pub center: bool,
    pub offset: egui::Vec2,
    /// Drawn as a one-point outline when not fully transparent.
    pub border: egui::Color32,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            fit: true,
            center: true,
            offset: egui::Vec2::ZERO,
            border: egui::Color32::TRANSPARENT,
        }
    }
}

/// An image file that can be drawn into egui.
///
/// Pixels are decoded on [`ImageDisplay::load`]; the display texture is
/// uploaded on first draw and bounded by the thumbnail limit.
pub struct ImageDisplay {
    path: PathBuf,
    thumb_limit: Option<(u32, u32)>,
    pixels: Option<RgbaImage>,
    texture: Option<egui::TextureHandle>,
}

impl ImageDisplay {
    /// `thumb_limit` is `(long side, short side)`; `None` keeps the real size.
    pub fn new(path: impl Into<PathBuf>, thumb_limit: Option<(u32, u32)>) -> Self {
        Self {
            path: path.into(),
            thumb_limit,
            pixels: None,
            texture: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.pixels.is_some()
    }

    /// Decode the file, optionally flattening it onto an opaque RGB background.
    pub fn load(&mut self, background: Option<[u8; 3]>) -> Result<(), ImageError> {
        self.close();
        if !self.path.is_file() {
            warn!("{} has been provided with incorrect path information", self.path.display());
            return Err(ImageError::NotFound(self.path.clone()));
        }

        let decoded = image::open(&self.path).map_err(|source| ImageError::Decode {
            path: self.path.clone(),
            source,
        })?;
        let pixels = match background {
            Some(color) => composite_on(&decoded, color),
            None => decoded.to_rgba8(),
        };

        debug!(
            "Loaded \"{}\".",
            style::head_chars(&self.path.to_string_lossy(), style::LOG_PATH_CHARS)
        );
        self.pixels = Some(pixels);
        Ok(())
    }

    /// Release decoded pixels and the texture.
    pub fn close(&mut self) {
        self.pixels = None;
        self.texture = None;
    }

    /// `(width, height)` of the decoded image, loading it if needed.
    pub fn size(&mut self) -> Result<(u32, u32), ImageError> {
        if self.pixels.is_none() {
            self.load(None)?;
        }
        self.pixels
            .as_ref()
            .map(RgbaImage::dimensions)
            .ok_or_else(|| ImageError::NotFound(self.path.clone()))
    }

    /// The display texture, uploading it on first use.
    pub fn texture(&mut self, ctx: &egui::Context) -> Result<egui::TextureHandle, ImageError> {
        if self.pixels.is_none() {
            self.load(None)?;
        }
        if let Some(texture) = &self.texture {
            return Ok(texture.clone());
        }
        let pixels = self
            .pixels
            .as_ref()
            .ok_or_else(|| ImageError::NotFound(self.path.clone()))?;

        let thumb = thumbnail(pixels, self.thumb_limit);
        let (width, height) = thumb.dimensions();
        let texture = ctx.load_texture(
            self.path.to_string_lossy(),
            egui::ColorImage::from_rgba_unmultiplied(
                [width as usize, height as usize],
                thumb.as_raw(),
            ),
            egui::TextureOptions::LINEAR,
        );
        self.texture = Some(texture.clone());
        Ok(texture)
    }

    pub fn draw(&mut self, ui: &mut egui::Ui, container: egui::Vec2, options: &DrawOptions) {
        self.paint(ui, container, options, false);
    }

    /// Draw as a clickable image button. Returns `true` when clicked.
    pub fn draw_button(
        &mut self,
        ui: &mut egui::Ui,
        container: egui::Vec2,
        options: &DrawOptions,
    ) -> bool {
        self.paint(ui, container, options, true)
    }

    fn paint(
        &mut self,
        ui: &mut egui::Ui,
        container: egui::Vec2,
        options: &DrawOptions,
        as_button: bool,
    ) -> bool {
        let Some((width, height)) = self.pixels.as_ref().map(RgbaImage::dimensions) else {
            ui.label("Image has not been loaded.");
            return false;
        };
        let texture = match self.texture(ui.ctx()) {
            Ok(texture) => texture,
            Err(e) => {
                warn!("{}", e);
                ui.label("Image has not been loaded.");
                return false;
            }
        };

        let content = egui::vec2(width as f32, height as f32);
        let (size, _) = best_size(content, container, options.fit);
        let mut origin = ui.cursor().min + options.offset;
        if options.center {
            origin.x += (ui.available_width() - size.x) * 0.5;
        }
        let rect = egui::Rect::from_min_size(origin, size);

        let image = egui::Image::from_texture(egui::load::SizedTexture::from_handle(&texture))
            .fit_to_exact_size(size);
        let response = if as_button {
            ui.put(rect, egui::Button::image(image))
        } else {
            ui.put(rect, image)
        };

        if options.border.a() > 0 {
            ui.painter().rect_stroke(
                response.rect,
                0.0,
                egui::Stroke::new(1.0, options.border),
                egui::StrokeKind::Outside,
            );
        }
        as_button && response.clicked()
    }
}

/// Ideal size for `content` inside `container`, and the top-left anchor that
/// centers any overflow.
///
/// Fitting uses the smaller scale ratio so the whole content is visible;
/// covering uses the larger one so the container is filled. The anchor is
/// zero on an axis that does not overflow.
pub fn best_size(content: egui::Vec2, container: egui::Vec2, fit: bool) -> (egui::Vec2, egui::Vec2) {
    if content.x <= 0.0 || content.y <= 0.0 {
        return (egui::Vec2::ZERO, egui::Vec2::ZERO);
    }
    let ratio_x = container.x / content.x;
    let ratio_y = container.y / content.y;
    let ratio = if fit {
        ratio_x.min(ratio_y)
    } else {
        ratio_x.max(ratio_y)
    };

    let size = egui::vec2((content.x * ratio).round(), (content.y * ratio).round());
    let anchor = egui::vec2(
        overflow_anchor(size.x, container.x),
        overflow_anchor(size.y, container.y),
    );
    (size, anchor)
}

fn overflow_anchor(size: f32, container: f32) -> f32 {
    if size > container {
        -((size - container) / 2.0).round()
    } else {
        0.0
    }
}

/// Orientation-aware bounds: landscape images get `(long, short)`, others `(short, long)`.
pub fn thumbnail_bounds((width, height): (u32, u32), (long, short): (u32, u32)) -> (u32, u32) {
    if width > height {
        (long, short)
    } else {
        (short, long)
    }
}

/// Largest size with the same aspect ratio that fits `bounds`. Never enlarges.
pub fn fit_within((width, height): (u32, u32), (max_w, max_h): (u32, u32)) -> (u32, u32) {
    if width <= max_w && height <= max_h {
        return (width, height);
    }
    let ratio = (max_w as f64 / width as f64).min(max_h as f64 / height as f64);
    let scaled = |side: u32| ((side as f64 * ratio).round() as u32).max(1);
    (scaled(width), scaled(height))
}

fn thumbnail(pixels: &RgbaImage, limit: Option<(u32, u32)>) -> RgbaImage {
    let dimensions = pixels.dimensions();
    let Some(limit) = limit else {
        return pixels.clone();
    };
    let (width, height) = fit_within(dimensions, thumbnail_bounds(dimensions, limit));
    if (width, height) == dimensions {
        pixels.clone()
    } else {
        image::imageops::thumbnail(pixels, width, height)
    }
}

fn composite_on(image: &DynamicImage, [r, g, b]: [u8; 3]) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(image.width(), image.height(), image::Rgba([r, g, b, 255]));
    image::imageops::overlay(&mut canvas, &image.to_rgba8(), 0, 0);
    canvas
}
