use crate::image::Image;

use super::compose::composite;
use super::engine::{FontEngine, GlyphRasterizer};
use super::error::TextError;
use super::layout::layout_text;

/// Text rasterization settings.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TextConfig {
    /// Maximum characters per string. `None` grows glyph storage as needed.
    pub glyph_limit: Option<usize>,
    /// Emboldening width in pixels. `None` derives it from the pixel size.
    pub bold_strength: Option<u32>,
}

impl TextConfig {
    pub fn with_glyph_limit(mut self, limit: usize) -> Self {
        self.glyph_limit = Some(limit);
        self
    }

    pub fn with_bold_strength(mut self, px: u32) -> Self {
        self.bold_strength = Some(px);
        self
    }

    /// Emboldening width used at `size`: the configured value, or `size / 24`
    /// rounded, at least 1.
    pub fn bold_strength_for(&self, size: f32) -> u32 {
        self.bold_strength
            .unwrap_or_else(|| ((size / 24.0).round() as u32).max(1))
    }
}

/// Turns strings into single-channel coverage images.
///
/// Owns the font engine; `build` takes `&mut self` because the engine's pixel
/// size is reconfigured on every call.
pub struct TextBuilder<R: GlyphRasterizer = FontEngine> {
    engine: R,
    config: TextConfig,
}

impl<R: GlyphRasterizer> TextBuilder<R> {
    pub fn new(engine: R) -> Self {
        Self::with_config(engine, TextConfig::default())
    }

    pub fn with_config(engine: R, config: TextConfig) -> Self {
        Self { engine, config }
    }

    #[inline]
    pub fn config(&self) -> &TextConfig {
        &self.config
    }

    #[inline]
    pub fn engine(&self) -> &R {
        &self.engine
    }

    #[inline]
    pub fn engine_mut(&mut self) -> &mut R {
        &mut self.engine
    }

    pub fn into_engine(self) -> R {
        self.engine
    }

    /// Lays out and composites `text` at `size` pixels.
    ///
    /// Returns an `Image` of `width × height × 1` sized to the string's bounding
    /// box. A string with no visible extent (e.g. only spaces) yields the empty
    /// sentinel image rather than an error.
    pub fn try_build(&mut self, text: &str, size: f32, bold: bool) -> Result<Image, TextError> {
        if text.is_empty() {
            return Err(TextError::EmptyText);
        }
        if !(size > 0.0 && size.is_finite()) {
            return Err(TextError::InvalidSize(size));
        }

        self.engine.set_pixel_size(size)?;

        let strength = bold.then(|| self.config.bold_strength_for(size));
        let layout = layout_text(&mut self.engine, text, strength, self.config.glyph_limit)?;

        let bounds = layout.bounds();
        let (w, h) = (bounds.width(), bounds.height());
        if w == 0 || h == 0 {
            log::debug!("text {text:?} has no visible extent ({w}x{h})");
            return Ok(Image::default());
        }

        let mut image = Image::new(w, h, 1);
        composite(layout, &mut image);
        Ok(image)
    }

    /// Like [`try_build`](Self::try_build), but every failure becomes the empty
    /// sentinel image. Callers check `image.is_empty()`.
    pub fn build(&mut self, text: &str, size: f32, bold: bool) -> Image {
        match self.try_build(text, size, bold) {
            Ok(image) => image,
            Err(TextError::EmptyText) => Image::default(),
            Err(e) => {
                log::warn!("text {text:?} not rendered: {e}");
                Image::default()
            }
        }
    }
}
