//! String layout: per-glyph extraction plus a running bounding box.

use super::engine::GlyphRasterizer;
use super::error::TextError;
use super::glyph::{extract_glyph, Glyph};

/// Pixel bounds of a laid-out string, y up from the baseline.
///
/// `x_min` is pinned to the first pen origin (0); `x_max` is the summed advance.
/// `y_min`/`y_max` span every glyph's own box.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct StringBoundingBox {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl StringBoundingBox {
    fn start(glyph: &Glyph) -> Self {
        Self {
            x_min: 0,
            x_max: glyph.metrics.advance_x,
            y_min: glyph.bounds.y_min,
            y_max: glyph.bounds.y_max,
        }
    }

    fn extend(&mut self, glyph: &Glyph) {
        self.x_max += glyph.metrics.advance_x;
        self.y_min = self.y_min.min(glyph.bounds.y_min);
        self.y_max = self.y_max.max(glyph.bounds.y_max);
    }

    /// Width in pixels; never negative.
    #[inline]
    pub fn width(&self) -> u32 {
        (self.x_max - self.x_min).max(0) as u32
    }

    /// Height in pixels; never negative.
    #[inline]
    pub fn height(&self) -> u32 {
        (self.y_max - self.y_min).max(0) as u32
    }
}

/// Glyphs of one string in reading order plus their accumulated bounds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextLayout {
    glyphs: Vec<Glyph>,
    bounds: StringBoundingBox,
}

impl TextLayout {
    #[inline]
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    #[inline]
    pub fn bounds(&self) -> StringBoundingBox {
        self.bounds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    #[inline]
    pub(crate) fn into_parts(self) -> (Vec<Glyph>, StringBoundingBox) {
        (self.glyphs, self.bounds)
    }
}

/// Extracts every character of `text` through `engine` at its current size.
///
/// Glyph storage grows with the string. With `glyph_limit = Some(n)`, strings of
/// more than `n` characters are rejected before any glyph is rasterized.
pub fn layout_text<R: GlyphRasterizer + ?Sized>(
    engine: &mut R,
    text: &str,
    bold_strength: Option<u32>,
    glyph_limit: Option<usize>,
) -> Result<TextLayout, TextError> {
    let count = text.chars().count();
    if count == 0 {
        return Err(TextError::EmptyText);
    }
    if let Some(limit) = glyph_limit {
        if count > limit {
            return Err(TextError::GlyphLimitExceeded { limit, requested: count });
        }
    }

    let mut glyphs: Vec<Glyph> = Vec::with_capacity(count);
    let mut bounds = StringBoundingBox::default();

    for ch in text.chars() {
        let glyph = extract_glyph(engine, ch, bold_strength)?;
        if glyphs.is_empty() {
            bounds = StringBoundingBox::start(&glyph);
        } else {
            bounds.extend(&glyph);
        }
        glyphs.push(glyph);
    }

    log::trace!(
        "laid out {count} glyphs: {}x{} px",
        bounds.width(),
        bounds.height()
    );
    Ok(TextLayout { glyphs, bounds })
}
