//! Per-character glyph extraction.

use super::engine::GlyphRasterizer;
use super::error::TextError;

/// Placement metrics of one rasterized glyph, in whole pixels.
///
/// Bearings are measured from the pen origin on the baseline to the bitmap's
/// top-left corner, with `bearing_y` positive upwards.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct GlyphMetrics {
    pub width: u32,
    pub height: u32,
    pub bearing_x: i32,
    pub bearing_y: i32,
    pub advance_x: i32,
    pub advance_y: i32,
}

/// Tight pixel box of a glyph relative to the pen origin (y up).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct GlyphBox {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl GlyphBox {
    pub fn from_metrics(m: &GlyphMetrics) -> Self {
        Self {
            x_min: m.bearing_x,
            x_max: m.bearing_x + m.width as i32,
            y_min: m.bearing_y - m.height as i32,
            y_max: m.bearing_y,
        }
    }
}

/// Output of a single engine rasterization: metrics plus an 8-bit coverage
/// bitmap of `width * height` bytes, rows top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterizedGlyph {
    pub metrics: GlyphMetrics,
    pub bitmap: Vec<u8>,
}

/// One character ready for compositing.
///
/// Owns its bitmap; dropping the glyph releases it.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub ch: char,
    /// Engine glyph index; 0 is the font's missing-glyph placeholder.
    pub index: u16,
    pub metrics: GlyphMetrics,
    pub bounds: GlyphBox,
    bitmap: Vec<u8>,
}

impl Glyph {
    #[inline]
    pub fn bitmap(&self) -> &[u8] {
        &self.bitmap
    }
}

/// Looks up, rasterizes and optionally emboldens `ch` at the engine's current size.
///
/// `bold_strength` is the emboldening width in pixels; `None` keeps the regular weight.
pub fn extract_glyph<R: GlyphRasterizer + ?Sized>(
    engine: &mut R,
    ch: char,
    bold_strength: Option<u32>,
) -> Result<Glyph, TextError> {
    let index = engine.glyph_index(ch);
    if index == 0 && !ch.is_whitespace() {
        log::debug!("no glyph for {ch:?}; using the missing-glyph placeholder");
    }

    let mut raster = engine.rasterize(index)?;
    let expected = raster.metrics.width as usize * raster.metrics.height as usize;
    if raster.bitmap.len() != expected {
        return Err(TextError::Rasterize(format!(
            "glyph {index} bitmap has {} bytes, expected {expected}",
            raster.bitmap.len()
        )));
    }

    if let Some(strength) = bold_strength.filter(|&s| s > 0) {
        raster = embolden(raster, strength);
    }

    Ok(Glyph {
        ch,
        index,
        bounds: GlyphBox::from_metrics(&raster.metrics),
        metrics: raster.metrics,
        bitmap: raster.bitmap,
    })
}

/// Synthetic bold: dilates the coverage bitmap by `strength` pixels.
///
/// The bitmap grows by `strength` to the right and upwards; the bottom edge keeps its
/// offset from the baseline and the advance grows by the same amount.
pub fn embolden(glyph: RasterizedGlyph, strength: u32) -> RasterizedGlyph {
    let RasterizedGlyph { mut metrics, bitmap } = glyph;
    metrics.advance_x += strength as i32;

    if metrics.width == 0 || metrics.height == 0 {
        return RasterizedGlyph { metrics, bitmap };
    }

    let s = strength as usize;
    let (w, h) = (metrics.width as usize, metrics.height as usize);
    let (ow, oh) = (w + s, h + s);

    // Separable max filter: horizontal pass, then vertical.
    let mut wide = vec![0u8; ow * h];
    for y in 0..h {
        let src = &bitmap[y * w..(y + 1) * w];
        let dst = &mut wide[y * ow..(y + 1) * ow];
        for (x, out) in dst.iter_mut().enumerate() {
            let lo = x.saturating_sub(s);
            let hi = x.min(w - 1);
            if lo <= hi {
                *out = src[lo..=hi].iter().copied().max().unwrap_or(0);
            }
        }
    }

    let mut out = vec![0u8; ow * oh];
    for y in 0..oh {
        let lo = y.saturating_sub(s);
        let hi = y.min(h - 1);
        if lo > hi {
            continue;
        }
        for x in 0..ow {
            out[y * ow + x] = (lo..=hi).map(|sy| wide[sy * ow + x]).max().unwrap_or(0);
        }
    }

    metrics.width = ow as u32;
    metrics.height = oh as u32;
    metrics.bearing_y += strength as i32;
    RasterizedGlyph { metrics, bitmap: out }
}
