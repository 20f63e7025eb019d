//! Deterministic in-memory rasterizer for layout and compositing tests.

use super::engine::GlyphRasterizer;
use super::error::TextError;
use super::glyph::{GlyphMetrics, RasterizedGlyph};

/// Rasterizes every printable ASCII character as a solid block filled with its
/// own code point, so tests can find where each glyph landed.
///
/// At pixel size `px`: blocks are `px/2` wide and `3px/4` tall, sit on the
/// baseline (descenders `gjpqy` drop `px/4` below it), have a left bearing of 1
/// and advance `width + 2`. Space is empty with advance `px/4`. Anything else
/// maps to index 0, a block filled with `0x7f`.
#[derive(Debug, Default)]
pub(crate) struct BlockRasterizer {
    px: Option<u32>,
    pub corrupt_bitmaps: bool,
    pub fail_on: Option<char>,
    pub rasterize_calls: usize,
}

impl BlockRasterizer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GlyphRasterizer for BlockRasterizer {
    fn set_pixel_size(&mut self, px: f32) -> Result<(), TextError> {
        if !(px > 0.0 && px.is_finite()) {
            return Err(TextError::InvalidSize(px));
        }
        self.px = Some(px.round() as u32);
        Ok(())
    }

    fn glyph_index(&self, ch: char) -> u16 {
        if ch == ' ' || ch.is_ascii_graphic() { ch as u16 } else { 0 }
    }

    fn rasterize(&mut self, index: u16) -> Result<RasterizedGlyph, TextError> {
        self.rasterize_calls += 1;
        let px = self.px.ok_or_else(|| TextError::Rasterize("pixel size not set".into()))?;
        let ch = char::from_u32(u32::from(index)).unwrap_or('\0');
        if self.fail_on == Some(ch) {
            return Err(TextError::Rasterize(format!("refusing {ch:?}")));
        }

        if ch == ' ' {
            let metrics = GlyphMetrics { advance_x: (px / 4) as i32, ..GlyphMetrics::default() };
            return Ok(RasterizedGlyph { metrics, bitmap: Vec::new() });
        }

        let width = (px / 2).max(1);
        let height = (px * 3 / 4).max(1);
        let descent = if "gjpqy".contains(ch) { (px / 4) as i32 } else { 0 };
        let fill = if index == 0 { 0x7f } else { index as u8 };

        let mut bitmap = vec![fill; (width * height) as usize];
        if self.corrupt_bitmaps {
            bitmap.pop();
        }

        Ok(RasterizedGlyph {
            metrics: GlyphMetrics {
                width,
                height,
                bearing_x: 1,
                bearing_y: height as i32 - descent,
                advance_x: width as i32 + 2,
                advance_y: 0,
            },
            bitmap,
        })
    }
}
