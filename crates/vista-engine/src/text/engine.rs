use std::path::Path;

use super::error::{FontLoadError, TextError};
use super::glyph::{GlyphMetrics, RasterizedGlyph};

/// Font-rasterization seam used by the text layout engine.
///
/// An engine holds a loaded face and a current pixel size. Size is engine-wide
/// state, so a single engine must not be shared between concurrent builds; the
/// `&mut self` receivers enforce that.
pub trait GlyphRasterizer {
    /// Sets the pixel size used by subsequent [`rasterize`](Self::rasterize) calls.
    fn set_pixel_size(&mut self, px: f32) -> Result<(), TextError>;

    /// Maps a character to a glyph index. Unknown characters map to 0.
    fn glyph_index(&self, ch: char) -> u16;

    /// Rasterizes a glyph to an 8-bit coverage bitmap at the current size.
    fn rasterize(&mut self, index: u16) -> Result<RasterizedGlyph, TextError>;
}

/// TrueType/OpenType rasterizer backed by `fontdue`.
///
/// The face is parsed once on construction and released on drop.
pub struct FontEngine {
    font: fontdue::Font,
    px: Option<f32>,
}

impl FontEngine {
    /// Parses a TrueType or OpenType font from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        log::debug!("font loaded ({} glyphs)", font.glyph_count());
        Ok(Self { font, px: None })
    }

    /// Reads and parses a font file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FontLoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| FontLoadError(format!("{}: {e}", path.display())))?;
        Self::from_bytes(&bytes)
    }

    /// Current pixel size, if one has been set.
    #[inline]
    pub fn pixel_size(&self) -> Option<f32> {
        self.px
    }

    /// Baseline-to-baseline distance at the current size.
    pub fn line_height(&self) -> Option<f32> {
        let px = self.px?;
        self.font.horizontal_line_metrics(px).map(|m| m.new_line_size)
    }
}

impl GlyphRasterizer for FontEngine {
    fn set_pixel_size(&mut self, px: f32) -> Result<(), TextError> {
        if !(px > 0.0 && px.is_finite()) {
            return Err(TextError::InvalidSize(px));
        }
        self.px = Some(px);
        Ok(())
    }

    fn glyph_index(&self, ch: char) -> u16 {
        self.font.lookup_glyph_index(ch)
    }

    fn rasterize(&mut self, index: u16) -> Result<RasterizedGlyph, TextError> {
        let Some(px) = self.px else {
            return Err(TextError::Rasterize("pixel size not set".into()));
        };
        if index >= self.font.glyph_count() {
            return Err(TextError::Rasterize(format!(
                "glyph index {index} out of range ({} glyphs)",
                self.font.glyph_count()
            )));
        }

        let (m, bitmap) = self.font.rasterize_indexed(index, px);
        let metrics = GlyphMetrics {
            width: m.width as u32,
            height: m.height as u32,
            bearing_x: m.xmin,
            // fontdue reports the bottom edge; the layout wants the top.
            bearing_y: m.ymin + m.height as i32,
            advance_x: m.advance_width.round() as i32,
            advance_y: m.advance_height.round() as i32,
        };
        Ok(RasterizedGlyph { metrics, bitmap })
    }
}
