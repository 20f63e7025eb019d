use crate::image::Image;
use crate::paint::Color;
use crate::render::{TexturedVertex, TintUniform};
use crate::text::{GlyphRasterizer, TextBuilder};

use super::Placement;

/// A string placed in the scene.
///
/// The string is rasterized once, on the first [`rasterize`](Text::rasterize)
/// call; later calls reuse the cached image. Changing the content means building
/// a new `Text`.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    content: String,
    size: f32,
    bold: bool,
    pub color: Color,
    pub placement: Placement,
    image: Option<Image>,
}

impl Text {
    pub const DEFAULT_SIZE: f32 = 8.0;

    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: Self::DEFAULT_SIZE,
            bold: false,
            color: Color::black(),
            placement: Placement::default(),
            image: None,
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    #[inline]
    pub fn is_rasterized(&self) -> bool {
        self.image.is_some()
    }

    /// Rasterized image, if [`rasterize`](Self::rasterize) has run.
    #[inline]
    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    pub fn rasterize<R: GlyphRasterizer>(&mut self, builder: &mut TextBuilder<R>) -> &Image {
        let (content, size, bold) = (&self.content, self.size, self.bold);
        self.image
            .get_or_insert_with(|| builder.build(content, size, bold))
    }

    /// Shader tint for the coverage texture.
    pub fn tint(&self) -> TintUniform {
        TintUniform { color: self.color.to_f32_array() }
    }

    /// Quad covering the image, centred on the local origin, in triangle-strip
    /// order: top-left, top-right, bottom-left, bottom-right.
    ///
    /// `None` before rasterization or when the image is the empty sentinel.
    pub fn quad(&self) -> Option<[TexturedVertex; 4]> {
        let image = self.image.as_ref().filter(|img| !img.is_empty())?;
        let hw = image.width() as f32 / 2.0;
        let hh = image.height() as f32 / 2.0;

        let v = |x: f32, y: f32, u: f32, t: f32| TexturedVertex {
            position: [x, y, 0.0],
            uv: [u, t],
        };
        Some([
            v(-hw, hh, 0.0, 0.0),
            v(hw, hh, 1.0, 0.0),
            v(-hw, -hh, 0.0, 1.0),
            v(hw, -hh, 1.0, 1.0),
        ])
    }
}
