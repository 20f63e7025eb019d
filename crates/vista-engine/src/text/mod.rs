//! Text rasterization.
//!
//! A [`TextBuilder`] turns a string into one single-channel [`Image`](crate::image::Image):
//!
//! 1. configure the engine's pixel size
//! 2. extract each character's glyph ([`extract_glyph`]) and grow the string box
//!    ([`layout_text`])
//! 3. allocate an image of the box size and blit every glyph at its pen offset
//!    ([`composite`])
//!
//! The font engine sits behind [`GlyphRasterizer`]; [`FontEngine`] is the
//! `fontdue`-backed implementation.

mod builder;
mod compose;
mod engine;
mod error;
mod glyph;
mod layout;

#[cfg(test)]
pub(crate) mod test_support;

pub use builder::{TextBuilder, TextConfig};
pub use compose::composite;
pub use engine::{FontEngine, GlyphRasterizer};
pub use error::{FontLoadError, TextError};
pub use glyph::{embolden, extract_glyph, Glyph, GlyphBox, GlyphMetrics, RasterizedGlyph};
pub use layout::{layout_text, StringBoundingBox, TextLayout};
