use std::fmt;

/// Error returned when a font face cannot be loaded.
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Error returned by [`TextBuilder::try_build`](super::TextBuilder::try_build).
///
/// [`TextBuilder::build`](super::TextBuilder::build) maps every variant to the
/// empty sentinel image.
#[derive(Debug, Clone, PartialEq)]
pub enum TextError {
    /// The input string has no characters.
    EmptyText,
    /// Pixel size is zero, negative or not finite.
    InvalidSize(f32),
    /// More characters than the configured glyph limit.
    GlyphLimitExceeded { limit: usize, requested: usize },
    /// The font engine rejected a request.
    Rasterize(String),
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextError::EmptyText => write!(f, "text is empty"),
            TextError::InvalidSize(size) => write!(f, "invalid pixel size {size}"),
            TextError::GlyphLimitExceeded { limit, requested } => {
                write!(f, "{requested} glyphs requested, limit is {limit}")
            }
            TextError::Rasterize(msg) => write!(f, "rasterization failed: {msg}"),
        }
    }
}

impl std::error::Error for TextError {}
