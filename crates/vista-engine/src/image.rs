//! Owned pixel buffers handed from text layout to texture upload.

/// Tightly packed 8-bit image, rows top to bottom.
///
/// The default value (zero size, no bytes) is the "nothing to draw" sentinel
/// returned by text layout on failure; check it with [`Image::is_empty`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    channels: u32,
    pixels: Vec<u8>,
}

impl Image {
    /// Allocates a zero-filled image of `width * height * channels` bytes.
    pub fn new(width: u32, height: u32, channels: u32) -> Self {
        let len = width as usize * height as usize * channels as usize;
        Self { width, height, channels, pixels: vec![0; len] }
    }

    /// Wraps existing bytes. Returns `None` when the length does not match.
    pub fn from_bytes(width: u32, height: u32, channels: u32, pixels: Vec<u8>) -> Option<Self> {
        let len = width as usize * height as usize * channels as usize;
        (pixels.len() == len).then_some(Self { width, height, channels, pixels })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.stride();
        let start = y as usize * stride;
        Some(&self.pixels[start..start + stride])
    }

    /// Channel bytes of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width {
            return None;
        }
        let c = self.channels as usize;
        let start = x as usize * c;
        self.row(y).map(|r| &r[start..start + c])
    }

    /// Copies a `src_w × src_h` block with the same channel count into this image
    /// with its top-left corner at `(x, y)`, overwriting destination bytes.
    ///
    /// Pixels falling outside the image are dropped; returns how many were.
    pub fn blit(&mut self, src: &[u8], src_w: u32, src_h: u32, x: i32, y: i32) -> usize {
        let c = self.channels as usize;
        let (sw, sh) = (src_w as i64, src_h as i64);
        let (dw, dh) = (self.width as i64, self.height as i64);
        let (x, y) = (x as i64, y as i64);
        debug_assert!(src.len() >= (sw * sh) as usize * c);

        let col_lo = (-x).clamp(0, sw);
        let col_hi = (dw - x).clamp(0, sw);
        let visible_cols = (col_hi - col_lo).max(0);

        let mut dropped = 0usize;
        let stride = self.stride();
        for row in 0..sh {
            let dy = y + row;
            if dy < 0 || dy >= dh || visible_cols == 0 {
                dropped += sw as usize;
                continue;
            }
            dropped += (sw - visible_cols) as usize;

            let src_start = ((row * sw + col_lo) as usize) * c;
            let dst_start = dy as usize * stride + ((x + col_lo) as usize) * c;
            let n = visible_cols as usize * c;
            self.pixels[dst_start..dst_start + n].copy_from_slice(&src[src_start..src_start + n]);
        }
        dropped
    }
}
