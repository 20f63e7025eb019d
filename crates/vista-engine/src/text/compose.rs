//! Bitmap compositing of a laid-out string into one image.

use crate::image::Image;

use super::layout::TextLayout;

/// Writes every glyph of `layout` into `image`, consuming (and releasing) the glyphs.
///
/// The pen starts at `(0, y_max)`: x from the left edge, y the baseline row
/// counted down from the top. Each glyph lands at
/// `(pen.x + bearing_x, pen.y - bearing_y)` and the pen then moves by `advance_x`.
///
/// Glyph pixels outside the image are clipped; returns how many were dropped.
pub fn composite(layout: TextLayout, image: &mut Image) -> usize {
    let (glyphs, bounds) = layout.into_parts();
    debug_assert!(image.is_empty() || image.channels() == 1);

    let mut pen_x = 0i32;
    let pen_y = bounds.y_max;
    let mut dropped = 0usize;

    for glyph in glyphs {
        let m = glyph.metrics;
        let x = pen_x + m.bearing_x;
        let y = pen_y - m.bearing_y;
        if m.width > 0 && m.height > 0 {
            dropped += image.blit(glyph.bitmap(), m.width, m.height, x, y);
        }
        pen_x += m.advance_x;
    }

    if dropped > 0 {
        log::trace!("clipped {dropped} glyph pixels outside the string box");
    }
    dropped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::engine::GlyphRasterizer;
    use crate::text::layout::layout_text;
    use crate::text::test_support::BlockRasterizer;

    fn laid_out(text: &str, px: f32) -> (TextLayout, Image) {
        let mut e = BlockRasterizer::new();
        e.set_pixel_size(px).unwrap();
        let layout = layout_text(&mut e, text, None, None).unwrap();
        let b = layout.bounds();
        let image = Image::new(b.width(), b.height(), 1);
        (layout, image)
    }

    #[test]
    fn glyphs_land_at_pen_plus_bearing() {
        let (layout, mut image) = laid_out("AB", 16.0);
        assert_eq!((image.width(), image.height()), (20, 12));
        let dropped = composite(layout, &mut image);
        assert_eq!(dropped, 0);

        // 'A' occupies columns 1..9, 'B' columns 11..19, every row.
        let row = image.row(0).unwrap();
        assert_eq!(row[0], 0);
        assert!(row[1..9].iter().all(|&p| p == b'A'));
        assert_eq!(row[9], 0);
        assert_eq!(row[10], 0);
        assert!(row[11..19].iter().all(|&p| p == b'B'));
        assert_eq!(row[19], 0);
        assert_eq!(image.row(11).unwrap(), row);
    }

    #[test]
    fn baseline_alignment_with_descender() {
        let (layout, mut image) = laid_out("Ag", 16.0);
        assert_eq!(image.height(), 16);
        composite(layout, &mut image);

        // 'A' sits on the baseline: rows 0..12. 'g' is shifted down by its descent.
        assert_eq!(image.pixel(1, 0), Some(&[b'A'][..]));
        assert_eq!(image.pixel(1, 11), Some(&[b'A'][..]));
        assert_eq!(image.pixel(1, 12), Some(&[0][..]));
        assert_eq!(image.pixel(11, 3), Some(&[0][..]));
        assert_eq!(image.pixel(11, 4), Some(&[b'g'][..]));
        assert_eq!(image.pixel(11, 15), Some(&[b'g'][..]));
    }

    #[test]
    fn spaces_only_move_the_pen() {
        let (layout, mut image) = laid_out("A A", 16.0);
        composite(layout, &mut image);
        let row = image.row(5).unwrap();
        // Second 'A' starts at 10 + 4 + 1.
        assert_eq!(row[14], 0);
        assert_eq!(row[15], b'A');
    }

    #[test]
    fn overhanging_bitmap_is_clipped() {
        // Last glyph's bitmap (bearing 1 + width 8) ends inside its advance (10),
        // so shrink the image to force a right-edge overhang.
        let (layout, _) = laid_out("A", 16.0);
        let mut narrow = Image::new(5, 12, 1);
        let dropped = composite(layout, &mut narrow);
        assert_eq!(dropped, 4 * 12);
        assert!(narrow.row(0).unwrap()[1..5].iter().all(|&p| p == b'A'));
    }
}
