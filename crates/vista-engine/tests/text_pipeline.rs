//! End-to-end: rasterizer -> builder -> Image -> scene text quad and uniforms.

use vista_engine::Image;
use vista_engine::math::Vec3;
use vista_engine::render::TransformUniform;
use vista_engine::scene::{Camera, Placement, Scene, SceneObject, Text};
use vista_engine::text::{
    GlyphMetrics, GlyphRasterizer, RasterizedGlyph, TextBuilder, TextConfig, TextError, composite,
    layout_text,
};

/// Fixed-size glyphs: `px/4` wide, `px` tall per visible char, advance `px/4 + 1`,
/// all sitting on the baseline. Spaces advance `px/4` with no bitmap.
#[derive(Default)]
struct FixedCells {
    px: u32,
}

impl GlyphRasterizer for FixedCells {
    fn set_pixel_size(&mut self, px: f32) -> Result<(), TextError> {
        self.px = px as u32;
        Ok(())
    }

    fn glyph_index(&self, ch: char) -> u16 {
        match ch {
            ' ' => 1,
            c if c.is_ascii_alphanumeric() => 2,
            _ => 0,
        }
    }

    fn rasterize(&mut self, index: u16) -> Result<RasterizedGlyph, TextError> {
        let w = self.px / 4;
        if index == 1 {
            return Ok(RasterizedGlyph {
                metrics: GlyphMetrics { advance_x: w as i32, ..GlyphMetrics::default() },
                bitmap: Vec::new(),
            });
        }
        let h = self.px;
        let fill = if index == 0 { 0x40 } else { 0xff };
        Ok(RasterizedGlyph {
            metrics: GlyphMetrics {
                width: w,
                height: h,
                bearing_x: 0,
                bearing_y: h as i32,
                advance_x: w as i32 + 1,
                advance_y: 0,
            },
            bitmap: vec![fill; (w * h) as usize],
        })
    }
}

fn column(img: &Image, x: u32) -> Vec<u8> {
    (0..img.height()).filter_map(|y| img.pixel(x, y).map(|p| p[0])).collect()
}

#[test]
fn string_image_has_cells_and_gaps() {
    let mut b = TextBuilder::new(FixedCells::default());
    let img = b.build("AB", 16.0, false);

    // two cells of 4 px with a 1 px gap after each
    assert_eq!((img.width(), img.height(), img.channels()), (10, 16, 1));
    assert!(column(&img, 0).iter().all(|&v| v == 0xff));
    assert!(column(&img, 4).iter().all(|&v| v == 0));
    assert!(column(&img, 5).iter().all(|&v| v == 0xff));
    assert!(column(&img, 9).iter().all(|&v| v == 0));
}

#[test]
fn missing_chars_use_notdef_cell() {
    let mut b = TextBuilder::new(FixedCells::default());
    let img = b.build("a字", 16.0, false);
    assert_eq!(img.width(), 10);
    assert_eq!(img.pixel(5, 0), Some(&[0x40][..]));
}

#[test]
fn manual_layout_and_composite_match_builder() {
    let mut engine = FixedCells::default();
    engine.set_pixel_size(8.0).unwrap();
    let layout = layout_text(&mut engine, "x y", None, None).unwrap();
    let bounds = layout.bounds();
    assert_eq!((bounds.width(), bounds.height()), (8, 8));

    let mut img = Image::new(bounds.width(), bounds.height(), 1);
    assert_eq!(composite(layout, &mut img), 0);

    let mut b = TextBuilder::new(FixedCells::default());
    assert_eq!(b.build("x y", 8.0, false), img);
}

#[test]
fn sentinel_and_limits() {
    let mut b = TextBuilder::with_config(FixedCells::default(), TextConfig::default().with_glyph_limit(4));
    assert!(b.build("", 16.0, false).is_empty());
    assert!(b.build("abc", 0.0, false).is_empty());
    assert!(b.build("abcde", 16.0, false).is_empty());
    assert!(!b.build("abcd", 16.0, false).is_empty());
}

#[test]
fn bold_grows_the_image() {
    let mut b = TextBuilder::with_config(FixedCells::default(), TextConfig::default().with_bold_strength(1));
    let regular = b.build("ab", 16.0, false);
    let bold = b.build("ab", 16.0, true);
    assert!(bold.width() > regular.width());
    assert!(bold.height() > regular.height());
}

#[test]
fn scene_text_quad_and_transform() {
    let mut b = TextBuilder::new(FixedCells::default());
    let mut scene = Scene::new();
    let id = scene.push_text(
        1,
        Text::new("AB")
            .with_size(16.0)
            .with_placement(Placement::at(Vec3::new(640.0, 360.0, 0.0))),
    );
    assert_eq!(scene.prepare_text(&mut b), 1);

    let camera = Camera::screen(1280.0, 720.0, 1.0);
    let item = scene.get(id).unwrap();
    let SceneObject::Text(text) = &item.object else {
        panic!("expected text");
    };

    let quad = text.quad().unwrap();
    assert_eq!(quad[0].position, [-5.0, 8.0, 0.0]);
    assert_eq!(quad[3].position, [5.0, -8.0, 0.0]);

    // placed at the screen centre, the quad centre lands on the clip origin
    let mvp = *camera.projection() * text.placement.modelview(&camera);
    let centre = mvp.transform_point(Vec3::zero());
    assert!(centre.x.abs() < 1e-5 && centre.y.abs() < 1e-5);

    let u: TransformUniform = item.transform(&camera);
    assert_eq!(bytemuck::bytes_of(&u).len(), 128);
}
