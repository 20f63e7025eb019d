//! The sample scene: one shape per topology along the bottom, three strings above.

use vista_engine::math::Vec3;
use vista_engine::paint::Color;
use vista_engine::scene::{Placement, Scene, Shape, Text, Topology};

pub const WIN_W: f32 = 1280.0;
pub const WIN_H: f32 = 720.0;
pub const DEFAULT_SCALE: f32 = 1.0;
pub const CLEAR_COLOR: Color = Color::rgba(200, 200, 200, 255);

const ZIGZAG: [[f32; 2]; 6] = [
    [-40.0, -40.0],
    [-20.0, 20.0],
    [0.0, -40.0],
    [20.0, 20.0],
    [40.0, -40.0],
    [60.0, 20.0],
];

const ZIGZAG_COLORS: [Color; 6] = [
    Color::rgba(255, 0, 0, 255),
    Color::rgba(0, 255, 0, 255),
    Color::rgba(0, 0, 255, 255),
    Color::rgba(255, 255, 0, 255),
    Color::rgba(0, 255, 255, 255),
    Color::rgba(255, 0, 255, 255),
];

const SHAPES: [(Topology, [f32; 2]); 7] = [
    (Topology::Lines, [80.0, 80.0]),
    (Topology::LineStrip, [220.0, 80.0]),
    (Topology::LineLoop, [360.0, 80.0]),
    (Topology::Triangles, [500.0, 80.0]),
    (Topology::TriangleStrip, [640.0, 80.0]),
    (Topology::TriangleFan, [780.0, 80.0]),
    (Topology::Points, [920.0, 80.0]),
];

pub struct SampleText {
    pub name: &'static str,
    pub content: &'static str,
    pub position: [f32; 2],
    pub color: Color,
    pub size: f32,
    pub bold: bool,
}

pub const TEXTS: [SampleText; 3] = [
    SampleText {
        name: "ascii",
        content: "abcdefghijklmnopqrstuvwxyz",
        position: [350.0, 160.0],
        color: Color::rgba(255, 0, 0, 255),
        size: 32.0,
        bold: false,
    },
    SampleText {
        name: "kana",
        content: "さんぷる　サンプル　ｻﾝﾌﾟﾙ",
        position: [180.0, 200.0],
        color: Color::rgba(255, 255, 0, 255),
        size: 16.0,
        bold: false,
    },
    SampleText {
        name: "bold",
        content: "太字Bold",
        position: [100.0, 230.0],
        color: Color::rgba(0, 0, 255, 255),
        size: 16.0,
        bold: true,
    },
];

fn at([x, y]: [f32; 2]) -> Placement {
    Placement::at(Vec3::new(x, y, 0.0))
}

/// Builds the scene. Texts sit one layer above the shapes.
pub fn build_scene() -> Scene {
    let mut scene = Scene::new();

    let vertices: Vec<Vec3> = ZIGZAG.iter().map(|&[x, y]| Vec3::new(x, y, 0.0)).collect();
    for (topology, pos) in SHAPES {
        let shape = Shape::sequential(topology, vertices.clone(), ZIGZAG_COLORS.to_vec())
            .with_placement(at(pos));
        scene.push_shape(0, shape);
    }

    for t in &TEXTS {
        let text = Text::new(t.content)
            .with_size(t.size)
            .with_bold(t.bold)
            .with_color(t.color)
            .with_placement(at(t.position));
        scene.push_text(1, text);
    }

    scene
}
