use crate::render::TransformUniform;
use crate::text::{GlyphRasterizer, TextBuilder};

use super::{Camera, DrawOrder, Placement, Shape, Text};

/// Something the scene can draw.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneObject {
    Shape(Shape),
    Text(Text),
}

impl SceneObject {
    pub fn placement(&self) -> &Placement {
        match self {
            SceneObject::Shape(s) => &s.placement,
            SceneObject::Text(t) => &t.placement,
        }
    }
}

/// A scene object with its paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    pub order: DrawOrder,
    pub object: SceneObject,
}

impl SceneItem {
    /// Uniform block for drawing this item through `camera`.
    pub fn transform(&self, camera: &Camera) -> TransformUniform {
        let modelview = self.object.placement().modelview(camera);
        TransformUniform::new(&modelview, camera.projection())
    }
}

/// Handle returned by the `push_*` methods.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ItemId(usize);

/// Objects to draw, kept in paint order (z, then insertion).
///
/// Paint-order iteration reuses an internal index buffer; nothing is re-sorted
/// until an item is added.
#[derive(Debug, Default)]
pub struct Scene {
    items: Vec<SceneItem>,
    next_seq: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every item. Keeps allocated capacity.
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_seq = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    pub fn push(&mut self, z: i32, object: SceneObject) -> ItemId {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);

        self.items.push(SceneItem {
            order: DrawOrder::new(z, seq),
            object,
        });
        self.sorted_dirty = true;
        ItemId(self.items.len() - 1)
    }

    #[inline]
    pub fn push_shape(&mut self, z: i32, shape: Shape) -> ItemId {
        self.push(z, SceneObject::Shape(shape))
    }

    #[inline]
    pub fn push_text(&mut self, z: i32, text: Text) -> ItemId {
        self.push(z, SceneObject::Text(text))
    }

    pub fn get(&self, id: ItemId) -> Option<&SceneItem> {
        self.items.get(id.0)
    }

    /// Mutable access to an item's object. Its paint order is fixed.
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut SceneObject> {
        self.items.get_mut(id.0).map(|item| &mut item.object)
    }

    /// Rasterizes every text that has not been rasterized yet.
    ///
    /// Returns how many were rasterized by this call.
    pub fn prepare_text<R: GlyphRasterizer>(&mut self, builder: &mut TextBuilder<R>) -> usize {
        let mut count = 0;
        for item in &mut self.items {
            if let SceneObject::Text(text) = &mut item.object {
                if !text.is_rasterized() {
                    if text.rasterize(builder).is_empty() {
                        log::debug!("scene text {:?} rasterized to nothing", text.content());
                    }
                    count += 1;
                }
            }
        }
        count
    }

    /// Items back-to-front.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &SceneItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].order.cmp(&self.items[b].order));
        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Mat4, Vec3};
    use crate::paint::Color;
    use crate::scene::Topology;
    use crate::text::test_support::BlockRasterizer;

    fn dot(x: f32) -> Shape {
        Shape::sequential(Topology::Points, vec![Vec3::new(x, 0.0, 0.0)], vec![Color::white()])
    }

    fn xs(scene: &mut Scene) -> Vec<f32> {
        scene
            .iter_in_paint_order()
            .map(|item| match &item.object {
                SceneObject::Shape(s) => s.vertices[0].x,
                SceneObject::Text(_) => f32::NAN,
            })
            .collect()
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn paint_order_is_z_then_insertion() {
        let mut scene = Scene::new();
        scene.push_shape(1, dot(0.0));
        scene.push_shape(0, dot(1.0));
        scene.push_shape(1, dot(2.0));
        scene.push_shape(-1, dot(3.0));
        assert_eq!(xs(&mut scene), vec![3.0, 1.0, 0.0, 2.0]);
    }

    #[test]
    fn push_after_iteration_resorts() {
        let mut scene = Scene::new();
        scene.push_shape(5, dot(0.0));
        assert_eq!(xs(&mut scene), vec![0.0]);
        scene.push_shape(0, dot(1.0));
        assert_eq!(xs(&mut scene), vec![1.0, 0.0]);
    }

    #[test]
    fn clear_resets() {
        let mut scene = Scene::new();
        scene.push_shape(0, dot(0.0));
        scene.clear();
        assert!(scene.is_empty());
        assert_eq!(scene.iter_in_paint_order().count(), 0);
    }

    // ── text ──────────────────────────────────────────────────────────────

    #[test]
    fn prepare_text_rasterizes_pending_only() {
        let mut b = TextBuilder::new(BlockRasterizer::new());
        let mut scene = Scene::new();
        let a = scene.push_text(0, Text::new("A").with_size(16.0));
        scene.push_shape(0, dot(0.0));
        scene.push_text(1, Text::new("").with_size(16.0));

        assert_eq!(scene.prepare_text(&mut b), 2);
        assert_eq!(scene.prepare_text(&mut b), 0);

        match scene.get_mut(a) {
            Some(SceneObject::Text(t)) => assert!(t.quad().is_some()),
            other => panic!("unexpected {other:?}"),
        }
    }

    // ── transforms ────────────────────────────────────────────────────────

    #[test]
    fn item_transform_uses_camera_and_placement() {
        let camera = Camera::screen(200.0, 100.0, 1.0);
        let mut scene = Scene::new();
        let id = scene.push_shape(0, dot(0.0).with_placement(Placement::at(Vec3::new(100.0, 50.0, 0.0))));

        let item = scene.get(id).unwrap();
        let u = item.transform(&camera);
        let mv = *camera.view() * Mat4::translate(Vec3::new(100.0, 50.0, 0.0));
        assert_eq!(u.modelview, mv.to_gpu_array());
        assert_eq!(u.projection, camera.projection().to_gpu_array());
    }
}
