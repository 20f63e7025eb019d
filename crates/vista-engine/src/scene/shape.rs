use crate::math::Vec3;
use crate::paint::Color;
use crate::render::ShapeVertex;

use super::Placement;

/// How a shape's index list is assembled into primitives.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    Points,
    Lines,
    LineStrip,
    /// Line strip closed back to its first vertex.
    LineLoop,
    Triangles,
    TriangleStrip,
    /// Triangles sharing the first vertex.
    TriangleFan,
}

/// Indexed, per-vertex colored geometry with a placement.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub topology: Topology,
    pub vertices: Vec<Vec3>,
    pub indices: Vec<u32>,
    pub colors: Vec<Color>,
    pub placement: Placement,
}

impl Shape {
    pub fn new(topology: Topology, vertices: Vec<Vec3>, indices: Vec<u32>, colors: Vec<Color>) -> Self {
        Self {
            topology,
            vertices,
            indices,
            colors,
            placement: Placement::default(),
        }
    }

    /// Shape drawn through its vertices in order (`indices = 0..n`).
    pub fn sequential(topology: Topology, vertices: Vec<Vec3>, colors: Vec<Color>) -> Self {
        let indices = (0..vertices.len() as u32).collect();
        Self::new(topology, vertices, indices, colors)
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Vertex data for upload.
    ///
    /// Missing colors repeat the last given color, or white when none are given.
    pub fn vertices(&self) -> Vec<ShapeVertex> {
        if self.colors.len() != self.vertices.len() {
            log::debug!(
                "Shape: {} colors for {} vertices, padding",
                self.colors.len(),
                self.vertices.len()
            );
        }
        let fallback = self.colors.last().copied().unwrap_or_else(Color::white);

        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| ShapeVertex {
                position: v.to_array(),
                color: self.colors.get(i).copied().unwrap_or(fallback).to_f32_array(),
            })
            .collect()
    }

    /// Topology after lowering: never `LineLoop` or `TriangleFan`.
    pub fn gpu_topology(&self) -> Topology {
        match self.topology {
            Topology::LineLoop => Topology::LineStrip,
            Topology::TriangleFan => Topology::Triangles,
            t => t,
        }
    }

    /// Index list matching [`gpu_topology`](Self::gpu_topology).
    ///
    /// Out-of-range indices are dropped with a warning.
    pub fn gpu_indices(&self) -> Vec<u32> {
        let n = self.vertices.len() as u32;
        let valid: Vec<u32> = self.indices.iter().copied().filter(|&i| i < n).collect();
        if valid.len() != self.indices.len() {
            log::warn!(
                "Shape: dropped {} indices outside 0..{n}",
                self.indices.len() - valid.len()
            );
        }

        match self.topology {
            Topology::LineLoop => {
                let mut out = valid;
                if let Some(&first) = out.first() {
                    if out.len() > 1 {
                        out.push(first);
                    }
                }
                out
            }
            Topology::TriangleFan => {
                let Some((&hub, rest)) = valid.split_first() else {
                    return Vec::new();
                };
                rest.windows(2)
                    .flat_map(|w| [hub, w[0], w[1]])
                    .collect()
            }
            _ => valid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(topology: Topology) -> Shape {
        Shape::sequential(
            topology,
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![Color::rgb(255, 0, 0)],
        )
    }

    // ── lowering ────────────────────────────────────────────────────────

    #[test]
    fn line_loop_closes_back_to_first() {
        let s = square(Topology::LineLoop);
        assert_eq!(s.gpu_topology(), Topology::LineStrip);
        assert_eq!(s.gpu_indices(), vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn triangle_fan_becomes_list() {
        let s = square(Topology::TriangleFan);
        assert_eq!(s.gpu_topology(), Topology::Triangles);
        assert_eq!(s.gpu_indices(), vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn fan_with_too_few_indices_is_empty() {
        let mut s = square(Topology::TriangleFan);
        s.indices = vec![0, 1];
        assert!(s.gpu_indices().is_empty());
        s.indices.clear();
        assert!(s.gpu_indices().is_empty());
    }

    #[test]
    fn native_topologies_pass_through() {
        let s = square(Topology::Lines);
        assert_eq!(s.gpu_topology(), Topology::Lines);
        assert_eq!(s.gpu_indices(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn out_of_range_indices_are_dropped() {
        let mut s = square(Topology::Triangles);
        s.indices = vec![0, 1, 9, 2];
        assert_eq!(s.gpu_indices(), vec![0, 1, 2]);
    }

    // ── vertex data ─────────────────────────────────────────────────────

    #[test]
    fn colors_pad_with_last() {
        let v = square(Topology::Points).vertices();
        assert_eq!(v.len(), 4);
        assert!(v.iter().all(|v| v.color == [1.0, 0.0, 0.0, 1.0]));
        assert_eq!(v[2].position, [1.0, 1.0, 0.0]);
    }

    #[test]
    fn no_colors_means_white() {
        let mut s = square(Topology::Points);
        s.colors.clear();
        assert!(s.vertices().iter().all(|v| v.color == [1.0; 4]));
    }
}
