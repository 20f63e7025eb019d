use bytemuck::{Pod, Zeroable};

use crate::math::Mat4;

/// Per-object transform block.
///
/// Matrices are stored column-major as WGSL/GLSL expect, i.e. the transpose of
/// the row-major [`Mat4`].
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TransformUniform {
    pub modelview: [f32; 16],
    pub projection: [f32; 16],
}

impl TransformUniform {
    pub fn new(modelview: &Mat4, projection: &Mat4) -> Self {
        Self {
            modelview: modelview.to_gpu_array(),
            projection: projection.to_gpu_array(),
        }
    }
}

/// Text tint; the texture supplies coverage only.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TintUniform {
    pub color: [f32; 4],
}
