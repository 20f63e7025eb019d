//! Vertex formats shared by scene objects and the draw-call layer.

use bytemuck::{Pod, Zeroable};

use crate::scene::Topology;

/// Colored shape vertex (28 bytes).
///
///  offset  0  position  [f32; 3]  loc 0
///  offset 12  color     [f32; 4]  loc 1
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ShapeVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl ShapeVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x4  // color
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Textured quad vertex for text images.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TexturedVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl TexturedVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x2  // uv
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TexturedVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

impl Topology {
    /// wgpu primitive topology, for the kinds wgpu draws natively.
    ///
    /// `LineLoop` and `TriangleFan` return `None`; lower them first with
    /// [`Shape::gpu_topology`](crate::scene::Shape::gpu_topology). Strip topologies
    /// need `strip_index_format: Some(Uint32)` in the pipeline.
    pub fn to_wgpu(self) -> Option<wgpu::PrimitiveTopology> {
        match self {
            Topology::Points => Some(wgpu::PrimitiveTopology::PointList),
            Topology::Lines => Some(wgpu::PrimitiveTopology::LineList),
            Topology::LineStrip => Some(wgpu::PrimitiveTopology::LineStrip),
            Topology::Triangles => Some(wgpu::PrimitiveTopology::TriangleList),
            Topology::TriangleStrip => Some(wgpu::PrimitiveTopology::TriangleStrip),
            Topology::LineLoop | Topology::TriangleFan => None,
        }
    }
}
