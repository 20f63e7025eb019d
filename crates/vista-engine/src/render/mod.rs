//! GPU upload boundary.
//!
//! Plain-old-data layouts for vertices and uniforms, plus texture upload for text
//! images. Pipelines and draw calls belong to the application.
//!
//! Convention:
//! - CPU matrices are row-major [`Mat4`](crate::math::Mat4); uniforms carry their transpose.
//! - Text textures are `R8Unorm` coverage, tinted in the shader.

mod ctx;
mod texture;
mod uniform;
mod vertex;

pub use ctx::RenderCtx;
pub use texture::TextTexture;
pub use uniform::{TintUniform, TransformUniform};
pub use vertex::{ShapeVertex, TexturedVertex};
