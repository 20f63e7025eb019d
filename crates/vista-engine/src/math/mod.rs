//! Transform math shared by scene placement and GPU upload.
//!
//! Conventions:
//! - right-handed world space, column vectors (`M * v`)
//! - `Mat4` is stored row-major; translation lives in the last column
//! - `A * B` applies `B` first
//!
//! Matrices are transposed on the way to the GPU (see [`Mat4::to_gpu_array`]).

mod angle;
mod mat4;
mod vec3;

pub use angle::{Deg, Rad};
pub use mat4::Mat4;
pub use vec3::Vec3;
