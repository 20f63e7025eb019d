//! Vista engine crate.
//!
//! Row-major transform math, string-to-bitmap text rasterization, scene
//! placement for shapes and text, and the plain-data types handed to the GPU.

pub mod image;
pub mod logging;
pub mod math;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;

pub use image::Image;
