//! Scene placement.
//!
//! Responsibilities:
//! - build the screen [`Camera`] (view + orthographic projection)
//! - hold shapes and texts with their [`Placement`]
//! - provide deterministic paint order (z + insertion order)
//! - lower shape topologies and text images to GPU-ready vertex data

mod camera;
mod list;
mod order;
mod placement;
mod shape;
mod text;

pub use camera::{Camera, CameraConfig};
pub use list::{ItemId, Scene, SceneItem, SceneObject};
pub use order::DrawOrder;
pub use placement::Placement;
pub use shape::{Shape, Topology};
pub use text::Text;
