use crate::math::{Mat4, Vec3};

use super::Camera;

/// Object-to-world placement: scale about the origin, then translate.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub scale: Vec3,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position: Vec3::zero(),
            scale: Vec3::splat(1.0),
        }
    }
}

impl Placement {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// `translate(position) * scale(scale)`.
    pub fn model(&self) -> Mat4 {
        Mat4::translate(self.position) * Mat4::scale(self.scale)
    }

    /// `view * model`.
    pub fn modelview(&self, camera: &Camera) -> Mat4 {
        *camera.view() * self.model()
    }
}
