use crate::math::{Mat4, Vec3};

/// Eye placement and depth range for the screen camera.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraConfig {
    /// Distance of the eye in front of the z = 0 plane.
    pub eye_distance: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye_distance: 5.0,
            near: 1.0,
            far: 10.0,
        }
    }
}

/// View and projection pair for a 2D-style scene.
///
/// [`Camera::screen`] looks straight down -Z at the centre of a `width` x `height`
/// area with an orthographic volume covering `width / scale` x `height / scale`
/// units. Objects placed at z = 0 with pixel coordinates land on screen pixels
/// when `scale` is 1.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    view: Mat4,
    projection: Mat4,
}

impl Camera {
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self { view, projection }
    }

    pub fn screen(width: f32, height: f32, scale: f32) -> Self {
        Self::screen_with(width, height, scale, CameraConfig::default())
    }

    pub fn screen_with(width: f32, height: f32, scale: f32, config: CameraConfig) -> Self {
        let scale = if scale > 0.0 && scale.is_finite() {
            scale
        } else {
            log::warn!("Camera::screen: invalid scale {scale}, using 1.0");
            1.0
        };

        let cx = width / 2.0;
        let cy = height / 2.0;
        let view = Mat4::lookat(
            Vec3::new(cx, cy, config.eye_distance),
            Vec3::new(cx, cy, 0.0),
            Vec3::Y,
        );

        let hw = width / scale / 2.0;
        let hh = height / scale / 2.0;
        let projection = Mat4::orthogonal(-hw, hw, -hh, hh, config.near, config.far);

        Self { view, projection }
    }

    #[inline]
    pub fn view(&self) -> &Mat4 {
        &self.view
    }

    #[inline]
    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    /// `projection * view`.
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Mat4::identity(), Mat4::identity())
    }
}
