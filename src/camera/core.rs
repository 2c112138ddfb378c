use glam::{Mat4, Vec2, Vec3};

use crate::picking::Ray;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }

    /// Update the aspect ratio from new viewport dimensions.
    ///
    /// Zero-sized viewports (minimized windows) are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Unproject a screen point into a world-space picking ray.
    ///
    /// `screen` is in physical pixels with the origin at the top-left;
    /// `viewport` is the current surface size, taken live so a resize is
    /// reflected on the very next pick. Returns `None` for a degenerate
    /// viewport or a non-invertible view-projection.
    #[must_use]
    pub fn screen_ray(&self, screen: Vec2, viewport: Vec2) -> Option<Ray> {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return None;
        }

        // Normalized device coordinates: x right, y up, both in [-1, 1].
        let ndc = Vec2::new(
            (screen.x / viewport.x) * 2.0 - 1.0,
            -((screen.y / viewport.y) * 2.0 - 1.0),
        );

        let view_proj = self.build_matrix();
        if view_proj.determinant() == 0.0 {
            return None;
        }
        let inverse = view_proj.inverse();

        // Cast through the near and far planes ([0,1] depth range).
        let near = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        let direction = (far - near).normalize_or_zero();
        if direction == Vec3::ZERO {
            return None;
        }

        Some(Ray::new(near, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera {
            eye: Vec3::new(0.0, 0.0, 30.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    #[test]
    fn test_center_ray_points_down_the_view_axis() {
        let camera = camera();
        let viewport = Vec2::new(1280.0, 720.0);
        let ray = camera
            .screen_ray(Vec2::new(640.0, 360.0), viewport)
            .unwrap();

        // Eye at +Z looking at the origin: the center ray heads along -Z.
        assert!(ray.direction.z < -0.999);
        assert!(ray.direction.x.abs() < 1e-4);
        assert!(ray.direction.y.abs() < 1e-4);
    }

    #[test]
    fn test_screen_y_is_flipped() {
        let camera = camera();
        let viewport = Vec2::new(1280.0, 720.0);
        // A point in the upper half of the screen must look upward.
        let ray = camera
            .screen_ray(Vec2::new(640.0, 100.0), viewport)
            .unwrap();
        assert!(ray.direction.y > 0.0);

        let ray = camera
            .screen_ray(Vec2::new(640.0, 700.0), viewport)
            .unwrap();
        assert!(ray.direction.y < 0.0);
    }

    #[test]
    fn test_resize_changes_the_ray() {
        let mut camera = camera();
        let before = camera
            .screen_ray(Vec2::new(100.0, 100.0), Vec2::new(1280.0, 720.0))
            .unwrap();

        camera.set_viewport(640, 640);
        let after = camera
            .screen_ray(Vec2::new(100.0, 100.0), Vec2::new(640.0, 640.0))
            .unwrap();

        assert!(before.direction.distance(after.direction) > 1e-3);
    }

    #[test]
    fn test_degenerate_viewport_yields_no_ray() {
        let camera = camera();
        assert!(camera
            .screen_ray(Vec2::new(0.0, 0.0), Vec2::new(0.0, 720.0))
            .is_none());
    }
}
