//! World-space picking ray and analytic intersection tests.

use glam::Vec3;

/// A half-line in world space: origin plus a normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point of the ray.
    pub origin: Vec3,
    /// Unit-length direction.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray. `direction` is expected to be normalized.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// The point `distance` units along the ray.
    #[inline]
    #[must_use]
    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }

    /// Distance to the nearest intersection with a sphere, if the ray
    /// hits it in front of the origin.
    ///
    /// A ray starting inside the sphere reports the exit point.
    #[must_use]
    pub fn intersect_sphere(
        &self,
        center: Vec3,
        radius: f32,
    ) -> Option<f32> {
        let to_origin = self.origin - center;
        let half_b = to_origin.dot(self.direction);
        let c = to_origin.length_squared() - radius * radius;
        let discriminant = half_b * half_b - c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let near = -half_b - sqrt_d;
        if near >= 0.0 {
            return Some(near);
        }
        let far = -half_b + sqrt_d;
        if far >= 0.0 {
            return Some(far);
        }
        // Both intersections behind the origin.
        None
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_hit_straight_on() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 30.0), Vec3::NEG_Z);
        let t = ray
            .intersect_sphere(Vec3::new(0.0, 0.0, 10.0), 1.0)
            .unwrap();
        assert_relative_eq!(t, 19.0, epsilon = 1e-4);
        assert_relative_eq!(ray.at(t).z, 11.0, epsilon = 1e-4);
    }

    #[test]
    fn test_miss() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 30.0), Vec3::NEG_Z);
        assert!(ray
            .intersect_sphere(Vec3::new(5.0, 5.0, 10.0), 1.0)
            .is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 30.0), Vec3::NEG_Z);
        assert!(ray
            .intersect_sphere(Vec3::new(0.0, 0.0, 40.0), 1.0)
            .is_none());
    }

    #[test]
    fn test_origin_inside_sphere_reports_exit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let t = ray.intersect_sphere(Vec3::ZERO, 2.0).unwrap();
        assert_relative_eq!(t, 2.0, epsilon = 1e-4);
    }

    #[test]
    fn test_grazing_hit() {
        // Ray passing exactly through the sphere's silhouette edge.
        let ray = Ray::new(Vec3::new(1.0, 0.0, 30.0), Vec3::NEG_Z);
        let t = ray
            .intersect_sphere(Vec3::new(0.0, 0.0, 10.0), 1.0)
            .unwrap();
        assert_relative_eq!(t, 20.0, epsilon = 1e-3);
    }
}
