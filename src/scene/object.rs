//! The pickable scene object record.

use glam::Vec3;

use super::shape::Shape;

/// One pickable object: a shape, its grid slot, and its mutable
/// transform/display state.
///
/// Identity, shape, and rest position are fixed at construction. The
/// mutable fields are written by well-defined owners only: `position` and
/// `color` by the tween scheduler (and the selection machine, for instant
/// color changes), `rotation` by the frame loop while the object is
/// focused.
#[derive(Debug, Clone)]
pub struct SceneObject {
    id: u32,
    shape: Shape,
    rest_position: Vec3,
    /// Current world-space position.
    pub position: Vec3,
    /// Euler rotation in radians. Only the Y component is driven by the
    /// focus spin; the others stay at their construction value.
    pub rotation: Vec3,
    /// Display color (RGB, 0..1 per channel).
    pub color: Vec3,
}

impl SceneObject {
    /// Create an object at rest in its grid slot.
    #[must_use]
    pub fn new(id: u32, shape: Shape, rest_position: Vec3, color: Vec3) -> Self {
        Self {
            id,
            shape,
            rest_position,
            position: rest_position,
            rotation: Vec3::ZERO,
            color,
        }
    }

    /// Stable identity, assigned at creation.
    #[inline]
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The object's shape from the fixed catalog.
    #[inline]
    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// The grid-assigned home position.
    #[inline]
    #[must_use]
    pub fn rest_position(&self) -> Vec3 {
        self.rest_position
    }

    /// Whether the object sits within `tolerance` of its rest position.
    #[must_use]
    pub fn is_at_rest(&self, tolerance: f32) -> bool {
        self.position.distance_squared(self.rest_position)
            <= tolerance * tolerance
    }

    /// World-space bounding sphere radius for picking.
    #[inline]
    #[must_use]
    pub fn bounding_radius(&self) -> f32 {
        self.shape.bounding_radius()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_object_starts_at_rest() {
        let rest = Vec3::new(-5.0, 5.0, 10.0);
        let object =
            SceneObject::new(2, Shape::Ring, rest, Vec3::splat(0.5));

        assert_eq!(object.id(), 2);
        assert_eq!(object.position, rest);
        assert_eq!(object.rest_position(), rest);
        assert_eq!(object.rotation, Vec3::ZERO);
        assert!(object.is_at_rest(1e-6));
    }

    #[test]
    fn test_is_at_rest_tolerance() {
        let mut object = SceneObject::new(
            0,
            Shape::Cube,
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::splat(0.5),
        );
        object.position.z += 0.05;

        assert!(object.is_at_rest(0.1));
        assert!(!object.is_at_rest(0.01));
    }
}
