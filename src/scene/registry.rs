//! The fixed registry of pickable objects.

use glam::Vec3;

use super::object::SceneObject;
use super::shape::Shape;
use crate::error::VitrineError;

/// Owns the fixed grid of pickable objects.
///
/// The set is created once and never grows or shrinks; iteration order is
/// insertion order, and object ids double as indices into it.
#[derive(Debug)]
pub struct SceneRegistry {
    objects: Vec<SceneObject>,
}

impl SceneRegistry {
    /// Build the 3×3 grid: one object per catalog shape, columns along X,
    /// rows along Y, all at the same depth.
    ///
    /// Ids are assigned in construction order (X-major), so id 4 is the
    /// grid center.
    #[must_use]
    pub fn grid(spacing: f32, depth: f32, inactive_color: Vec3) -> Self {
        let mut objects = Vec::with_capacity(Shape::CATALOG.len());
        let mut id = 0;
        for col in -1..=1 {
            for row in -1..=1 {
                let rest = Vec3::new(
                    col as f32 * spacing,
                    row as f32 * spacing,
                    depth,
                );
                objects.push(SceneObject::new(
                    id,
                    Shape::CATALOG[id as usize],
                    rest,
                    inactive_color,
                ));
                id += 1;
            }
        }
        Self { objects }
    }

    /// All objects in insertion order.
    #[inline]
    #[must_use]
    pub fn all(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Look up an object by id.
    ///
    /// # Errors
    ///
    /// [`VitrineError::NotFound`] if no object has this id. Defensive
    /// only: the registry is fixed for the viewer's lifetime.
    pub fn get(&self, id: u32) -> Result<&SceneObject, VitrineError> {
        self.objects
            .iter()
            .find(|o| o.id() == id)
            .ok_or(VitrineError::NotFound(id))
    }

    /// Look up an object by id for mutation.
    ///
    /// # Errors
    ///
    /// [`VitrineError::NotFound`] if no object has this id.
    pub fn get_mut(
        &mut self,
        id: u32,
    ) -> Result<&mut SceneObject, VitrineError> {
        self.objects
            .iter_mut()
            .find(|o| o.id() == id)
            .ok_or(VitrineError::NotFound(id))
    }

    /// Number of objects (always the catalog size).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the registry is empty. Never true after construction;
    /// present for container-API completeness.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_layout() {
        let registry = SceneRegistry::grid(5.0, 10.0, Vec3::splat(0.5));

        assert_eq!(registry.len(), 9);
        // X-major order: first corner, then up the first column.
        assert_eq!(
            registry.all()[0].rest_position(),
            Vec3::new(-5.0, -5.0, 10.0)
        );
        assert_eq!(
            registry.all()[1].rest_position(),
            Vec3::new(-5.0, 0.0, 10.0)
        );
        // Id 4 is the grid center.
        assert_eq!(
            registry.get(4).unwrap().rest_position(),
            Vec3::new(0.0, 0.0, 10.0)
        );
        assert_eq!(
            registry.all()[8].rest_position(),
            Vec3::new(5.0, 5.0, 10.0)
        );
    }

    #[test]
    fn test_ids_match_insertion_order() {
        let registry = SceneRegistry::grid(5.0, 10.0, Vec3::splat(0.5));
        for (index, object) in registry.all().iter().enumerate() {
            assert_eq!(object.id() as usize, index);
        }
    }

    #[test]
    fn test_each_object_gets_a_distinct_shape() {
        let registry = SceneRegistry::grid(5.0, 10.0, Vec3::splat(0.5));
        let mut seen = std::collections::HashSet::new();
        for object in registry.all() {
            assert!(seen.insert(object.shape()));
        }
    }

    #[test]
    fn test_get_unknown_id_fails() {
        let registry = SceneRegistry::grid(5.0, 10.0, Vec3::splat(0.5));
        assert!(matches!(
            registry.get(42),
            Err(VitrineError::NotFound(42))
        ));
    }
}
