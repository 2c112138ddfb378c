//! Screen-point picking against the scene registry.

use glam::Vec2;

use crate::camera::Camera;
use crate::scene::SceneObject;

/// One ray/object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Id of the intersected object.
    pub id: u32,
    /// Distance from the ray origin to the hit point.
    pub distance: f32,
}

/// Intersect the picking ray for a screen point against `objects`.
///
/// Coordinates are normalized to device space from the *current*
/// `viewport` dimensions, so resizes are reflected immediately. Objects
/// are tested against their world-space bounding spheres at their current
/// (possibly mid-tween) positions. Hits come back nearest-first; a miss
/// on everything is an empty list, not an error.
#[must_use]
pub fn pick(
    screen: Vec2,
    viewport: Vec2,
    camera: &Camera,
    objects: &[SceneObject],
) -> Vec<PickHit> {
    let Some(ray) = camera.screen_ray(screen, viewport) else {
        return Vec::new();
    };

    let mut hits: Vec<PickHit> = objects
        .iter()
        .filter_map(|object| {
            ray.intersect_sphere(object.position, object.bounding_radius())
                .map(|distance| PickHit {
                    id: object.id(),
                    distance,
                })
        })
        .collect();

    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::scene::SceneRegistry;

    const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

    fn camera() -> Camera {
        Camera {
            eye: Vec3::new(0.0, 0.0, 30.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: VIEWPORT.x / VIEWPORT.y,
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    fn registry() -> SceneRegistry {
        SceneRegistry::grid(5.0, 10.0, Vec3::splat(0.5))
    }

    #[test]
    fn test_center_click_hits_center_object() {
        let registry = registry();
        let hits = pick(
            VIEWPORT / 2.0,
            VIEWPORT,
            &camera(),
            registry.all(),
        );

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 4);
        // Camera at z=30, object surface near z=11.
        assert!(hits[0].distance > 17.0 && hits[0].distance < 20.0);
    }

    #[test]
    fn test_empty_space_yields_no_hits() {
        let registry = registry();
        // Top-left corner: beyond the grid's outermost objects.
        let hits =
            pick(Vec2::new(5.0, 5.0), VIEWPORT, &camera(), registry.all());
        assert!(hits.is_empty());
    }

    #[test]
    fn test_hits_are_sorted_nearest_first() {
        let mut registry = registry();
        // Stack object 0 behind object 4 along the center ray.
        registry.get_mut(0).unwrap().position = Vec3::new(0.0, 0.0, -5.0);

        let hits = pick(
            VIEWPORT / 2.0,
            VIEWPORT,
            &camera(),
            registry.all(),
        );

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, 4);
        assert_eq!(hits[1].id, 0);
        assert!(hits[0].distance < hits[1].distance);
    }

    #[test]
    fn test_picks_object_at_current_not_rest_position() {
        let mut registry = registry();
        // Move the center object far off axis; a center click now misses.
        registry.get_mut(4).unwrap().position =
            Vec3::new(50.0, 50.0, 10.0);

        let hits = pick(
            VIEWPORT / 2.0,
            VIEWPORT,
            &camera(),
            registry.all(),
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn test_degenerate_viewport_yields_no_hits() {
        let registry = registry();
        let hits = pick(
            Vec2::new(10.0, 10.0),
            Vec2::ZERO,
            &camera(),
            registry.all(),
        );
        assert!(hits.is_empty());
    }
}
