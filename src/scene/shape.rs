//! The fixed catalog of wireframe solids.

/// One of the nine wireframe solids the grid displays.
///
/// The catalog is fixed: each grid cell gets exactly one shape, assigned
/// in [`CATALOG`](Self::CATALOG) order at construction and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Unit cube.
    Cube,
    /// Cone, radius 1, height 2.
    Cone,
    /// Flat ring, inner radius 0.5, outer radius 1.
    Ring,
    /// Torus, ring radius 1, tube radius 0.5.
    Torus,
    /// Regular dodecahedron, circumradius 1.
    Dodecahedron,
    /// Sphere, radius 1.
    Sphere,
    /// Torus knot, ring radius 1, tube radius 0.25.
    TorusKnot,
    /// Regular octahedron, circumradius 1.
    Octahedron,
    /// Truncated cylinder, radii 0.5/1, height 2.
    Cylinder,
}

impl Shape {
    /// The nine shapes, in grid-assignment order.
    pub const CATALOG: [Shape; 9] = [
        Shape::Cube,
        Shape::Cone,
        Shape::Ring,
        Shape::Torus,
        Shape::Dodecahedron,
        Shape::Sphere,
        Shape::TorusKnot,
        Shape::Octahedron,
        Shape::Cylinder,
    ];

    /// Radius of the shape's object-space bounding sphere, used for ray
    /// picking. Derived from the catalog dimensions above.
    #[must_use]
    pub fn bounding_radius(self) -> f32 {
        match self {
            // Half the cube's space diagonal: sqrt(3)/2.
            Shape::Cube => 0.866_025_4,
            // Rim corner at (1, ±1): sqrt(2).
            Shape::Cone | Shape::Cylinder => 1.414_213_6,
            Shape::Ring | Shape::Dodecahedron | Shape::Sphere
            | Shape::Octahedron => 1.0,
            Shape::Torus => 1.5,
            Shape::TorusKnot => 1.25,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Shape::Cube => "cube",
            Shape::Cone => "cone",
            Shape::Ring => "ring",
            Shape::Torus => "torus",
            Shape::Dodecahedron => "dodecahedron",
            Shape::Sphere => "sphere",
            Shape::TorusKnot => "torus knot",
            Shape::Octahedron => "octahedron",
            Shape::Cylinder => "cylinder",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_nine_distinct_shapes() {
        let mut seen = std::collections::HashSet::new();
        for shape in Shape::CATALOG {
            assert!(seen.insert(shape), "{} repeats", shape.label());
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_bounding_radii_positive() {
        for shape in Shape::CATALOG {
            assert!(shape.bounding_radius() > 0.0);
        }
    }
}
