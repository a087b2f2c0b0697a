use crate::operations::SolidOperation;
use crate::solid::{CompositeSolid, Cuboid, Cylinder, Solid, Sphere};

/// Computes the axis-aligned bounding box of a solid.
///
/// Every handler forwards to the variant's own `bounding_box()`, so the
/// result is always a [`Solid::Cuboid`]. A composite is bounded as a whole
/// and is not descended into.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundingBox;

impl BoundingBox {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the query, returning the bounding box as a solid.
    #[must_use]
    pub fn execute(&self, solid: &Solid) -> Solid {
        solid.accept(self)
    }
}

impl SolidOperation for BoundingBox {
    fn visit_sphere(&self, sphere: &Sphere) -> Solid {
        sphere.bounding_box().into()
    }

    fn visit_cuboid(&self, cuboid: &Cuboid) -> Solid {
        cuboid.bounding_box().into()
    }

    fn visit_cylinder(&self, cylinder: &Cylinder) -> Solid {
        cylinder.bounding_box().into()
    }

    fn visit_composite(&self, composite: &CompositeSolid) -> Solid {
        composite.bounding_box().into()
    }
}
