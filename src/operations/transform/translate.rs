use crate::math::Vector3;
use crate::operations::SolidOperation;
use crate::solid::{CompositeSolid, Cuboid, Cylinder, Solid, Sphere};

/// Translates a solid tree by a displacement vector.
///
/// Returns a moved copy; shapes, nesting and child order are unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Translate {
    displacement: Vector3,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(displacement: Vector3) -> Self {
        Self { displacement }
    }

    /// Executes the translation, returning the moved copy of `solid`.
    #[must_use]
    pub fn execute(&self, solid: &Solid) -> Solid {
        solid.accept(self)
    }
}

impl SolidOperation for Translate {
    fn visit_sphere(&self, sphere: &Sphere) -> Solid {
        sphere.translated(&self.displacement).into()
    }

    fn visit_cuboid(&self, cuboid: &Cuboid) -> Solid {
        cuboid.translated(&self.displacement).into()
    }

    fn visit_cylinder(&self, cylinder: &Cylinder) -> Solid {
        cylinder.translated(&self.displacement).into()
    }

    fn visit_composite(&self, composite: &CompositeSolid) -> Solid {
        composite.map_children(|child| child.accept(self)).into()
    }
}
