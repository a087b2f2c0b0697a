use crate::operations::SolidOperation;
use crate::solid::{CompositeSolid, Cuboid, Cylinder, Solid, Sphere};

/// Replaces every leaf of a solid tree with its bounding box.
///
/// Composites are rebuilt, never collapsed: the output has the same
/// nesting and child order as the input, and only the leaves change.
/// The input tree is left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Boxify;

impl Boxify {
    /// Creates a new `Boxify` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the operation, returning the boxified copy of `solid`.
    #[must_use]
    pub fn execute(&self, solid: &Solid) -> Solid {
        let _span = tracing::debug_span!("boxify").entered();
        let result = solid.accept(self);
        tracing::debug!(
            leaves = result.leaf_count(),
            depth = result.depth(),
            "boxified solid tree"
        );
        result
    }
}

impl SolidOperation for Boxify {
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
        composite.map_children(|child| child.accept(self)).into()
    }
}
