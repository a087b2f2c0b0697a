pub mod query;
pub mod transform;

use crate::solid::{CompositeSolid, Cuboid, Cylinder, Solid, Sphere};

/// An algorithm over solid trees, with one handler per solid variant.
///
/// [`Solid::accept`] picks the handler matching the concrete variant. Every
/// handler is required, so adding an operation never touches the solid
/// types and forgetting a variant does not compile.
pub trait SolidOperation {
    /// Handles a [`Sphere`].
    fn visit_sphere(&self, sphere: &Sphere) -> Solid;

    /// Handles a [`Cuboid`].
    fn visit_cuboid(&self, cuboid: &Cuboid) -> Solid;

    /// Handles a [`Cylinder`].
    fn visit_cylinder(&self, cylinder: &Cylinder) -> Solid;

    /// Handles a [`CompositeSolid`]. Recursing into the children, if
    /// wanted, is up to the operation.
    fn visit_composite(&self, composite: &CompositeSolid) -> Solid;
}
