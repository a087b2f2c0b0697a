mod composite;
mod cuboid;
mod cylinder;
mod sphere;

pub use composite::CompositeSolid;
pub use cuboid::Cuboid;
pub use cylinder::Cylinder;
pub use sphere::Sphere;

use crate::math::{Extent, Point3};
use crate::operations::SolidOperation;

/// A solid body: one of the primitive shapes or a composite of solids.
///
/// The variant set is closed. New algorithms over solids are added by
/// implementing [`SolidOperation`], not by adding variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Solid {
    Sphere(Sphere),
    Cuboid(Cuboid),
    Cylinder(Cylinder),
    Composite(CompositeSolid),
}

impl Solid {
    /// Reference position of the solid. For a composite this is the
    /// position of its first child.
    #[must_use]
    pub fn position(&self) -> &Point3 {
        match self {
            Self::Sphere(s) => s.position(),
            Self::Cuboid(b) => b.position(),
            Self::Cylinder(c) => c.position(),
            Self::Composite(c) => c.position(),
        }
    }

    /// Axis-aligned extent computed at construction.
    #[must_use]
    pub fn extent(&self) -> &Extent {
        match self {
            Self::Sphere(s) => s.extent(),
            Self::Cuboid(b) => b.extent(),
            Self::Cylinder(c) => c.extent(),
            Self::Composite(c) => c.extent(),
        }
    }

    /// Returns `true` if `point` lies in the solid, boundary included.
    #[must_use]
    pub fn contains_point(&self, point: &Point3) -> bool {
        match self {
            Self::Sphere(s) => s.contains_point(point),
            Self::Cuboid(b) => b.contains_point(point),
            Self::Cylinder(c) => c.contains_point(point),
            Self::Composite(c) => c.contains_point(point),
        }
    }

    /// Minimal axis-aligned box enclosing the solid.
    #[must_use]
    pub fn bounding_box(&self) -> Cuboid {
        match self {
            Self::Sphere(s) => s.bounding_box(),
            Self::Cuboid(b) => b.bounding_box(),
            Self::Cylinder(c) => c.bounding_box(),
            Self::Composite(c) => c.bounding_box(),
        }
    }

    /// Hands the concrete variant to the matching handler of `operation`
    /// and returns its result.
    #[must_use]
    pub fn accept<O>(&self, operation: &O) -> Solid
    where
        O: SolidOperation + ?Sized,
    {
        match self {
            Self::Sphere(s) => operation.visit_sphere(s),
            Self::Cuboid(b) => operation.visit_cuboid(b),
            Self::Cylinder(c) => operation.visit_cylinder(c),
            Self::Composite(c) => operation.visit_composite(c),
        }
    }

    /// Returns `true` for every variant except [`Solid::Composite`].
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Self::Composite(_))
    }

    /// Number of non-composite solids in the tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Composite(c) => c.children().iter().map(Solid::leaf_count).sum(),
            _ => 1,
        }
    }

    /// Nesting depth: 0 for a leaf, one more than the deepest child for a
    /// composite.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Composite(c) => 1 + c.children().iter().map(Solid::depth).max().unwrap_or(0),
            _ => 0,
        }
    }
}

impl From<Sphere> for Solid {
    fn from(value: Sphere) -> Self {
        Self::Sphere(value)
    }
}

impl From<Cuboid> for Solid {
    fn from(value: Cuboid) -> Self {
        Self::Cuboid(value)
    }
}

impl From<Cylinder> for Solid {
    fn from(value: Cylinder) -> Self {
        Self::Cylinder(value)
    }
}

impl From<CompositeSolid> for Solid {
    fn from(value: CompositeSolid) -> Self {
        Self::Composite(value)
    }
}
