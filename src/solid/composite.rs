use crate::error::{Result, TopologyError};
use crate::math::{Extent, Point3};

use super::{Cuboid, Solid};

/// An ordered, non-empty group of solids occupying their union.
///
/// The composite owns its children. Its position is the position of the
/// first child, not a centroid.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeSolid {
    children: Vec<Solid>,
    position: Point3,
    extent: Extent,
}

impl CompositeSolid {
    /// Creates a composite from its children, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EmptyComposite`] if `children` is empty.
    pub fn new(children: Vec<Solid>) -> Result<Self> {
        let Some((position, extent)) = aggregate(&children) else {
            tracing::trace!("rejected empty composite");
            return Err(TopologyError::EmptyComposite.into());
        };
        Ok(Self {
            children,
            position,
            extent,
        })
    }

    /// Returns the children in construction order.
    #[must_use]
    pub fn children(&self) -> &[Solid] {
        &self.children
    }

    /// Number of direct children. Always at least one.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns the position of the first child.
    #[must_use]
    pub fn position(&self) -> &Point3 {
        &self.position
    }

    /// Componentwise min/max over all children.
    #[must_use]
    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    /// Union semantics: `true` if any child contains `point`.
    #[must_use]
    pub fn contains_point(&self, point: &Point3) -> bool {
        self.children.iter().any(|child| child.contains_point(point))
    }

    /// Box built from the aggregated extent: size `|max - min|` and center
    /// at the midpoint on each axis.
    #[must_use]
    pub fn bounding_box(&self) -> Cuboid {
        Cuboid::from_extent(&self.extent)
    }

    /// Rebuilds a composite with the same shape from already-transformed
    /// children.
    pub(crate) fn map_children<F>(&self, f: F) -> Self
    where
        F: FnMut(&Solid) -> Solid,
    {
        let children: Vec<Solid> = self.children.iter().map(f).collect();
        // Same length as `self.children`, so never empty.
        let (position, extent) = aggregate(&children).unwrap_or((self.position, self.extent));
        Self {
            children,
            position,
            extent,
        }
    }
}

/// First child's position and the union of all child extents, or `None`
/// for an empty slice.
fn aggregate(children: &[Solid]) -> Option<(Point3, Extent)> {
    let (first, rest) = children.split_first()?;
    let extent = rest
        .iter()
        .fold(*first.extent(), |acc, child| acc.union(child.extent()));
    Some((*first.position(), extent))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeosolidError;
    use crate::math::Vector3;
    use crate::solid::{Cylinder, Sphere};
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn sphere_and_box() -> CompositeSolid {
        CompositeSolid::new(vec![
            Sphere::new(Point3::origin(), 1.0).unwrap().into(),
            Cuboid::new(p(5.0, 0.0, 0.0), 2.0, 2.0, 2.0).unwrap().into(),
        ])
        .unwrap()
    }

    #[test]
    fn empty_composite_fails() {
        let err = CompositeSolid::new(Vec::new()).unwrap_err();
        assert_eq!(err, GeosolidError::Topology(TopologyError::EmptyComposite));
    }

    #[test]
    fn bounding_box_of_sphere_and_box() {
        let c = sphere_and_box();
        assert_relative_eq!(*c.extent().min(), p(-1.0, -1.0, -1.0));
        assert_relative_eq!(*c.extent().max(), p(6.0, 1.0, 1.0));

        let b = c.bounding_box();
        assert_relative_eq!(*b.position(), p(2.5, 0.0, 0.0));
        assert_relative_eq!(*b.size(), Vector3::new(7.0, 2.0, 2.0));
    }

    #[test]
    fn position_is_first_child_position() {
        let c = sphere_and_box();
        assert_relative_eq!(*c.position(), Point3::origin());

        let reversed = CompositeSolid::new(c.children().iter().rev().cloned().collect()).unwrap();
        assert_relative_eq!(*reversed.position(), p(5.0, 0.0, 0.0));
        assert_eq!(reversed.extent(), c.extent());
    }

    #[test]
    fn contains_point_is_union() {
        let c = sphere_and_box();
        assert!(c.contains_point(&Point3::origin()));
        assert!(c.contains_point(&p(5.5, 0.5, 0.5)));
        // Inside the aggregate extent but in neither child.
        assert!(!c.contains_point(&p(2.5, 0.0, 0.0)));
    }

    #[test]
    fn single_child_extent_matches_child() {
        let cyl = Cylinder::new(p(1.0, 1.0, 1.0), 2.0, 0.5).unwrap();
        let c = CompositeSolid::new(vec![cyl.clone().into()]).unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c.extent(), cyl.extent());
        assert_eq!(c.bounding_box(), cyl.bounding_box());
    }

    #[test]
    fn nested_extent_aggregates_through_levels() {
        let inner = CompositeSolid::new(vec![
            Sphere::new(p(0.0, 0.0, -10.0), 1.0).unwrap().into(),
        ])
        .unwrap();
        let outer = CompositeSolid::new(vec![
            inner.into(),
            Cuboid::new(p(0.0, 3.0, 0.0), 1.0, 1.0, 1.0).unwrap().into(),
        ])
        .unwrap();
        assert_relative_eq!(*outer.extent().min(), p(-1.0, -1.0, -11.0));
        assert_relative_eq!(*outer.extent().max(), p(1.0, 3.5, 0.5));
        assert_relative_eq!(*outer.position(), p(0.0, 0.0, -10.0));
    }
}
