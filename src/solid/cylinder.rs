use crate::error::Result;
use crate::math::{check_dimension, check_point, Extent, Point3, Vector3};

use super::Cuboid;

/// A finite solid cylinder whose axis is parallel to Z.
///
/// `position` is the center of the cylinder, halfway between its caps.
#[derive(Debug, Clone, PartialEq)]
pub struct Cylinder {
    position: Point3,
    height: f64,
    radius: f64,
    extent: Extent,
}

impl Cylinder {
    /// Creates a new Z-aligned cylinder.
    ///
    /// # Arguments
    ///
    /// * `position` - Center of the cylinder
    /// * `height` - Full length along Z
    /// * `radius` - Radius of the circular cross-section
    ///
    /// # Errors
    ///
    /// Returns an error if the height or radius is negative or not finite,
    /// or the position has a non-finite coordinate.
    pub fn new(position: Point3, height: f64, radius: f64) -> Result<Self> {
        let position = check_point("cylinder position", position)?;
        let height = check_dimension("cylinder height", height)?;
        let radius = check_dimension("cylinder radius", radius)?;
        Ok(Self {
            position,
            height,
            radius,
            extent: Extent::from_center_half_size(
                position,
                Vector3::new(radius, radius, height / 2.0),
            ),
        })
    }

    /// Returns the center of the cylinder.
    #[must_use]
    pub fn position(&self) -> &Point3 {
        &self.position
    }

    /// Returns the full height along Z.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    /// Radial test in the XY plane plus an inclusive Z range test.
    #[must_use]
    pub fn contains_point(&self, point: &Point3) -> bool {
        let d = point - self.position;
        d.xy().norm_squared() <= self.radius * self.radius
            && self.extent.min_z() <= point.z
            && point.z <= self.extent.max_z()
    }

    /// Box of `2r × 2r × height` centered on the cylinder.
    #[must_use]
    pub fn bounding_box(&self) -> Cuboid {
        let diameter = 2.0 * self.radius;
        Cuboid::from_valid_parts(
            self.position,
            Vector3::new(diameter, diameter, self.height),
        )
    }

    pub(crate) fn translated(&self, offset: &Vector3) -> Self {
        Self {
            position: self.position + *offset,
            height: self.height,
            radius: self.radius,
            extent: self.extent.translated(offset),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn contains_center_top_cap_and_rejects_outside_radius() {
        let c = Cylinder::new(p(1.0, 2.0, 3.0), 4.0, 1.5).unwrap();
        assert!(c.contains_point(&p(1.0, 2.0, 3.0)));
        assert!(c.contains_point(&p(1.0, 2.0, 5.0)));
        assert!(c.contains_point(&p(1.0, 2.0, 1.0)));
        assert!(!c.contains_point(&p(2.6, 2.0, 3.0)));
        assert!(!c.contains_point(&p(1.0, 2.0, 5.01)));
    }

    #[test]
    fn box_corner_is_outside_the_round_section() {
        let c = Cylinder::new(Point3::origin(), 2.0, 1.0).unwrap();
        assert!(c.bounding_box().contains_point(&p(1.0, 1.0, 0.0)));
        assert!(!c.contains_point(&p(1.0, 1.0, 0.0)));
    }

    #[test]
    fn bounding_box_dimensions() {
        let c = Cylinder::new(p(0.0, 0.0, 1.0), 6.0, 2.0).unwrap();
        let b = c.bounding_box();
        assert_relative_eq!(*b.position(), p(0.0, 0.0, 1.0));
        assert_relative_eq!(*b.size(), Vector3::new(4.0, 4.0, 6.0));
        assert_relative_eq!(*b.extent().min(), *c.extent().min());
        assert_relative_eq!(*b.extent().max(), *c.extent().max());
    }

    #[test]
    fn negative_height_fails() {
        assert!(Cylinder::new(Point3::origin(), -2.0, 1.0).is_err());
    }
}
