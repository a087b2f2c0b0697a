use crate::error::Result;
use crate::math::{check_dimension, check_point, Extent, Point3, Vector3};

use super::Cuboid;

/// A solid ball defined by its center and radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    position: Point3,
    radius: f64,
    extent: Extent,
}

impl Sphere {
    /// Creates a new sphere.
    ///
    /// A zero radius is accepted and yields a single-point solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative or not finite, or the
    /// position has a non-finite coordinate.
    pub fn new(position: Point3, radius: f64) -> Result<Self> {
        let position = check_point("sphere position", position)?;
        let radius = check_dimension("sphere radius", radius)?;
        Ok(Self {
            position,
            radius,
            extent: Extent::from_center_half_size(position, Vector3::repeat(radius)),
        })
    }

    /// Returns the center of the sphere.
    #[must_use]
    pub fn position(&self) -> &Point3 {
        &self.position
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

    /// Returns `true` if `point` is inside the ball or on its surface.
    #[must_use]
    pub fn contains_point(&self, point: &Point3) -> bool {
        (point - self.position).norm_squared() <= self.radius * self.radius
    }

    /// Cube of edge `2 * radius` centered on the sphere.
    #[must_use]
    pub fn bounding_box(&self) -> Cuboid {
        let diameter = 2.0 * self.radius;
        Cuboid::from_valid_parts(self.position, Vector3::repeat(diameter))
    }

    pub(crate) fn translated(&self, offset: &Vector3) -> Self {
        Self {
            position: self.position + *offset,
            radius: self.radius,
            extent: self.extent.translated(offset),
        }
    }
}
