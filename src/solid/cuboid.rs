use crate::error::Result;
use crate::math::{check_dimension, check_point, Extent, Point3, Vector3};

/// An axis-aligned box defined by its center and full edge lengths.
///
/// Every bounding box in the crate is a `Cuboid`, and a cuboid is its own
/// bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Cuboid {
    position: Point3,
    size: Vector3,
    extent: Extent,
}

impl Cuboid {
    /// Creates a new cuboid centered on `position`.
    ///
    /// # Arguments
    ///
    /// * `position` - Center of the box
    /// * `size_x`, `size_y`, `size_z` - Full edge length along each axis
    ///
    /// # Errors
    ///
    /// Returns an error if any edge length is negative or not finite, or the
    /// position has a non-finite coordinate.
    pub fn new(position: Point3, size_x: f64, size_y: f64, size_z: f64) -> Result<Self> {
        let position = check_point("cuboid position", position)?;
        let size = Vector3::new(
            check_dimension("cuboid size_x", size_x)?,
            check_dimension("cuboid size_y", size_y)?,
            check_dimension("cuboid size_z", size_z)?,
        );
        Ok(Self::from_valid_parts(position, size))
    }

    /// Builds a cuboid from parameters already known to be finite and
    /// non-negative.
    pub(crate) fn from_valid_parts(position: Point3, size: Vector3) -> Self {
        Self {
            position,
            size,
            extent: Extent::from_center_half_size(position, size / 2.0),
        }
    }

    /// The cuboid exactly covering `extent`.
    pub(crate) fn from_extent(extent: &Extent) -> Self {
        Self::from_valid_parts(extent.center(), extent.size())
    }

    /// Returns the center of the box.
    #[must_use]
    pub fn position(&self) -> &Point3 {
        &self.position
    }

    /// Returns the edge lengths `(size_x, size_y, size_z)`.
    #[must_use]
    pub fn size(&self) -> &Vector3 {
        &self.size
    }

    #[must_use]
    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    /// Returns `true` if `point` lies within the box, faces included.
    #[must_use]
    pub fn contains_point(&self, point: &Point3) -> bool {
        self.extent.contains_point(point)
    }

    /// A box is its own bounding box.
    #[must_use]
    pub fn bounding_box(&self) -> Cuboid {
        self.clone()
    }

    pub(crate) fn translated(&self, offset: &Vector3) -> Self {
        Self {
            position: self.position + *offset,
            size: self.size,
            extent: self.extent.translated(offset),
        }
    }
}
