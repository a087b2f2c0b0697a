use super::{Point3, Vector3};

/// Axis-aligned extent of a solid: the six scalars `min_x..max_z`,
/// stored as two corners.
///
/// Invariant: `min <= max` on every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    min: Point3,
    max: Point3,
}

impl Extent {
    /// Builds the extent `center ± half_size` on each axis.
    ///
    /// `half_size` components must be non-negative.
    #[must_use]
    pub fn from_center_half_size(center: Point3, half_size: Vector3) -> Self {
        debug_assert!(half_size.iter().all(|h| *h >= 0.0));
        Self {
            min: center - half_size,
            max: center + half_size,
        }
    }

    /// Smallest extent covering both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Minimum corner.
    #[must_use]
    pub fn min(&self) -> &Point3 {
        &self.min
    }

    /// Maximum corner.
    #[must_use]
    pub fn max(&self) -> &Point3 {
        &self.max
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min.x
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max.x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min.y
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.max.y
    }

    #[must_use]
    pub fn min_z(&self) -> f64 {
        self.min.z
    }

    #[must_use]
    pub fn max_z(&self) -> f64 {
        self.max.z
    }

    /// Midpoint of the extent on each axis.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Edge length on each axis, `|max - min|`.
    #[must_use]
    pub fn size(&self) -> Vector3 {
        (self.max - self.min).abs()
    }

    /// Returns `true` if `point` lies inside the extent, boundary included.
    #[must_use]
    pub fn contains_point(&self, point: &Point3) -> bool {
        (0..3).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }

    /// Returns the extent shifted by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector3) -> Self {
        Self {
            min: self.min + *offset,
            max: self.max + *offset,
        }
    }
}
