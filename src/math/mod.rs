mod extent;

pub use extent::Extent;

use crate::error::{GeometryError, Result};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Rejects negative and non-finite shape dimensions. Zero is allowed.
pub(crate) fn check_dimension(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        tracing::trace!(parameter, value, "rejected dimension");
        Err(GeometryError::InvalidDimension { parameter, value }.into())
    }
}

/// Rejects points with any NaN or infinite coordinate.
pub(crate) fn check_point(parameter: &'static str, point: Point3) -> Result<Point3> {
    if point.iter().all(|c| c.is_finite()) {
        Ok(point)
    } else {
        tracing::trace!(parameter, ?point, "rejected non-finite point");
        Err(GeometryError::NonFinite { parameter }.into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeosolidError;

    #[test]
    fn zero_dimension_is_accepted() {
        assert_eq!(check_dimension("radius", 0.0).unwrap(), 0.0);
    }

    #[test]
    fn negative_dimension_is_rejected() {
        let err = check_dimension("radius", -1.0).unwrap_err();
        assert_eq!(
            err,
            GeosolidError::Geometry(GeometryError::InvalidDimension {
                parameter: "radius",
                value: -1.0,
            })
        );
    }

    #[test]
    fn nan_dimension_is_rejected() {
        assert!(check_dimension("size_x", f64::NAN).is_err());
        assert!(check_dimension("size_x", f64::INFINITY).is_err());
    }

    #[test]
    fn infinite_point_is_rejected() {
        let err = check_point("position", Point3::new(0.0, f64::INFINITY, 0.0)).unwrap_err();
        assert_eq!(
            err,
            GeosolidError::Geometry(GeometryError::NonFinite {
                parameter: "position"
            })
        );
    }
}
