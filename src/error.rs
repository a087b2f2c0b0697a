use thiserror::Error;

/// Top-level error type for the Geosolid crate.
#[derive(Debug, Error, PartialEq)]
pub enum GeosolidError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Errors raised while validating the shape parameters of a solid.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("{parameter} = {value} is not a valid dimension (must be finite and >= 0)")]
    InvalidDimension { parameter: &'static str, value: f64 },

    #[error("{parameter} has a non-finite coordinate")]
    NonFinite { parameter: &'static str },
}

/// Errors related to the structure of a solid tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("composite solid requires at least one child")]
    EmptyComposite,
}

/// Convenience type alias for results using [`GeosolidError`].
pub type Result<T> = std::result::Result<T, GeosolidError>;
