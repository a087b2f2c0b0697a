//! A closed hierarchy of 3D solids (sphere, axis-aligned box, Z-aligned
//! cylinder and composites) with operations dispatched per variant through
//! [`operations::SolidOperation`].

pub mod error;
pub mod math;
pub mod operations;
pub mod solid;

pub use error::{GeosolidError, Result};
pub use operations::SolidOperation;
pub use solid::{CompositeSolid, Cuboid, Cylinder, Solid, Sphere};
