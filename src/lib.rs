//! SVY21: conversion between WGS84 latitude/longitude and the Singapore
//! SVY21 Northing/Easting grid.
//!
//! ```
//! let (n, e) = svy21::forward(1.366_666, 103.833_333);
//! assert!((n - 38_744.572).abs() < 1e-6);
//! assert!((e - 28_001.642).abs() < 1e-6);
//!
//! let (lat, lon) = svy21::inverse(n, e);
//! assert!((lat - 1.366_666).abs() < 1e-10);
//! assert!((lon - 103.833_333).abs() < 1e-10);
//! ```

pub mod batch;
pub mod coords;
pub mod error;
pub mod proj;
#[cfg(feature = "python")]
mod py;

pub use coords::{GeodeticCoordinate, PlanarCoordinate};
pub use error::Svy21Error;
pub use proj::svy21::Svy21;
pub use proj::Projection;

/// Latitude/longitude (degrees) to (northing, easting) using the shared instance.
pub fn forward(lat: f64, lon: f64) -> (f64, f64) {
    Svy21::wgs84().forward(lat, lon)
}

/// (northing, easting) to latitude/longitude (degrees) using the shared instance.
pub fn inverse(northing: f64, easting: f64) -> (f64, f64) {
    Svy21::wgs84().inverse(northing, easting)
}

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn svy21(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}
