use pyo3::prelude::*;

use crate::proj::svy21::Svy21;

mod transform;

/// Register all Python-visible functions and types.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(to_svy21, m)?)?;
    m.add_function(wrap_pyfunction!(to_lat_lon, m)?)?;
    m.add_function(wrap_pyfunction!(transform::to_svy21_array, m)?)?;
    m.add_function(wrap_pyfunction!(transform::to_lat_lon_array, m)?)?;
    Ok(())
}

/// Convert a WGS84 latitude/longitude (degrees) to SVY21 (northing, easting).
#[pyfunction]
fn to_svy21(lat: f64, lon: f64) -> (f64, f64) {
    Svy21::wgs84().forward(lat, lon)
}

/// Convert SVY21 (northing, easting) to WGS84 (latitude, longitude) in degrees.
#[pyfunction]
fn to_lat_lon(northing: f64, easting: f64) -> (f64, f64) {
    Svy21::wgs84().inverse(northing, easting)
}
