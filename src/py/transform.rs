//! PyO3 bindings for batch SVY21 coordinate transformation.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::batch;
use crate::proj::svy21::Svy21;

type ArrayPair<'py> = (Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>);

/// Convert arrays of WGS84 coordinates to SVY21.
///
/// Args:
///     lat: 1D array of latitudes (degrees).
///     lon: 1D array of longitudes (degrees).
///
/// Returns:
///     Tuple of (northing, easting) arrays in metres.
#[pyfunction]
#[pyo3(signature = (lat, lon))]
pub fn to_svy21_array<'py>(
    py: Python<'py>,
    lat: PyReadonlyArray1<'py, f64>,
    lon: PyReadonlyArray1<'py, f64>,
) -> PyResult<ArrayPair<'py>> {
    // Copy to owned before releasing the GIL
    let lat = lat.as_array().to_owned();
    let lon = lon.as_array().to_owned();

    let p = Svy21::wgs84();
    let (northing, easting) = py
        .detach(move || batch::forward_arrays(p, lat.view(), lon.view()))
        .map_err(|err| PyValueError::new_err(err.to_string()))?;

    Ok((
        PyArray1::from_owned_array(py, northing),
        PyArray1::from_owned_array(py, easting),
    ))
}

/// Convert arrays of SVY21 coordinates to WGS84.
///
/// Args:
///     northing: 1D array of northings (metres).
///     easting: 1D array of eastings (metres).
///
/// Returns:
///     Tuple of (lat, lon) arrays in degrees.
#[pyfunction]
#[pyo3(signature = (northing, easting))]
pub fn to_lat_lon_array<'py>(
    py: Python<'py>,
    northing: PyReadonlyArray1<'py, f64>,
    easting: PyReadonlyArray1<'py, f64>,
) -> PyResult<ArrayPair<'py>> {
    let n = northing.as_array().to_owned();
    let e = easting.as_array().to_owned();

    let p = Svy21::wgs84();
    let (lat, lon) = py
        .detach(move || batch::inverse_arrays(p, n.view(), e.view()))
        .map_err(|err| PyValueError::new_err(err.to_string()))?;

    Ok((
        PyArray1::from_owned_array(py, lat),
        PyArray1::from_owned_array(py, lon),
    ))
}
