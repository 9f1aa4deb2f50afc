//! Common helpers for projection math (meridional arc, radii of curvature).

use std::f64::consts::PI;

use super::constants::MeridianSeries;
use super::ellipsoid::Ellipsoid;

/// Meridional arc length (metres) from the equator to `lat_deg` degrees.
pub(crate) fn meridional_arc(ellipsoid: &Ellipsoid, series: &MeridianSeries, lat_deg: f64) -> f64 {
    let phi = lat_deg * PI / 180.0;
    ellipsoid.a
        * ((series.a0 * phi) - (series.a2 * (2.0 * phi).sin()) + (series.a4 * (4.0 * phi).sin())
            - (series.a6 * (6.0 * phi).sin()))
}

/// Radius of curvature of the meridian (ρ), given sin²φ.
pub(crate) fn meridian_radius(ellipsoid: &Ellipsoid, sin2_lat: f64) -> f64 {
    let num = ellipsoid.a * (1.0 - ellipsoid.e2);
    let denom = (1.0 - ellipsoid.e2 * sin2_lat).powf(1.5);
    num / denom
}

/// Radius of curvature in the prime vertical (ν), given sin²φ.
pub(crate) fn prime_vertical_radius(ellipsoid: &Ellipsoid, sin2_lat: f64) -> f64 {
    let poly = 1.0 - ellipsoid.e2 * sin2_lat;
    ellipsoid.a / poly.sqrt()
}
