//! Fixed SVY21 projection parameters and the series coefficients derived from them.
//!
//! Fundamental point: Base 7 at Pierce Reservoir,
//! 1°22'02.9154"N 103°49'31.9752"E. The origin below is the rounded
//! (1.366666°, 103.833333°); the published SVY21 fixtures are reproduced with
//! these values, not with the exact fundamental point.

use std::f64::consts::PI;

use super::ellipsoid::Ellipsoid;

/// Origin latitude (degrees).
pub const ORIGIN_LAT: f64 = 1.366_666;
/// Origin longitude (degrees).
pub const ORIGIN_LON: f64 = 103.833_333;
/// False northing (metres).
pub const FALSE_NORTHING: f64 = 38_744.572;
/// False easting (metres).
pub const FALSE_EASTING: f64 = 28_001.642;
/// Central scale factor.
pub const SCALE_FACTOR: f64 = 1.0;

/// Radians per degree, in the form the series are evaluated with.
pub(crate) const RAD_PER_DEG: f64 = PI / 180.0;

/// Meridian-quadrant series coefficients A0, A2, A4, A6 (eccentricity form).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeridianSeries {
    pub a0: f64,
    pub a2: f64,
    pub a4: f64,
    pub a6: f64,
}

impl MeridianSeries {
    pub const fn new(ellipsoid: &Ellipsoid) -> Self {
        let e2 = ellipsoid.e2;
        let e4 = ellipsoid.e4;
        let e6 = ellipsoid.e6;
        Self {
            a0: 1.0 - (e2 / 4.0) - (3.0 * e4 / 64.0) - (5.0 * e6 / 256.0),
            a2: (3.0 / 8.0) * (e2 + (e4 / 4.0) + (15.0 * e6 / 128.0)),
            a4: (15.0 / 256.0) * (e4 + (3.0 * e6 / 4.0)),
            a6: 35.0 * e6 / 3072.0,
        }
    }
}

/// Footpoint-latitude series (third-flattening form) used by the inverse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FootpointSeries {
    /// Mean length of one degree of meridian arc (metres per degree).
    pub g: f64,
    /// Coefficients of sin(2σ), sin(4σ), sin(6σ), sin(8σ).
    pub c2: f64,
    pub c4: f64,
    pub c6: f64,
    pub c8: f64,
}

impl FootpointSeries {
    pub const fn new(ellipsoid: &Ellipsoid) -> Self {
        let a = ellipsoid.a;
        let n = ellipsoid.n;
        let n2 = ellipsoid.n2;
        let n3 = ellipsoid.n3;
        let n4 = ellipsoid.n4;
        Self {
            g: a * (1.0 - n)
                * (1.0 - n2)
                * (1.0 + (9.0 * n2 / 4.0) + (225.0 * n4 / 64.0))
                * RAD_PER_DEG,
            c2: (3.0 * n / 2.0) - (27.0 * n3 / 32.0),
            c4: (21.0 * n2 / 16.0) - (55.0 * n4 / 32.0),
            c6: 151.0 * n3 / 96.0,
            c8: 1097.0 * n4 / 512.0,
        }
    }
}
