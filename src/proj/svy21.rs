//! SVY21 — Transverse Mercator on WGS84, Redfearn series.
//!
//! Forward uses the 8th-order series in the longitude difference ω; inverse
//! recovers the footpoint latitude from the meridian arc and applies the
//! matching 7th-order corrections in x = E'/(kν').

use std::convert::Infallible;
use std::f64::consts::PI;
use std::sync::LazyLock;

use log::trace;

use crate::proj::common::{meridian_radius, meridional_arc, prime_vertical_radius};
use crate::proj::constants::{
    FootpointSeries, MeridianSeries, FALSE_EASTING, FALSE_NORTHING, ORIGIN_LAT, ORIGIN_LON,
    RAD_PER_DEG, SCALE_FACTOR,
};
use crate::proj::ellipsoid::{Ellipsoid, WGS84};
use crate::proj::Projection;

static SHARED: LazyLock<Svy21> = LazyLock::new(Svy21::new);

/// The SVY21 projection with its precomputed constant set.
///
/// Construction derives every series coefficient once; the value is `Copy`
/// and may be shared freely between threads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Svy21 {
    ellipsoid: Ellipsoid,
    lat0: f64,
    lon0: f64,
    k0: f64,
    false_northing: f64,
    false_easting: f64,
    // Precomputed constants
    meridian: MeridianSeries,
    footpoint: FootpointSeries,
    m0: f64, // Meridional arc at lat0
}

impl Default for Svy21 {
    fn default() -> Self {
        Self::new()
    }
}

impl Svy21 {
    pub fn new() -> Self {
        let ellipsoid = WGS84;
        let meridian = MeridianSeries::new(&ellipsoid);
        let footpoint = FootpointSeries::new(&ellipsoid);
        let m0 = meridional_arc(&ellipsoid, &meridian, ORIGIN_LAT);

        trace!("svy21 constants: {meridian:?} {footpoint:?} m0={m0}");

        Self {
            ellipsoid,
            lat0: ORIGIN_LAT,
            lon0: ORIGIN_LON,
            k0: SCALE_FACTOR,
            false_northing: FALSE_NORTHING,
            false_easting: FALSE_EASTING,
            meridian,
            footpoint,
            m0,
        }
    }

    /// Process-wide instance, built on first use.
    pub fn wgs84() -> &'static Svy21 {
        &SHARED
    }

    pub fn meridian_series(&self) -> &MeridianSeries {
        &self.meridian
    }

    pub fn footpoint_series(&self) -> &FootpointSeries {
        &self.footpoint
    }

    /// Meridional arc from the equator to the origin latitude (metres).
    pub fn origin_arc(&self) -> f64 {
        self.m0
    }

    fn calc_m(&self, lat_deg: f64) -> f64 {
        meridional_arc(&self.ellipsoid, &self.meridian, lat_deg)
    }

    fn calc_rho(&self, sin2_lat: f64) -> f64 {
        meridian_radius(&self.ellipsoid, sin2_lat)
    }

    fn calc_v(&self, sin2_lat: f64) -> f64 {
        prime_vertical_radius(&self.ellipsoid, sin2_lat)
    }

    /// Latitude/longitude (degrees) to (northing, easting) in metres.
    ///
    /// No range checks: inputs far from Singapore give finite but meaningless
    /// results.
    pub fn forward(&self, lat: f64, lon: f64) -> (f64, f64) {
        let lat_r = lat * PI / 180.0;
        let sin_lat = lat_r.sin();
        let sin2_lat = sin_lat * sin_lat;
        let cos_lat = lat_r.cos();
        let cos2_lat = cos_lat * cos_lat;
        let cos3_lat = cos2_lat * cos_lat;
        let cos4_lat = cos3_lat * cos_lat;
        let cos5_lat = cos4_lat * cos_lat;
        let cos6_lat = cos5_lat * cos_lat;
        let cos7_lat = cos6_lat * cos_lat;

        let rho = self.calc_rho(sin2_lat);
        let v = self.calc_v(sin2_lat);
        let psi = v / rho;
        let t = lat_r.tan();
        let w = (lon - self.lon0) * PI / 180.0;

        let m = self.calc_m(lat);

        let w2 = w * w;
        let w4 = w2 * w2;
        let w6 = w4 * w2;
        let w8 = w6 * w2;

        let psi2 = psi * psi;
        let psi3 = psi2 * psi;
        let psi4 = psi3 * psi;

        let t2 = t * t;
        let t4 = t2 * t2;
        let t6 = t4 * t2;

        // Northing
        let n_term1 = w2 / 2.0 * v * sin_lat * cos_lat;
        let n_term2 = w4 / 24.0 * v * sin_lat * cos3_lat * (4.0 * psi2 + psi - t2);
        let n_term3 = w6 / 720.0
            * v
            * sin_lat
            * cos5_lat
            * ((8.0 * psi4) * (11.0 - 24.0 * t2) - (28.0 * psi3) * (1.0 - 6.0 * t2)
                + psi2 * (1.0 - 32.0 * t2)
                - psi * 2.0 * t2
                + t4);
        let n_term4 =
            w8 / 40320.0 * v * sin_lat * cos7_lat * (1385.0 - 3111.0 * t2 + 543.0 * t4 - t6);
        let northing =
            self.false_northing + self.k0 * (m - self.m0 + n_term1 + n_term2 + n_term3 + n_term4);

        // Easting
        let e_term1 = w2 / 6.0 * cos2_lat * (psi - t2);
        let e_term2 = w4 / 120.0
            * cos4_lat
            * ((4.0 * psi3) * (1.0 - 6.0 * t2) + psi2 * (1.0 + 8.0 * t2) - psi * 2.0 * t2 + t4);
        let e_term3 = w6 / 5040.0 * cos6_lat * (61.0 - 479.0 * t2 + 179.0 * t4 - t6);
        let easting =
            self.false_easting + self.k0 * v * w * cos_lat * (1.0 + e_term1 + e_term2 + e_term3);

        (northing, easting)
    }

    /// (northing, easting) in metres to latitude/longitude in degrees.
    ///
    /// No range checks: the longitude series divides by cos(latitude), so a
    /// northing whose footpoint reaches ±90° yields a degenerate or non-finite
    /// result, which is passed through unchanged.
    pub fn inverse(&self, northing: f64, easting: f64) -> (f64, f64) {
        let n_prime = northing - self.false_northing;
        let m_prime = self.m0 + (n_prime / self.k0);
        let sigma = (m_prime * PI) / (180.0 * self.footpoint.g);

        // Footpoint latitude
        let fp = &self.footpoint;
        let lat_prime = sigma
            + fp.c2 * (2.0 * sigma).sin()
            + fp.c4 * (4.0 * sigma).sin()
            + fp.c6 * (6.0 * sigma).sin()
            + fp.c8 * (8.0 * sigma).sin();

        let sin_lat_prime = lat_prime.sin();
        let sin2_lat_prime = sin_lat_prime * sin_lat_prime;

        let rho_prime = self.calc_rho(sin2_lat_prime);
        let v_prime = self.calc_v(sin2_lat_prime);
        let psi_prime = v_prime / rho_prime;
        let psi_prime2 = psi_prime * psi_prime;
        let psi_prime3 = psi_prime2 * psi_prime;
        let psi_prime4 = psi_prime3 * psi_prime;
        let t_prime = lat_prime.tan();
        let t_prime2 = t_prime * t_prime;
        let t_prime4 = t_prime2 * t_prime2;
        let t_prime6 = t_prime4 * t_prime2;
        let e_prime = easting - self.false_easting;
        let x = e_prime / (self.k0 * v_prime);
        let x2 = x * x;
        let x3 = x2 * x;
        let x5 = x3 * x2;
        let x7 = x5 * x2;

        // Latitude
        let lat_factor = t_prime / (self.k0 * rho_prime);
        let lat_term1 = lat_factor * ((e_prime * x) / 2.0);
        let lat_term2 = lat_factor
            * ((e_prime * x3) / 24.0)
            * ((-4.0 * psi_prime2) + (9.0 * psi_prime) * (1.0 - t_prime2) + (12.0 * t_prime2));
        let lat_term3 = lat_factor
            * ((e_prime * x5) / 720.0)
            * ((8.0 * psi_prime4) * (11.0 - 24.0 * t_prime2)
                - (12.0 * psi_prime3) * (21.0 - 71.0 * t_prime2)
                + (15.0 * psi_prime2) * (15.0 - 98.0 * t_prime2 + 15.0 * t_prime4)
                + (180.0 * psi_prime) * (5.0 * t_prime2 - 3.0 * t_prime4)
                + 360.0 * t_prime4);
        let lat_term4 = lat_factor
            * ((e_prime * x7) / 40320.0)
            * (1385.0 - 3633.0 * t_prime2 + 4095.0 * t_prime4 + 1575.0 * t_prime6);
        let lat = lat_prime - lat_term1 + lat_term2 - lat_term3 + lat_term4;

        // Longitude
        let sec_lat = 1.0 / lat.cos();
        let lon_term1 = x * sec_lat;
        let lon_term2 = ((x3 * sec_lat) / 6.0) * (psi_prime + 2.0 * t_prime2);
        let lon_term3 = ((x5 * sec_lat) / 120.0)
            * ((-4.0 * psi_prime3) * (1.0 - 6.0 * t_prime2)
                + psi_prime2 * (9.0 - 68.0 * t_prime2)
                + 72.0 * psi_prime * t_prime2
                + 24.0 * t_prime4);
        let lon_term4 = ((x7 * sec_lat) / 5040.0)
            * (61.0 + 662.0 * t_prime2 + 1320.0 * t_prime4 + 720.0 * t_prime6);
        let lon = (self.lon0 * PI / 180.0) + lon_term1 - lon_term2 + lon_term3 - lon_term4;

        (lat / RAD_PER_DEG, lon / RAD_PER_DEG)
    }

    /// Projection origin (latitude, longitude) in degrees.
    pub fn origin(&self) -> (f64, f64) {
        (self.lat0, self.lon0)
    }
}

impl Projection for Svy21 {
    type Error = Infallible;

    fn forward(&self, lat: f64, lon: f64) -> Result<(f64, f64), Infallible> {
        Ok(Svy21::forward(self, lat, lon))
    }

    fn inverse(&self, northing: f64, easting: f64) -> Result<(f64, f64), Infallible> {
        Ok(Svy21::inverse(self, northing, easting))
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    fn central_meridian(&self) -> Option<f64> {
        Some(self.lon0)
    }
}
