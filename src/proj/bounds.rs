//! Opt-in input validation layered over a projection.
//!
//! The SVY21 transforms accept any number. `Bounded` wraps a projection and
//! rejects non-finite input and coordinates outside a geodetic box before
//! delegating, for callers that would rather fail than get a meaningless
//! result.

use log::warn;

use crate::error::Svy21Error;
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::svy21::Svy21;
use crate::proj::Projection;

/// Inclusive latitude/longitude box in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodeticBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl GeodeticBounds {
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// Singapore main island and outlying islands, with a margin.
    pub fn singapore() -> Self {
        Self::new(1.1, 1.5, 103.55, 104.15)
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat)
            && (self.min_lon..=self.max_lon).contains(&lon)
    }
}

impl Default for GeodeticBounds {
    fn default() -> Self {
        Self::singapore()
    }
}

/// Inclusive northing/easting box in metres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanarBounds {
    pub min_northing: f64,
    pub max_northing: f64,
    pub min_easting: f64,
    pub max_easting: f64,
}

impl PlanarBounds {
    pub fn contains(&self, northing: f64, easting: f64) -> bool {
        (self.min_northing..=self.max_northing).contains(&northing)
            && (self.min_easting..=self.max_easting).contains(&easting)
    }
}

/// A projection that validates its input against a bounding box.
pub struct Bounded<P> {
    inner: P,
    geodetic: GeodeticBounds,
    planar: PlanarBounds,
}

impl Bounded<Svy21> {
    /// SVY21 restricted to [`GeodeticBounds::singapore`].
    pub fn svy21() -> Self {
        Self::new(Svy21::new(), GeodeticBounds::singapore())
    }
}

impl<P> Bounded<P>
where
    P: Projection,
    P::Error: Into<Svy21Error>,
{
    /// Wrap `inner`. The planar box is the envelope of the projected corners
    /// and edge midpoints of `geodetic`, plus the top and bottom edges where
    /// they cross the central meridian; samples the inner projection rejects
    /// are skipped.
    pub fn new(inner: P, geodetic: GeodeticBounds) -> Self {
        let mid_lat = (geodetic.min_lat + geodetic.max_lat) / 2.0;
        let mid_lon = (geodetic.min_lon + geodetic.max_lon) / 2.0;
        let mut samples = vec![
            (geodetic.min_lat, geodetic.min_lon),
            (geodetic.min_lat, mid_lon),
            (geodetic.min_lat, geodetic.max_lon),
            (mid_lat, geodetic.min_lon),
            (mid_lat, geodetic.max_lon),
            (geodetic.max_lat, geodetic.min_lon),
            (geodetic.max_lat, mid_lon),
            (geodetic.max_lat, geodetic.max_lon),
        ];
        // Northing along a parallel bottoms out on the central meridian
        if let Some(lon0) = inner.central_meridian() {
            if (geodetic.min_lon..=geodetic.max_lon).contains(&lon0) {
                samples.push((geodetic.min_lat, lon0));
                samples.push((geodetic.max_lat, lon0));
            }
        }

        let mut planar = PlanarBounds {
            min_northing: f64::INFINITY,
            max_northing: f64::NEG_INFINITY,
            min_easting: f64::INFINITY,
            max_easting: f64::NEG_INFINITY,
        };
        for (lat, lon) in samples {
            if let Ok((n, e)) = inner.forward(lat, lon) {
                planar.min_northing = planar.min_northing.min(n);
                planar.max_northing = planar.max_northing.max(n);
                planar.min_easting = planar.min_easting.min(e);
                planar.max_easting = planar.max_easting.max(e);
            }
        }

        Self {
            inner,
            geodetic,
            planar,
        }
    }

    pub fn geodetic_bounds(&self) -> &GeodeticBounds {
        &self.geodetic
    }

    pub fn planar_bounds(&self) -> &PlanarBounds {
        &self.planar
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

fn check_finite(a: f64, b: f64) -> Result<(), Svy21Error> {
    if a.is_finite() && b.is_finite() {
        Ok(())
    } else {
        warn!("rejecting non-finite coordinate ({a}, {b})");
        Err(Svy21Error::NonFinite(a, b))
    }
}

impl<P> Projection for Bounded<P>
where
    P: Projection,
    P::Error: Into<Svy21Error>,
{
    type Error = Svy21Error;

    fn forward(&self, lat: f64, lon: f64) -> Result<(f64, f64), Svy21Error> {
        check_finite(lat, lon)?;
        if !self.geodetic.contains(lat, lon) {
            warn!("({lat}, {lon}) outside {:?}", self.geodetic);
            return Err(Svy21Error::OutOfBounds(format!(
                "lat={lat} lon={lon} not within lat [{}, {}], lon [{}, {}]",
                self.geodetic.min_lat,
                self.geodetic.max_lat,
                self.geodetic.min_lon,
                self.geodetic.max_lon
            )));
        }
        self.inner.forward(lat, lon).map_err(Into::into)
    }

    fn inverse(&self, northing: f64, easting: f64) -> Result<(f64, f64), Svy21Error> {
        check_finite(northing, easting)?;
        if !self.planar.contains(northing, easting) {
            warn!("N={northing} E={easting} outside {:?}", self.planar);
            return Err(Svy21Error::OutOfBounds(format!(
                "N={northing} E={easting} not within N [{:.3}, {:.3}], E [{:.3}, {:.3}]",
                self.planar.min_northing,
                self.planar.max_northing,
                self.planar.min_easting,
                self.planar.max_easting
            )));
        }
        self.inner.inverse(northing, easting).map_err(Into::into)
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        self.inner.ellipsoid()
    }

    fn central_meridian(&self) -> Option<f64> {
        self.inner.central_meridian()
    }
}
