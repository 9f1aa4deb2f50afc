pub mod bounds;
pub mod common;
pub mod constants;
pub mod ellipsoid;
pub mod svy21;

use log::debug;
use rayon::prelude::*;

/// Trait for map projections supporting forward and inverse transforms.
///
/// Coordinates are in degrees on the geodetic side and metres on the planar
/// side. The bare SVY21 engine never fails (`Error = Infallible`); wrappers
/// that validate their input report through `Self::Error`.
pub trait Projection: Send + Sync {
    type Error;

    /// Forward: (lat_deg, lon_deg) -> (northing, easting)
    fn forward(&self, lat: f64, lon: f64) -> Result<(f64, f64), Self::Error>;

    /// Inverse: (northing, easting) -> (lat_deg, lon_deg)
    fn inverse(&self, northing: f64, easting: f64) -> Result<(f64, f64), Self::Error>;

    /// Batch forward transform, in place.
    fn forward_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), Self::Error> {
        for c in coords.iter_mut() {
            *c = self.forward(c.0, c.1)?;
        }
        Ok(())
    }

    /// Batch inverse transform, in place.
    fn inverse_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), Self::Error> {
        for c in coords.iter_mut() {
            *c = self.inverse(c.0, c.1)?;
        }
        Ok(())
    }

    /// Parallel batch forward transform on the rayon pool.
    fn forward_par(&self, coords: &mut [(f64, f64)]) -> Result<(), Self::Error>
    where
        Self::Error: Send,
    {
        debug!("forward_par: {} points", coords.len());
        coords.par_iter_mut().try_for_each(|c| {
            *c = self.forward(c.0, c.1)?;
            Ok(())
        })
    }

    /// Parallel batch inverse transform on the rayon pool.
    fn inverse_par(&self, coords: &mut [(f64, f64)]) -> Result<(), Self::Error>
    where
        Self::Error: Send,
    {
        debug!("inverse_par: {} points", coords.len());
        coords.par_iter_mut().try_for_each(|c| {
            *c = self.inverse(c.0, c.1)?;
            Ok(())
        })
    }

    fn ellipsoid(&self) -> &ellipsoid::Ellipsoid;

    /// Longitude (degrees) of the line of true scale, where northing is
    /// smallest along a parallel. `None` when there is no such meridian.
    fn central_meridian(&self) -> Option<f64> {
        None
    }
}
