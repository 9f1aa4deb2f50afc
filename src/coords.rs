//! Value types for the two sides of the projection.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::proj::svy21::Svy21;

/// WGS84 latitude/longitude in degrees.
///
/// No range is enforced; see [`crate::proj::bounds`] for opt-in validation.
#[derive(Clone, Copy, Debug)]
pub struct GeodeticCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeodeticCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Project with the shared SVY21 instance.
    pub fn to_planar(&self) -> PlanarCoordinate {
        self.to_planar_with(Svy21::wgs84())
    }

    pub fn to_planar_with(&self, projection: &Svy21) -> PlanarCoordinate {
        let (northing, easting) = projection.forward(self.latitude, self.longitude);
        PlanarCoordinate::new(northing, easting)
    }
}

/// SVY21 northing/easting in metres.
#[derive(Clone, Copy, Debug)]
pub struct PlanarCoordinate {
    northing: f64,
    easting: f64,
}

impl PlanarCoordinate {
    pub fn new(northing: f64, easting: f64) -> Self {
        Self { northing, easting }
    }

    pub fn northing(&self) -> f64 {
        self.northing
    }

    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Unproject with the shared SVY21 instance.
    pub fn to_geodetic(&self) -> GeodeticCoordinate {
        self.to_geodetic_with(Svy21::wgs84())
    }

    pub fn to_geodetic_with(&self, projection: &Svy21) -> GeodeticCoordinate {
        let (latitude, longitude) = projection.inverse(self.northing, self.easting);
        GeodeticCoordinate::new(latitude, longitude)
    }
}

// Equality and hashing compare the bit patterns of both fields, so NaN equals
// itself and 0.0 differs from -0.0; this keeps Eq and Hash consistent.
macro_rules! impl_bitwise_eq {
    ($ty:ident, $a:ident, $b:ident) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.$a.to_bits() == other.$a.to_bits() && self.$b.to_bits() == other.$b.to_bits()
            }
        }

        impl Eq for $ty {}

        impl Hash for $ty {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.$a.to_bits().hash(state);
                self.$b.to_bits().hash(state);
            }
        }

        impl From<(f64, f64)> for $ty {
            fn from(value: (f64, f64)) -> Self {
                Self::new(value.0, value.1)
            }
        }

        impl From<$ty> for (f64, f64) {
            fn from(value: $ty) -> Self {
                (value.$a, value.$b)
            }
        }
    };
}

impl_bitwise_eq!(GeodeticCoordinate, latitude, longitude);
impl_bitwise_eq!(PlanarCoordinate, northing, easting);

impl fmt::Display for GeodeticCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GeodeticCoordinate [latitude={}, longitude={}]",
            self.latitude, self.longitude
        )
    }
}

impl fmt::Display for PlanarCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PlanarCoordinate [northing={}, easting={}]",
            self.northing, self.easting
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::collections::HashSet;

    #[test]
    fn test_equality_is_structural() {
        let a = GeodeticCoordinate::new(1.3, 103.8);
        assert_eq!(a, GeodeticCoordinate::new(1.3, 103.8));
        assert_ne!(a, GeodeticCoordinate::new(103.8, 1.3));
        let nan = PlanarCoordinate::new(f64::NAN, 1.0);
        assert_eq!(nan, PlanarCoordinate::new(f64::NAN, 1.0));
        let zero = PlanarCoordinate::new(0.0, 1.0);
        assert_ne!(zero, PlanarCoordinate::new(-0.0, 1.0));
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        let mut set = HashSet::new();
        set.insert(PlanarCoordinate::new(38_744.572, 28_001.642));
        set.insert(PlanarCoordinate::new(38_744.572, 28_001.642));
        set.insert(PlanarCoordinate::new(39_105.269, 30_629.967));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        let g = GeodeticCoordinate::new(1.5, 103.25);
        assert_eq!(
            g.to_string(),
            "GeodeticCoordinate [latitude=1.5, longitude=103.25]"
        );
        let p = PlanarCoordinate::new(38_744.5, 28_001.25);
        assert_eq!(
            p.to_string(),
            "PlanarCoordinate [northing=38744.5, easting=28001.25]"
        );
    }

    #[test]
    fn test_tuple_conversions() {
        let p: PlanarCoordinate = (1.0, 2.0).into();
        assert_eq!(p.northing(), 1.0);
        assert_eq!(p.easting(), 2.0);
        let t: (f64, f64) = GeodeticCoordinate::new(3.0, 4.0).into();
        assert_eq!(t, (3.0, 4.0));
    }

    #[test]
    fn test_conversion_through_engine() {
        let planar = PlanarCoordinate::new(48_187.789, 27_720.130);
        let geo = planar.to_geodetic();
        assert_abs_diff_eq!(geo.latitude(), 1.452_067_051_837_969_2, epsilon = 1e-10);
        assert_abs_diff_eq!(geo.longitude(), 103.830_803_327_771_38, epsilon = 1e-10);

        let back = geo.to_planar_with(&Svy21::new());
        assert_abs_diff_eq!(back.northing(), planar.northing(), epsilon = 1e-3);
        assert_abs_diff_eq!(back.easting(), planar.easting(), epsilon = 1e-3);
    }
}
