//! Column-wise transforms over ndarray vectors.

use log::debug;
use ndarray::{Array1, ArrayView1, Zip};

use crate::error::Svy21Error;
use crate::proj::svy21::Svy21;

fn check_lengths(first: usize, second: usize) -> Result<(), Svy21Error> {
    if first != second {
        return Err(Svy21Error::LengthMismatch { first, second });
    }
    Ok(())
}

/// Project latitude/longitude columns (degrees) to (northing, easting) columns.
pub fn forward_arrays(
    projection: &Svy21,
    lat: ArrayView1<'_, f64>,
    lon: ArrayView1<'_, f64>,
) -> Result<(Array1<f64>, Array1<f64>), Svy21Error> {
    check_lengths(lat.len(), lon.len())?;
    debug!("forward_arrays: {} points", lat.len());

    let mut northing = Array1::zeros(lat.len());
    let mut easting = Array1::zeros(lat.len());
    Zip::from(&mut northing)
        .and(&mut easting)
        .and(&lat)
        .and(&lon)
        .par_for_each(|n, e, &la, &lo| {
            (*n, *e) = projection.forward(la, lo);
        });

    Ok((northing, easting))
}

/// Unproject (northing, easting) columns to latitude/longitude columns (degrees).
pub fn inverse_arrays(
    projection: &Svy21,
    northing: ArrayView1<'_, f64>,
    easting: ArrayView1<'_, f64>,
) -> Result<(Array1<f64>, Array1<f64>), Svy21Error> {
    check_lengths(northing.len(), easting.len())?;
    debug!("inverse_arrays: {} points", northing.len());

    let mut lat = Array1::zeros(northing.len());
    let mut lon = Array1::zeros(northing.len());
    Zip::from(&mut lat)
        .and(&mut lon)
        .and(&northing)
        .and(&easting)
        .par_for_each(|la, lo, &n, &e| {
            (*la, *lo) = projection.inverse(n, e);
        });

    Ok((lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_forward_arrays_match_scalar() {
        let p = Svy21::new();
        let lat = array![1.366_666, 1.344_625_544_324_117_7, 1.452_067_051_837_969_2];
        let lon = array![103.833_333, 103.727_943_780_417_92, 103.830_803_327_771_38];
        let (n, e) = forward_arrays(&p, lat.view(), lon.view()).unwrap();
        for i in 0..lat.len() {
            assert_eq!((n[i], e[i]), p.forward(lat[i], lon[i]));
        }
    }

    #[test]
    fn test_inverse_arrays_match_scalar() {
        let p = Svy21::new();
        let n = array![38_744.572, 39_105.269, 36_307.704, 48_187.789];
        let e = array![28_001.642, 30_629.967, 16_272.970, 27_720.130];
        let (lat, lon) = inverse_arrays(&p, n.view(), e.view()).unwrap();
        for i in 0..n.len() {
            assert_eq!((lat[i], lon[i]), p.inverse(n[i], e[i]));
        }
    }

    #[test]
    fn test_length_mismatch() {
        let p = Svy21::new();
        let a = array![1.0, 2.0];
        let b = array![1.0];
        let err = forward_arrays(&p, a.view(), b.view()).unwrap_err();
        assert_eq!(err, Svy21Error::LengthMismatch { first: 2, second: 1 });
        assert!(inverse_arrays(&p, b.view(), a.view()).is_err());
    }
}
