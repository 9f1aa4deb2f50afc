/// Reference ellipsoid parameters, with the eccentricity and third-flattening
/// powers the SVY21 series expansions consume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// Flattening (dimensionless)
    pub f: f64,
    /// Semi-minor axis: a * (1 - f)
    pub b: f64,
    /// First eccentricity squared: 2f - f^2
    pub e2: f64,
    /// e2^2
    pub e4: f64,
    /// e2^3
    pub e6: f64,
    /// Third flattening: (a - b) / (a + b)
    pub n: f64,
    pub n2: f64,
    pub n3: f64,
    pub n4: f64,
}

impl Ellipsoid {
    pub const fn new(a: f64, f: f64) -> Self {
        let b = a * (1.0 - f);
        let e2 = (2.0 * f) - (f * f);
        let e4 = e2 * e2;
        let e6 = e4 * e2;
        let n = (a - b) / (a + b);
        let n2 = n * n;
        let n3 = n2 * n;
        let n4 = n2 * n2;
        Self {
            a,
            f,
            b,
            e2,
            e4,
            e6,
            n,
            n2,
            n3,
            n4,
        }
    }

    /// Get the first eccentricity.
    pub fn eccentricity(&self) -> f64 {
        self.e2.sqrt()
    }
}

pub const WGS84: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_223_563);
