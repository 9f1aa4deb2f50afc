use std::convert::Infallible;

use thiserror::Error;

/// Errors raised by the layers built around the projection engine.
///
/// The forward and inverse transforms themselves never fail; these variants
/// come from the opt-in bounds layer and the batch entry points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Svy21Error {
    #[error("Coordinate out of bounds: {0}")]
    OutOfBounds(String),

    #[error("Non-finite coordinate: ({0}, {1})")]
    NonFinite(f64, f64),

    #[error("Length mismatch: {first} and {second}")]
    LengthMismatch { first: usize, second: usize },
}

impl From<Infallible> for Svy21Error {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}
