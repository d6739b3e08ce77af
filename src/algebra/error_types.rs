use thiserror::Error;

/// Error type returned when vector or matrix arguments have
/// incompatible dimensions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    /// An argument does not have the length implied by the others
    #[error("{what} has length {found}, expected {expected}")]
    Mismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// An argument is shorter than the minimum supported length
    #[error("{what} has length {found}, at least {min} required")]
    TooSmall {
        what: &'static str,
        min: usize,
        found: usize,
    },
    /// A matrix argument is required to be square
    #[error("matrix has size {nrows} x {ncols}, but a square matrix is required")]
    NotSquare { nrows: usize, ncols: usize },
}

impl DimensionError {
    /// Returns `Ok` if `found == expected`, and a `Mismatch` error otherwise.
    pub fn check(what: &'static str, expected: usize, found: usize) -> Result<(), Self> {
        if expected == found {
            Ok(())
        } else {
            Err(DimensionError::Mismatch {
                what,
                expected,
                found,
            })
        }
    }

    /// Returns `Ok` if `found >= min`, and a `TooSmall` error otherwise.
    pub fn check_min(what: &'static str, min: usize, found: usize) -> Result<(), Self> {
        if found >= min {
            Ok(())
        } else {
            Err(DimensionError::TooSmall { what, min, found })
        }
    }
}

/// Error type returned by dense factorization routines.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenseFactorizationError {
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// The leading minor ending at the given column is not positive
    #[error("Cholesky error: matrix is not positive definite (column {0})")]
    NotPositiveDefinite(usize),
}

/// Error type returned by the test matrix generators.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeneratorError {
    /// The requested dimension is not supported by the generator
    #[error("Bad matrix dimension {0}: must be odd and positive")]
    BadDimension(usize),
    /// A generator parameter is outside its admissible range
    #[error("Bad value for generator parameter \"{0}\"")]
    BadParameter(&'static str),
}
