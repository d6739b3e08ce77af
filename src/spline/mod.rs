//! Natural cubic splines on uniformly spaced knots.
//!
//! A spline is described by its knot spacing `h`, the knot values
//! `y[0..n]` and the second derivatives `ypp[0..n]` of the interpolant at
//! the knots, with `ypp[0] = ypp[n-1] = 0` for a natural spline.  The
//! knots are located at `x_i = i*h`, so the domain is `[0, (n-1)*h]`.
//!
//! Second derivatives are computed by solving a reduced symmetric
//! tridiagonal system with the [`tridiag`](crate::tridiag) module, or
//! optionally by a spectral expansion in the eigenvectors of that system.

use crate::algebra::*;
use crate::tridiag::TridiagError;
use thiserror::Error;

mod derivatives;
mod evaluate;
mod natural;
mod sampling;
pub use derivatives::*;
pub use evaluate::*;
pub use natural::*;
pub use sampling::*;

/// Error codes returnable from spline construction and evaluation

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplineError {
    #[error("Spline data has incompatible dimensions: {0}")]
    InvalidDimension(#[from] DimensionError),
    #[error("Knot spacing must be finite and positive (found {0})")]
    InvalidSpacing(f64),
    #[error("Query point {x} is outside of the spline domain [{lower}, {upper}]")]
    OutOfDomain { x: f64, lower: f64, upper: f64 },
    #[error("Second derivative solve failed: {0}")]
    Tridiag(#[from] TridiagError),
}

// ---------------------------------------------------------
// argument checks shared by the spline functions
// ---------------------------------------------------------

fn check_spacing<T: FloatT>(h: T) -> Result<(), SplineError> {
    if h.is_finite() && h > T::zero() {
        Ok(())
    } else {
        Err(SplineError::InvalidSpacing(_to_f64(h)))
    }
}

fn check_knots<T: FloatT>(y: &[T]) -> Result<(), SplineError> {
    DimensionError::check_min("knot values", 2, y.len())?;
    Ok(())
}

// upper end of the domain [0, (n-1)h]
fn domain_upper<T: FloatT>(h: T, n: usize) -> T {
    h * (n - 1).as_T()
}

fn _to_f64<T: FloatT>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}
