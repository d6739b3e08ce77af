//! symsolve algebra module.
//!
//! __This module is not intended for general use__.  It provides the
//! internal vector and matrix types and math traits used by the
//! tridiagonal, spline and iterative solvers.
//!
//! All floating point calculations are represented internally on values
//! implementing the [`FloatT`] trait, with implementations provided
//! for f32 and f64 native types.

// first import and flatten the solver's collection
// of core numeric types and matrix / vector traits.

mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;

// matrix types and their implementations
mod dense;
mod tridiagonal;
pub use dense::*;
pub use tridiagonal::*;

// vector math implementations on slices
mod vecmath;
