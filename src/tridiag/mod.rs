//! Direct $LDL^T$ solver for symmetric tridiagonal systems.
//!
//! The factorization is computed without pivoting in $O(n)$ time and
//! memory.  It succeeds for any matrix whose leading principal minors are
//! all nonzero, which includes every symmetric positive definite matrix.

#![allow(non_snake_case)]

use crate::algebra::*;
use thiserror::Error;

mod ldl;
pub use ldl::*;

#[cfg(test)]
mod test;

/// Error codes returnable from [`TridiagLDL`](TridiagLDL) factor and solve operations

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TridiagError {
    #[error("Tridiagonal data has incompatible dimensions: {0}")]
    InvalidDimension(#[from] DimensionError),
    #[error("Matrix factorization produced a zero pivot at index {index}")]
    SingularPivot { index: usize },
}

/// Solve the symmetric tridiagonal system `Ax = b`, where `A` has main
/// diagonal `diag` and sub-diagonal `offdiag`.
///
/// The dimension is implied by `diag.len()`, which must be at least 1.
/// `offdiag` must have one fewer element, and `b` must match `diag`.
pub fn solve<T>(diag: &[T], offdiag: &[T], b: &[T]) -> Result<Vec<T>, TridiagError>
where
    T: FloatT,
{
    let A = SymTridiagonal::new(diag.to_vec(), offdiag.to_vec())?;
    solve_system(&A, b)
}

/// Solve `Ax = b` for a symmetric tridiagonal matrix `A` held in dense
/// format.  Only the diagonal and sub-diagonal of `A` are read, and the
/// result is identical to that of [`solve`](solve) on the extracted bands.
pub fn solve_dense<T>(A: &Matrix<T>, b: &[T]) -> Result<Vec<T>, TridiagError>
where
    T: FloatT,
{
    let A = SymTridiagonal::from_dense(A)?;
    solve_system(&A, b)
}

fn solve_system<T>(A: &SymTridiagonal<T>, b: &[T]) -> Result<Vec<T>, TridiagError>
where
    T: FloatT,
{
    DimensionError::check("right hand side", A.dim(), b.len())?;
    let factors = TridiagLDL::new(A)?;
    let mut x = b.to_vec();
    factors.solve(&mut x);
    Ok(x)
}
