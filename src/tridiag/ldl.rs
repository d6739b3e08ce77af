#![allow(non_snake_case)]
use super::TridiagError;
use crate::algebra::*;
use std::iter::zip;

/// Performs $LDL^T$ factorization of a symmetric tridiagonal matrix
///
/// `L` is unit lower bidiagonal, so only its sub-diagonal multipliers are
/// stored.  `D` holds the pivots.

#[derive(Debug, Clone)]
pub struct TridiagLDL<T = f64> {
    // sub-diagonal of the unit lower factor (length n-1)
    L: Vec<T>,
    // pivots (length n)
    D: Vec<T>,
}

impl<T> TridiagLDL<T>
where
    T: FloatT,
{
    /// Factor `A`.  Fails if any pivot is exactly zero.
    pub fn new(A: &SymTridiagonal<T>) -> Result<Self, TridiagError> {
        let n = A.dim();
        DimensionError::check_min("diagonal", 1, n)?;
        DimensionError::check("off-diagonal", n - 1, A.offdiag.len())?;

        let mut D = Vec::with_capacity(n);
        let mut L = Vec::with_capacity(n - 1);

        D.push(A.diag[0]);
        if D[0] == T::zero() {
            return Err(TridiagError::SingularPivot { index: 0 });
        }

        for k in 1..n {
            let e = A.offdiag[k - 1];
            let l = e / D[k - 1];
            let d = A.diag[k] - l * e;
            if d == T::zero() {
                return Err(TridiagError::SingularPivot { index: k });
            }
            L.push(l);
            D.push(d);
        }

        Ok(Self { L, D })
    }

    /// Matrix dimension
    pub fn dim(&self) -> usize {
        self.D.len()
    }

    /// Diagonal factor `D`
    pub fn pivots(&self) -> &[T] {
        &self.D
    }

    /// Sub-diagonal of the unit lower factor `L`
    pub fn multipliers(&self) -> &[T] {
        &self.L
    }

    // Solves Ax = b using LDL factors for A.
    // Solves in place (x replaces b)
    pub fn solve(&self, b: &mut [T]) {
        // bomb if b is the wrong size
        assert_eq!(b.len(), self.D.len());
        _lsolve(&self.L, b);
        zip(b.iter_mut(), &self.D).for_each(|(b, d)| *b /= *d);
        _ltsolve(&self.L, b);
    }
}

// Solves (L+I)x = b, with x replacing b
pub(super) fn _lsolve<T: FloatT>(L: &[T], x: &mut [T]) {
    for k in 1..x.len() {
        x[k] -= L[k - 1] * x[k - 1];
    }
}

// Solves (L+I)'x = b, with x replacing b
pub(super) fn _ltsolve<T: FloatT>(L: &[T], x: &mut [T]) {
    for k in (0..x.len().saturating_sub(1)).rev() {
        x[k] -= L[k] * x[k + 1];
    }
}
