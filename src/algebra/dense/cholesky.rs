#![allow(non_snake_case)]

use crate::algebra::{DenseFactorizationError, FloatT, Matrix, ShapedMatrix, VectorMath};

/// Dense Cholesky factorization `A = LLᵀ`, used as a reference solver for
/// small symmetric positive definite systems.
pub struct CholeskyEngine<T> {
    /// lower triangular factor (stored as square dense)
    pub L: Matrix<T>,
}

impl<T> CholeskyEngine<T>
where
    T: FloatT,
{
    pub fn new(n: usize) -> Self {
        let L = Matrix::<T>::zeros((n, n));
        Self { L }
    }

    /// Factor `A`, reading only its lower triangle.  `A` is not modified.
    pub fn factor(&mut self, A: &Matrix<T>) -> Result<(), DenseFactorizationError> {
        if A.size() != self.L.size() {
            return Err(DenseFactorizationError::IncompatibleDimension);
        }

        let n = self.L.nrows();
        self.L.data_mut().set(T::zero());

        for j in 0..n {
            let mut s = A[(j, j)];
            for k in 0..j {
                s -= self.L[(j, k)] * self.L[(j, k)];
            }
            // NaN pivots are rejected too
            if !(s > T::zero()) {
                return Err(DenseFactorizationError::NotPositiveDefinite(j));
            }
            let ljj = T::sqrt(s);
            self.L[(j, j)] = ljj;

            for i in (j + 1)..n {
                let mut s = A[(i, j)];
                for k in 0..j {
                    s -= self.L[(i, k)] * self.L[(j, k)];
                }
                self.L[(i, j)] = s / ljj;
            }
        }

        Ok(())
    }

    /// Solve `LLᵀx = b` in place using the most recent factorization
    pub fn solve(&self, b: &mut [T]) {
        let n = self.L.nrows();
        assert_eq!(b.len(), n);

        // forward substitution with L
        for i in 0..n {
            let mut s = b[i];
            for k in 0..i {
                s -= self.L[(i, k)] * b[k];
            }
            b[i] = s / self.L[(i, i)];
        }

        // backward substitution with Lᵀ
        for i in (0..n).rev() {
            let mut s = b[i];
            for k in (i + 1)..n {
                s -= self.L[(k, i)] * b[k];
            }
            b[i] = s / self.L[(i, i)];
        }
    }
}

#[test]
fn test_cholesky() {
    use crate::algebra::MatrixVectorMultiply;

    #[rustfmt::skip]
    let S = Matrix::from(
        &[[ 8., -2., 4.],
          [-2., 12., 2.],
          [ 4.,  2., 6.]]);

    let mut eng = CholeskyEngine::<f64>::new(3);
    assert!(eng.factor(&S).is_ok());

    // check L*Lᵀ column by column
    for j in 0..3 {
        let mut Ltej = vec![0.; 3];
        for i in 0..3 {
            Ltej[i] = eng.L[(j, i)];
        }
        let mut col = vec![0.; 3];
        eng.L.gemv(&mut col, &Ltej, 1.0, 0.0);
        assert!(col.norm_inf_diff(S.col_slice(j)) < 1e-12);
    }

    let xsol = [1., -1., 2.];
    let mut b = vec![0.; 3];
    S.gemv(&mut b, &xsol, 1.0, 0.0);
    eng.solve(&mut b);
    assert!(b.norm_inf_diff(&xsol) < 1e-12);
}

#[test]
fn test_cholesky_failures() {
    let mut eng = CholeskyEngine::<f64>::new(2);
    let A = Matrix::from(&[[1., 0.], [0., -1.]]);
    assert_eq!(
        eng.factor(&A),
        Err(DenseFactorizationError::NotPositiveDefinite(1))
    );

    let B = Matrix::<f64>::identity(3);
    assert_eq!(
        eng.factor(&B),
        Err(DenseFactorizationError::IncompatibleDimension)
    );
}
