#![allow(non_snake_case)]

use crate::algebra::{FloatT, GeneratorError, Matrix};

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// Symmetric circulant test matrix with unit diagonal and geometrically
    /// decaying bands, i.e. `A[j, (j+i) mod n] = A[(j+i) mod n, j] = c^i` for
    /// `i = 1, ..., (n-1)/2`.
    ///
    /// `n` must be odd and positive, and `c` must lie in `[0, 1]`.  The
    /// result is strictly diagonally dominant, and hence positive definite,
    /// whenever `c < 1/3`.   Larger values of `c` produce progressively
    /// worse conditioned (and eventually indefinite) matrices.
    pub fn circulant_decay(n: usize, c: T) -> Result<Self, GeneratorError> {
        if n % 2 != 1 {
            return Err(GeneratorError::BadDimension(n));
        }
        if !(c >= T::zero() && c <= T::one()) {
            return Err(GeneratorError::BadParameter("c"));
        }

        let mut A = Matrix::identity(n);
        let mut el = c;
        for i in 1..(n + 1) / 2 {
            for j in 0..n {
                let k = (i + j) % n;
                A[(j, k)] = el;
                A[(k, j)] = el;
            }
            el *= c;
        }
        Ok(A)
    }
}

#[test]
fn test_circulant_decay() {
    let A = Matrix::<f64>::circulant_decay(5, 0.5).unwrap();
    #[rustfmt::skip]
    let B = Matrix::from(&[
        [1.,   0.5,  0.25, 0.25, 0.5 ],
        [0.5,  1.,   0.5,  0.25, 0.25],
        [0.25, 0.5,  1.,   0.5,  0.25],
        [0.25, 0.25, 0.5,  1.,   0.5 ],
        [0.5,  0.25, 0.25, 0.5,  1.  ],
    ]);
    assert_eq!(A, B);

    assert_eq!(Matrix::<f64>::circulant_decay(1, 0.3).unwrap(), Matrix::identity(1));
}

#[test]
fn test_circulant_decay_bad_inputs() {
    assert_eq!(
        Matrix::<f64>::circulant_decay(4, 0.5),
        Err(GeneratorError::BadDimension(4))
    );
    assert_eq!(
        Matrix::<f64>::circulant_decay(0, 0.5),
        Err(GeneratorError::BadDimension(0))
    );
    assert_eq!(
        Matrix::<f64>::circulant_decay(3, 1.5),
        Err(GeneratorError::BadParameter("c"))
    );
    assert!(Matrix::<f64>::circulant_decay(3, f64::NAN).is_err());
}
