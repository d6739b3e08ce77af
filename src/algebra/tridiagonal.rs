#![allow(non_snake_case)]

use crate::algebra::{
    DimensionError, FloatT, Matrix, ShapedMatrix, SymMatrixVectorMultiply, VectorMath,
};
#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Symmetric tridiagonal matrix in compact form.
///
/// Only the main diagonal (length `n`) and the sub-diagonal (length `n-1`)
/// are stored.  The super-diagonal is implied by symmetry.
///
/// __Example usage__ : To construct the 3 x 3 matrix
/// ```text
/// A = [4.  1.  0.]
///     [1.  4.  1.]
///     [0.  1.  4.]
/// ```
///
/// ```
/// use symsolve::algebra::SymTridiagonal;
///
/// let A = SymTridiagonal::new(vec![4., 4., 4.], vec![1., 1.]).unwrap();
/// assert_eq!(A.dim(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct SymTridiagonal<T = f64> {
    /// main diagonal
    pub diag: Vec<T>,
    /// sub-diagonal, i.e. `A[k+1,k]` for `k = 0..n-1`
    pub offdiag: Vec<T>,
}

impl<T> SymTridiagonal<T>
where
    T: FloatT,
{
    /// Compact matrix from its bands.  Requires a nonempty diagonal
    /// and an off-diagonal one element shorter.
    pub fn new(diag: Vec<T>, offdiag: Vec<T>) -> Result<Self, DimensionError> {
        DimensionError::check_min("diagonal", 1, diag.len())?;
        DimensionError::check("off-diagonal", diag.len() - 1, offdiag.len())?;
        Ok(Self { diag, offdiag })
    }

    /// Extract the bands of a square dense matrix.  Only the diagonal and
    /// sub-diagonal of `A` are read, and all other entries are ignored.
    pub fn from_dense(A: &Matrix<T>) -> Result<Self, DimensionError> {
        if !A.is_square() {
            return Err(DimensionError::NotSquare {
                nrows: A.nrows(),
                ncols: A.ncols(),
            });
        }
        let n = A.nrows();
        DimensionError::check_min("matrix", 1, n)?;

        let diag = (0..n).map(|k| A[(k, k)]).collect();
        let offdiag = (0..n - 1).map(|k| A[(k + 1, k)]).collect();
        Ok(Self { diag, offdiag })
    }

    /// Expand to a full dense matrix
    pub fn to_dense(&self) -> Matrix<T> {
        let n = self.dim();
        let mut A = Matrix::zeros((n, n));
        for (k, &d) in self.diag.iter().enumerate() {
            A[(k, k)] = d;
        }
        for (k, &e) in self.offdiag.iter().enumerate() {
            A[(k + 1, k)] = e;
            A[(k, k + 1)] = e;
        }
        A
    }

    /// Matrix dimension
    pub fn dim(&self) -> usize {
        self.diag.len()
    }
}

impl<T> ShapedMatrix for SymTridiagonal<T>
where
    T: FloatT,
{
    fn nrows(&self) -> usize {
        self.dim()
    }
    fn ncols(&self) -> usize {
        self.dim()
    }
}

impl<T> SymMatrixVectorMultiply for SymTridiagonal<T>
where
    T: FloatT,
{
    type T = T;
    // implements y = αA*x + βy
    fn symv(&self, y: &mut [T], x: &[T], α: T, β: T) {
        let n = self.dim();
        assert!(n == x.len() && n == y.len());

        if β == T::zero() {
            y.set(T::zero());
        } else if β != T::one() {
            y.scale(β);
        }

        for k in 0..n {
            let mut s = self.diag[k] * x[k];
            if k > 0 {
                s += self.offdiag[k - 1] * x[k - 1];
            }
            if k + 1 < n {
                s += self.offdiag[k] * x[k + 1];
            }
            y[k] += α * s;
        }
    }
}

#[test]
fn test_symtridiagonal_dense() {
    #[rustfmt::skip]
    let A = Matrix::from(&[
        [ 2., -1.,  9.],
        [-1.,  2., -3.],
        [ 9., -3.,  5.],
    ]);
    let S = SymTridiagonal::from_dense(&A).unwrap();
    assert_eq!(S.diag, [2., 2., 5.]);
    assert_eq!(S.offdiag, [-1., -3.]);

    #[rustfmt::skip]
    let B = Matrix::from(&[
        [ 2., -1.,  0.],
        [-1.,  2., -3.],
        [ 0., -3.,  5.],
    ]);
    assert_eq!(S.to_dense(), B);

    let R = Matrix::<f64>::zeros((2, 3));
    assert!(SymTridiagonal::from_dense(&R).is_err());
    assert!(SymTridiagonal::from_dense(&Matrix::<f64>::zeros((0, 0))).is_err());
}

#[test]
fn test_symtridiagonal_new() {
    assert!(SymTridiagonal::new(vec![1.], vec![]).is_ok());
    assert_eq!(
        SymTridiagonal::<f64>::new(vec![], vec![]),
        Err(DimensionError::TooSmall {
            what: "diagonal",
            min: 1,
            found: 0
        })
    );
    assert_eq!(
        SymTridiagonal::new(vec![1., 2.], vec![1., 1.]),
        Err(DimensionError::Mismatch {
            what: "off-diagonal",
            expected: 1,
            found: 2
        })
    );
}

#[test]
fn test_symv() {
    use crate::algebra::MatrixVectorMultiply;

    let S = SymTridiagonal::new(vec![4., 5., 6., 7.], vec![1., -2., 3.]).unwrap();
    let A = S.to_dense();
    let x = [1., -2., 3., 0.5];

    let mut y1 = vec![1., 1., 1., 1.];
    let mut y2 = y1.clone();
    S.symv(&mut y1, &x, 2.0, -1.0);
    A.gemv(&mut y2, &x, 2.0, -1.0);
    assert!(y1.norm_inf_diff(&y2) < 1e-14);
}
