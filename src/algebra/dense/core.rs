#![allow(non_snake_case)]

use crate::algebra::{FloatT, ShapedMatrix, VectorMath};
#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Dense matrix in column major format
///
/// __Example usage__ : To construct the 3 x 3 matrix
/// ```text
/// A = [1.  3.  5.]
///     [2.  0.  6.]
///     [0.  4.  7.]
/// ```
///
/// ```
/// use symsolve::algebra::Matrix;
///
/// let A : Matrix<f64> = Matrix::new_from_slice(
///        (3, 3),                                   // size as tuple
///        &[1., 2., 0., 3., 0., 4., 5., 6., 7.],    // data in column major order
///     );
///
/// // optional correctness check
/// assert!(A.check_format().is_ok());
///
/// ```
///
/// Matrices can also be built from row major literals:
///
/// ```
/// use symsolve::algebra::Matrix;
///
/// let A = Matrix::from(&[
///     [1., 3., 5.],
///     [2., 0., 6.],
///     [0., 4., 7.],
/// ]);
/// ```

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct Matrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// vector of data in column major format
    pub data: Vec<T>,
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// `m` x `n` matrix of zeros
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self { m, n, data }
    }

    /// `n` x `n` identity matrix
    pub fn identity(n: usize) -> Self {
        let mut mat = Matrix::zeros((n, n));
        mat.set_identity();
        mat
    }

    pub fn set_identity(&mut self) {
        assert!(self.m == self.n);
        self.data.set(T::zero());
        for i in 0..self.n {
            self[(i, i)] = T::one();
        }
    }

    /// Matrix from column major data.   Panics if `src` does not
    /// contain exactly `m*n` values.
    pub fn new_from_slice(size: (usize, usize), src: &[T]) -> Self {
        let (m, n) = size;
        assert!(m * n == src.len());
        Self {
            m,
            n,
            data: src.to_vec(),
        }
    }

    /// Check that the dimension fields agree with the data length
    pub fn check_format(&self) -> Result<(), crate::algebra::DimensionError> {
        crate::algebra::DimensionError::check("matrix data", self.m * self.n, self.data.len())
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    pub(crate) fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 + self.m * idx.1
    }

    pub fn col_slice(&self, col: usize) -> &[T] {
        assert!(col < self.n);
        &self.data[(col * self.m)..(col + 1) * self.m]
    }

    pub fn col_slice_mut(&mut self, col: usize) -> &mut [T] {
        assert!(col < self.n);
        &mut self.data[(col * self.m)..(col + 1) * self.m]
    }

    /// True if the matrix is square and `|A[i,j] - A[j,i]| <= tol`
    /// for every pair of off diagonal entries.
    pub fn is_symmetric(&self, tol: T) -> bool {
        if !self.is_square() {
            return false;
        }
        for c in 0..self.n {
            for r in (c + 1)..self.m {
                // written as a negation so that NaNs report asymmetric
                if !(T::abs(self[(r, c)] - self[(c, r)]) <= tol) {
                    return false;
                }
            }
        }
        true
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

impl<T> Index<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.data[self.index_linear(idx)]
    }
}

impl<T> ShapedMatrix for Matrix<T>
where
    T: FloatT,
{
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}

// row major literals, e.g. Matrix::from(&[[1., 2.], [3., 4.]])
impl<T, const M: usize, const N: usize> From<&[[T; N]; M]> for Matrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; N]; M]) -> Self {
        let mut A = Matrix::zeros((M, N));
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                A[(r, c)] = v;
            }
        }
        A
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f)?;
        for i in 0..self.nrows() {
            write!(f, "[ ")?;
            for j in 0..self.ncols() {
                write!(f, " {:?}", self[(i, j)])?;
            }
            writeln!(f, "]")?;
        }
        writeln!(f)?;
        Ok(())
    }
}

#[test]
fn test_matrix_from_rows() {
    #[rustfmt::skip]
    let A = Matrix::from(&[
        [1., 3., 5.],
        [2., 0., 6.],
    ]);
    assert_eq!(A.size(), (2, 3));
    assert_eq!(A.data, [1., 2., 3., 0., 5., 6.]);
    assert_eq!(A[(1, 2)], 6.);
    assert_eq!(A.col_slice(1), [3., 0.]);
    assert!(A.check_format().is_ok());
}

#[test]
fn test_is_symmetric() {
    let mut A = Matrix::<f64>::identity(3);
    assert!(A.is_symmetric(0.));
    A[(0, 2)] = 1.;
    assert!(!A.is_symmetric(0.));
    assert!(A.is_symmetric(1.));
    A[(2, 0)] = f64::NAN;
    assert!(!A.is_symmetric(1e10));

    let B = Matrix::<f64>::zeros((2, 3));
    assert!(!B.is_symmetric(1.));
}
