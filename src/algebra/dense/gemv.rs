#![allow(non_snake_case)]

use crate::algebra::{FloatT, Matrix, MatrixVectorMultiply, ShapedMatrix, VectorMath};

impl<T> MatrixVectorMultiply for Matrix<T>
where
    T: FloatT,
{
    type T = T;
    // implements y = αA*x + βy
    fn gemv(&self, y: &mut [T], x: &[T], α: T, β: T) {
        let (m, n) = self.size();
        assert!(n == x.len() && m == y.len());

        // BLAS semantics: y is not read when β = 0
        if β == T::zero() {
            y.set(T::zero());
        } else if β != T::one() {
            y.scale(β);
        }

        if α == T::zero() {
            return;
        }

        // column sweep keeps the access pattern contiguous
        for (col, &xj) in self.data.chunks_exact(m.max(1)).zip(x) {
            let s = α * xj;
            if s == T::zero() {
                continue;
            }
            y.axpby(s, col, T::one());
        }
    }
}

#[test]
fn test_gemv() {
    let (m, n) = (2, 3);
    let a = vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
    let A = Matrix::new_from_slice((m, n), &a);

    let x = vec![1., 2., 3.];
    let mut y = vec![-1., -2.];
    A.gemv(&mut y, &x, 2.0, 3.0);
    assert!(y == [25.0, 58.0]);

    // NaNs in y are discarded when β = 0
    let mut y = vec![f64::NAN, 1.];
    A.gemv(&mut y, &x, 1.0, 0.0);
    assert!(y == [14.0, 32.0]);
}
