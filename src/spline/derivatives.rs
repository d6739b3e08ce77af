use super::*;
use crate::tridiag;

/// Method used to compute the knot second derivatives of a natural spline

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecondDerivativeMethod {
    /// $O(n)$ direct $LDL^T$ solve of the reduced tridiagonal system
    #[default]
    Tridiagonal,
    /// $O(n^2)$ expansion in the eigenvectors of the reduced system
    Spectral,
}

/// Second derivatives of the natural cubic spline through the knot
/// values `y` with uniform spacing `h`.
///
/// The interior values `ypp[1..n-1]` solve the reduced system
/// `tridiag(1, 4, 1) z = b` with `b_i = (6/h²)(y[i+2] - 2y[i+1] + y[i])`.
/// The end values are zero.  Two knots give a straight line, with
/// second derivatives `[0, 0]`.
pub fn second_derivatives<T>(h: T, y: &[T]) -> Result<Vec<T>, SplineError>
where
    T: FloatT,
{
    check_spacing(h)?;
    check_knots(y)?;

    let n = y.len();
    let mut ypp = vec![T::zero(); n];
    if n == 2 {
        return Ok(ypp);
    }

    let m = n - 2;
    let diag: Vec<T> = vec![(4.0).as_T(); m];
    let offdiag = vec![T::one(); m - 1];
    let b = _reduced_rhs(h, y);

    let z = tridiag::solve(&diag, &offdiag, &b)?;
    ypp[1..n - 1].copy_from(&z);

    Ok(ypp)
}

/// Second derivatives of a natural cubic spline, computed by the spectral
/// method.
///
/// The reduced matrix `tridiag(1, 4, 1)` of dimension `n-2` has orthonormal
/// eigenvectors `sqrt(2/(n-1)) sin(π i k/(n-1))` and eigenvalues
/// `4 + 2cos(π k/(n-1))`.  The right hand side is projected onto the
/// eigenvectors, divided by the eigenvalues and expanded again.  The
/// result agrees with [`second_derivatives`] up to rounding.
pub fn second_derivatives_spectral<T>(h: T, y: &[T]) -> Result<Vec<T>, SplineError>
where
    T: FloatT,
{
    check_spacing(h)?;
    check_knots(y)?;

    let n = y.len();
    let mut ypp = vec![T::zero(); n];
    if n == 2 {
        return Ok(ypp);
    }

    let m = n - 2;
    let b = _reduced_rhs(h, y);

    let two: T = (2.0).as_T();
    let four: T = (4.0).as_T();
    let q = T::PI() / (n - 1).as_T();
    let fac = T::sqrt(two / (n - 1).as_T());

    // sin(q*i*k) for the 1-based indices i,k = 1..=m
    let basis = |i: usize, k: usize| -> T { T::sin(q * (i * k).as_T()) };

    // projections onto the eigenvectors, scaled by the inverse eigenvalues
    let dotp: Vec<T> = (1..=m)
        .map(|k| {
            let s = (1..=m).fold(T::zero(), |acc, i| acc + b[i - 1] * basis(i, k));
            s * fac / (four + two * T::cos(q * k.as_T()))
        })
        .collect();

    for i in 1..=m {
        let s = (1..=m).fold(T::zero(), |acc, k| acc + dotp[k - 1] * basis(i, k));
        ypp[i] = s * fac;
    }

    Ok(ypp)
}

// right hand side of the reduced (n-2) system
fn _reduced_rhs<T: FloatT>(h: T, y: &[T]) -> Vec<T> {
    let six: T = (6.0).as_T();
    let two: T = (2.0).as_T();
    let fac = six / (h * h);
    y.windows(3)
        .map(|w| fac * (w[2] - two * w[1] + w[0]))
        .collect()
}

pub(crate) fn _second_derivatives_by<T>(
    h: T,
    y: &[T],
    method: SecondDerivativeMethod,
) -> Result<Vec<T>, SplineError>
where
    T: FloatT,
{
    match method {
        SecondDerivativeMethod::Tridiagonal => second_derivatives(h, y),
        SecondDerivativeMethod::Spectral => second_derivatives_spectral(h, y),
    }
}

#[test]
fn test_second_derivatives_quadratic_free() {
    // linear data has no curvature
    let y = [1., 2., 3., 4., 5.];
    let ypp = second_derivatives(0.5, &y).unwrap();
    assert!(ypp.norm_inf() < 1e-14);

    // two knots give a straight line
    assert_eq!(second_derivatives(1., &[1., 7.]).unwrap(), [0., 0.]);
    assert_eq!(second_derivatives_spectral(1., &[1., 7.]).unwrap(), [0., 0.]);
}

#[test]
fn test_second_derivatives_three_knots() {
    // single unknown: 4 z = 6 (y2 - 2 y1 + y0) / h^2
    let ypp = second_derivatives(1., &[0., 1., 0.]).unwrap();
    assert_eq!(ypp, [0., -3., 0.]);
    let ypp = second_derivatives_spectral(1., &[0., 1., 0.]).unwrap();
    assert!(ypp.norm_inf_diff(&[0., -3., 0.]) < 1e-14);
}

#[test]
fn test_second_derivatives_methods_agree() {
    let n = 17;
    let h = 0.3;
    let y: Vec<f64> = (0..n).map(|i| f64::exp(-(i as f64) * h) * (i as f64)).collect();
    let ypp1 = second_derivatives(h, &y).unwrap();
    let ypp2 = second_derivatives_spectral(h, &y).unwrap();
    assert_eq!(ypp1[0], 0.);
    assert_eq!(ypp1[n - 1], 0.);
    assert_eq!(ypp2[0], 0.);
    assert_eq!(ypp2[n - 1], 0.);
    assert!(ypp1.norm_inf_diff(&ypp2) < 1e-11);
}

#[test]
fn test_second_derivatives_bad_args() {
    assert!(matches!(
        second_derivatives(1., &[1.]),
        Err(SplineError::InvalidDimension(_))
    ));
    assert!(matches!(
        second_derivatives_spectral(-1., &[1., 2., 3.]),
        Err(SplineError::InvalidSpacing(_))
    ));
}
