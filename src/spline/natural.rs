use super::derivatives::_second_derivatives_by;
use super::*;

/// Natural cubic spline interpolant on uniformly spaced knots `x_i = i*h`
///
/// __Example usage__ :
///
/// ```
/// use symsolve::spline::NaturalCubicSpline;
///
/// let y = [0., 1., 0., -1., 0.];
/// let spline = NaturalCubicSpline::<f64>::new(0.5, &y).unwrap();
/// assert_eq!(spline.domain(), (0., 2.));
/// assert!((spline.evaluate(1.0).unwrap() - 0.).abs() < 1e-15);
/// ```

#[derive(Debug, Clone, PartialEq)]
pub struct NaturalCubicSpline<T = f64> {
    h: T,
    y: Vec<T>,
    ypp: Vec<T>,
}

impl<T> NaturalCubicSpline<T>
where
    T: FloatT,
{
    /// Spline through the knot values `y` with spacing `h`.  Second
    /// derivatives are computed with the tridiagonal solver.
    pub fn new(h: T, y: &[T]) -> Result<Self, SplineError> {
        Self::with_method(h, y, SecondDerivativeMethod::default())
    }

    /// Spline through the knot values `y` with spacing `h`, using the
    /// given method for the second derivatives.
    pub fn with_method(h: T, y: &[T], method: SecondDerivativeMethod) -> Result<Self, SplineError> {
        let ypp = _second_derivatives_by(h, y, method)?;
        Ok(Self {
            h,
            y: y.to_vec(),
            ypp,
        })
    }

    /// Spline from precomputed second derivatives.  `ypp` should be zero
    /// at both ends for a natural spline, but this is not enforced.
    pub fn from_parts(h: T, y: Vec<T>, ypp: Vec<T>) -> Result<Self, SplineError> {
        check_spacing(h)?;
        check_knots(&y)?;
        DimensionError::check("second derivatives", y.len(), ypp.len())?;
        Ok(Self { h, y, ypp })
    }

    /// Evaluate the spline at `x`.  Fails with `OutOfDomain` outside of
    /// [`domain`](Self::domain).
    pub fn evaluate(&self, x: T) -> Result<T, SplineError> {
        evaluate(x, self.h, &self.y, &self.ypp)
    }

    /// The closed interval `[0, (n-1)*h]` covered by the knots
    pub fn domain(&self) -> (T, T) {
        (T::zero(), domain_upper(self.h, self.y.len()))
    }

    /// Knot spacing
    pub fn spacing(&self) -> T {
        self.h
    }

    /// Knot values
    pub fn knots(&self) -> &[T] {
        &self.y
    }

    /// Second derivatives at the knots
    pub fn second_derivatives(&self) -> &[T] {
        &self.ypp
    }
}

#[test]
fn test_spline_reproduces_knots() {
    let h = 0.25;
    let y = [1., -2., 0.5, 3., 3., -1.];
    for method in [
        SecondDerivativeMethod::Tridiagonal,
        SecondDerivativeMethod::Spectral,
    ] {
        let s = NaturalCubicSpline::with_method(h, &y, method).unwrap();
        for (i, &yi) in y.iter().enumerate() {
            let v = s.evaluate(h * i as f64).unwrap();
            assert!((v - yi).abs() < 1e-13);
        }
    }
}

#[test]
fn test_spline_from_parts() {
    let s = NaturalCubicSpline::new(1.0, &[0., 1., 0.]).unwrap();
    let t = NaturalCubicSpline::from_parts(1.0, s.knots().to_vec(), s.second_derivatives().to_vec())
        .unwrap();
    assert_eq!(s, t);
    assert_eq!(t.spacing(), 1.0);

    assert!(NaturalCubicSpline::from_parts(1.0, vec![0., 1.], vec![0.]).is_err());
    assert!(NaturalCubicSpline::from_parts(f64::NAN, vec![0., 1.], vec![0., 0.]).is_err());
}
