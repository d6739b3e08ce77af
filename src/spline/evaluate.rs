use super::*;

/// Evaluate a natural cubic spline at the point `x`.
///
/// The knots are located at `i*h` for `i = 0..n`, with values `y` and
/// second derivatives `ypp`.  Returns `OutOfDomain` unless
/// `0 ≤ x ≤ (n-1)*h`, so no extrapolated value is ever produced.
///
/// The right hand endpoint `x = (n-1)*h` is evaluated on the last interval.
pub fn evaluate<T>(x: T, h: T, y: &[T], ypp: &[T]) -> Result<T, SplineError>
where
    T: FloatT,
{
    check_spacing(h)?;
    check_knots(y)?;
    let n = y.len();
    DimensionError::check("second derivatives", n, ypp.len())?;

    let upper = domain_upper(h, n);

    // written as a negation so that NaN is out of domain
    if !(x >= T::zero() && x <= upper) {
        return Err(SplineError::OutOfDomain {
            x: _to_f64(x),
            lower: 0.0,
            upper: _to_f64(upper),
        });
    }

    // interval of interest.  x/h is finite and non-negative here
    let i = (x / h).floor().to_usize().map_or(n - 2, |i| i.min(n - 2));

    Ok(_evaluate_interval(i, x, h, y, ypp))
}

// the cubic of interval [i*h, (i+1)*h], valid for any x
fn _evaluate_interval<T: FloatT>(i: usize, x: T, h: T, y: &[T], ypp: &[T]) -> T {
    let t0 = x - h * i.as_T(); // distance from the left knot
    let t1 = h - t0; // distance to the right knot
    let sixth: T = (1.0 / 6.0).as_T();
    let hinv = T::one() / h;

    hinv * (t1 * y[i] + t0 * y[i + 1]
        - sixth * t0 * t1 * ((t1 + h) * ypp[i] + (t0 + h) * ypp[i + 1]))
}

#[test]
fn test_evaluate_linear() {
    // with zero curvature the spline is the piecewise linear interpolant
    let y = [0., 2., 1.];
    let ypp = [0., 0., 0.];
    assert_eq!(evaluate(0.25, 0.5, &y, &ypp).unwrap(), 1.);
    assert_eq!(evaluate(0.75, 0.5, &y, &ypp).unwrap(), 1.5);
    assert_eq!(evaluate(1.0, 0.5, &y, &ypp).unwrap(), 1.);
}

#[test]
fn test_evaluate_errors() {
    let y = [0., 2., 1.];
    let ypp = [0., 0., 0.];

    assert_eq!(
        evaluate(1.5, 0.5, &y, &ypp),
        Err(SplineError::OutOfDomain {
            x: 1.5,
            lower: 0.,
            upper: 1.
        })
    );
    assert!(evaluate(-1e-12, 0.5, &y, &ypp).is_err());
    assert!(evaluate(f64::NAN, 0.5, &y, &ypp).is_err());

    assert_eq!(
        evaluate(0.5, 0., &y, &ypp),
        Err(SplineError::InvalidSpacing(0.))
    );
    assert!(evaluate(0.5, f64::INFINITY, &y, &ypp).is_err());
    assert!(matches!(
        evaluate(0.5, 0.5, &y, &ypp[0..2]),
        Err(SplineError::InvalidDimension(_))
    ));
    assert!(matches!(
        evaluate(0., 0.5, &y[0..1], &ypp[0..1]),
        Err(SplineError::InvalidDimension(_))
    ));
}

#[test]
fn test_evaluate_interval_joins() {
    let h = 0.4;
    let y: Vec<f64> = (0..8).map(|i| f64::cos(i as f64 * h) + 0.1 * i as f64).collect();
    let ypp = second_derivatives(h, &y).unwrap();

    for i in 1..y.len() - 1 {
        let xi = i as f64 * h;
        let left = _evaluate_interval(i - 1, xi, h, &y, &ypp);
        let right = _evaluate_interval(i, xi, h, &y, &ypp);
        assert!((left - y[i]).abs() < 1e-14);
        assert!((right - y[i]).abs() < 1e-14);

        // neighbouring cubics differ by c(x - xi)³ only, so at a
        // distance δ a jump in slope or curvature would show up
        // as O(δ) or O(δ²)
        let δ = 1e-3;
        for x in [xi - δ, xi + δ] {
            let left = _evaluate_interval(i - 1, x, h, &y, &ypp);
            let right = _evaluate_interval(i, x, h, &y, &ypp);
            assert!((left - right).abs() < 1e-8);
        }
    }
}
