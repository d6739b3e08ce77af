use std::f64::consts::PI;
use symsolve::algebra::VectorMath;
use symsolve::spline::*;

fn sine_spline(n: usize, method: SecondDerivativeMethod) -> NaturalCubicSpline<f64> {
    let h = 2.0 * PI / (n - 1) as f64;
    let y: Vec<f64> = (0..n).map(|i| f64::sin(i as f64 * h)).collect();
    NaturalCubicSpline::with_method(h, &y, method).unwrap()
}

#[test]
fn test_spline_interpolates_knots() {
    let s = sine_spline(10, SecondDerivativeMethod::Tridiagonal);
    let h = s.spacing();
    for (i, &yi) in s.knots().iter().enumerate() {
        let v = s.evaluate(i as f64 * h).unwrap();
        assert!((v - yi).abs() < 1e-14);
    }
}

#[test]
fn test_spline_natural_ends() {
    let s = sine_spline(12, SecondDerivativeMethod::Tridiagonal);
    let ypp = s.second_derivatives();
    assert_eq!(ypp[0], 0.);
    assert_eq!(ypp[ypp.len() - 1], 0.);
}

#[test]
fn test_spline_continuity() {
    let s = sine_spline(10, SecondDerivativeMethod::Tridiagonal);
    let h = s.spacing();
    let eps = 1e-12;
    for i in 1..9 {
        let x = i as f64 * h;
        let left = s.evaluate(x - eps).unwrap();
        let right = s.evaluate(x + eps).unwrap();
        assert!((left - right).abs() < 1e-11);

        // one-sided slopes agree
        let d = 1e-4;
        let dleft = (s.evaluate(x).unwrap() - s.evaluate(x - d).unwrap()) / d;
        let dright = (s.evaluate(x + d).unwrap() - s.evaluate(x).unwrap()) / d;
        assert!((dleft - dright).abs() < 1e-3);
    }
}

#[test]
fn test_spline_sine_accuracy() {
    let s = sine_spline(10, SecondDerivativeMethod::Tridiagonal);
    let v = s.evaluate(3.14).unwrap();
    assert!((v - f64::sin(3.14)).abs() < 1e-4);

    // accuracy over the whole domain
    let samples = s.sample(100, f64::sin).unwrap();
    assert!(samples.iter().all(|s| s.error.abs() < 1e-2));
}

#[test]
fn test_spline_domain() {
    let s = sine_spline(10, SecondDerivativeMethod::Tridiagonal);
    let (lower, upper) = s.domain();
    assert_eq!(lower, 0.);
    assert!((upper - 2.0 * PI).abs() < 1e-14);

    // both endpoints are inside the domain
    assert!(s.evaluate(lower).unwrap().abs() < 1e-14);
    assert!(s.evaluate(upper).unwrap().abs() < 1e-14);

    for x in [-1e-3, upper + 1e-3, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            s.evaluate(x),
            Err(SplineError::OutOfDomain { .. })
        ));
    }
}

#[test]
fn test_spline_methods_agree() {
    let s1 = sine_spline(25, SecondDerivativeMethod::Tridiagonal);
    let s2 = sine_spline(25, SecondDerivativeMethod::Spectral);
    let d = s1
        .second_derivatives()
        .norm_inf_diff(s2.second_derivatives());
    assert!(d < 1e-10);

    let x = 1.234;
    let d = (s1.evaluate(x).unwrap() - s2.evaluate(x).unwrap()).abs();
    assert!(d < 1e-10);
}

#[test]
fn test_spline_bad_data() {
    assert!(matches!(
        NaturalCubicSpline::new(0.5, &[1.0]),
        Err(SplineError::InvalidDimension(_))
    ));
    assert!(matches!(
        NaturalCubicSpline::new(0.0, &[1.0, 2.0]),
        Err(SplineError::InvalidSpacing(_))
    ));
    assert!(matches!(
        NaturalCubicSpline::new(f64::NAN, &[1.0, 2.0]),
        Err(SplineError::InvalidSpacing(_))
    ));
    assert!(matches!(
        evaluate(0.5, 1.0, &[1.0, 2.0], &[0.0]),
        Err(SplineError::InvalidDimension(_))
    ));
}

#[test]
fn test_spline_sample_file() {
    use std::io::{Read, Seek, SeekFrom};

    let s = sine_spline(10, SecondDerivativeMethod::Tridiagonal);
    let samples = s.sample(20, f64::sin).unwrap();
    assert_eq!(samples.len(), 21);

    let mut file = tempfile::tempfile().unwrap();
    write_samples(&mut file, &samples).unwrap();

    file.seek(SeekFrom::Start(0)).unwrap();
    let mut text = String::new();
    file.read_to_string(&mut text).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 21);
    for (line, sample) in lines.iter().zip(&samples) {
        let fields: Vec<f64> = line.split('\t').map(|f| f.parse().unwrap()).collect();
        assert_eq!(fields, [sample.x, sample.value, sample.error]);
    }
}
