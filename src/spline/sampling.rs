use super::*;
use std::io::Write;

/// A single spline sample, compared against a reference function

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineSample<T = f64> {
    /// sample location
    pub x: T,
    /// spline value at `x`
    pub value: T,
    /// `value - reference(x)`
    pub error: T,
}

impl<T> NaturalCubicSpline<T>
where
    T: FloatT,
{
    /// Sample the spline at `npoints + 1` evenly spaced points covering
    /// the whole domain, endpoints included, and compare each value with
    /// `reference`.
    pub fn sample<F>(&self, npoints: usize, reference: F) -> Result<Vec<SplineSample<T>>, SplineError>
    where
        F: Fn(T) -> T,
    {
        DimensionError::check_min("sample points", 1, npoints)?;

        let (_, upper) = self.domain();
        let npoints_t: T = npoints.as_T();

        (0..=npoints)
            .map(|j| {
                let jt: T = j.as_T();
                let x = upper * (jt / npoints_t);
                let value = self.evaluate(x)?;
                let error = value - reference(x);
                Ok(SplineSample { x, value, error })
            })
            .collect()
    }
}

/// Write samples as tab separated `x  value  error` rows, one per line
pub fn write_samples<T, W>(out: &mut W, samples: &[SplineSample<T>]) -> std::io::Result<()>
where
    T: FloatT,
    W: Write,
{
    for s in samples {
        writeln!(out, "{}\t{}\t{}", s.x, s.value, s.error)?;
    }
    Ok(())
}

#[test]
fn test_sample_and_write() {
    let s = NaturalCubicSpline::<f64>::new(1.0, &[0., 1., 2.]).unwrap();
    let samples = s.sample(4, |x| x).unwrap();

    assert_eq!(samples.len(), 5);
    assert_eq!(samples[0].x, 0.);
    assert_eq!(samples[4].x, 2.);
    assert!(samples.iter().all(|s| s.error.abs() < 1e-15));

    let mut buf = Vec::new();
    write_samples(&mut buf, &samples[0..2]).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text, "0\t0\t0\n0.5\t0.5\t0\n");

    assert!(s.sample(0, |x| x).is_err());
}
