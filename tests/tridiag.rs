#![allow(non_snake_case)]

use symsolve::{algebra::*, tridiag, tridiag::*};

// the reduced system used for natural cubic splines
fn spline_system(n: usize) -> (Vec<f64>, Vec<f64>) {
    (vec![4.; n], vec![1.; n - 1])
}

#[test]
fn test_tridiag_residual() {
    let n = 200;
    let (diag, offdiag) = spline_system(n);
    let b: Vec<f64> = (0..n).map(|i| f64::sin(i as f64 * 0.1)).collect();

    let x = tridiag::solve(&diag, &offdiag, &b).unwrap();

    let S = SymTridiagonal::new(diag, offdiag).unwrap();
    let mut r = b.clone();
    S.symv(&mut r, &x, -1., 1.);
    assert!(r.norm_inf() < 10. * (n as f64) * f64::EPSILON);
}

#[test]
fn test_tridiag_dense_matches_compact() {
    let n = 9;
    let (diag, offdiag) = spline_system(n);
    let b: Vec<f64> = (1..=n).map(|i| i as f64).collect();

    let S = SymTridiagonal::new(diag.clone(), offdiag.clone()).unwrap();
    let x1 = tridiag::solve(&diag, &offdiag, &b).unwrap();
    let x2 = tridiag::solve_dense(&S.to_dense(), &b).unwrap();
    assert_eq!(x1, x2);
}

#[test]
fn test_tridiag_indefinite() {
    // nonzero leading minors are enough without pivoting
    let diag = [1., -2., 3.];
    let offdiag = [1., 1.];
    let xtrue = [1., 2., 3.];

    let S = SymTridiagonal::new(diag.to_vec(), offdiag.to_vec()).unwrap();
    let mut b = vec![0.; 3];
    S.symv(&mut b, &xtrue, 1., 0.);

    let x = tridiag::solve(&diag, &offdiag, &b).unwrap();
    assert!(x.norm_inf_diff(&xtrue) < 1e-14);
}

#[test]
fn test_tridiag_singular() {
    // second leading minor is zero
    let err = tridiag::solve(&[1., 1., 2.], &[1., 1.], &[1., 1., 1.]).unwrap_err();
    assert_eq!(err, TridiagError::SingularPivot { index: 1 });

    let err = tridiag::solve(&[0.], &[], &[1.]).unwrap_err();
    assert_eq!(err, TridiagError::SingularPivot { index: 0 });
}

#[test]
fn test_tridiag_bad_dimensions() {
    assert!(matches!(
        tridiag::solve::<f64>(&[], &[], &[]),
        Err(TridiagError::InvalidDimension(DimensionError::TooSmall { .. }))
    ));
    assert!(matches!(
        tridiag::solve(&[4., 4.], &[1., 1.], &[1., 1.]),
        Err(TridiagError::InvalidDimension(DimensionError::Mismatch { .. }))
    ));
    assert!(matches!(
        tridiag::solve(&[4., 4.], &[1.], &[1., 1., 1.]),
        Err(TridiagError::InvalidDimension(DimensionError::Mismatch { .. }))
    ));
    assert!(matches!(
        tridiag::solve_dense(&Matrix::<f64>::zeros((2, 3)), &[1., 1.]),
        Err(TridiagError::InvalidDimension(DimensionError::NotSquare { .. }))
    ));
}

#[test]
fn test_tridiag_factors_reused() {
    let (diag, offdiag) = spline_system(5);
    let S = SymTridiagonal::new(diag, offdiag).unwrap();
    let ldl = TridiagLDL::new(&S).unwrap();
    assert_eq!(ldl.dim(), 5);
    assert!(ldl.pivots().iter().all(|&d| d > 0.));

    for k in 0..5 {
        let mut e = vec![0.; 5];
        e[k] = 1.;
        let mut x = e.clone();
        ldl.solve(&mut x);

        let mut r = e.clone();
        S.symv(&mut r, &x, -1., 1.);
        assert!(r.norm_inf() < 1e-14);
    }
}
