#![allow(non_snake_case)]
use super::*;

// A = tridiag(-1, 2, -1)
fn test_matrix_4x4() -> SymTridiagonal<f64> {
    SymTridiagonal::new(vec![2., 2., 2., 2.], vec![-1., -1., -1.]).unwrap()
}

#[test]
fn test_factors() {
    let A = test_matrix_4x4();
    let F = TridiagLDL::new(&A).unwrap();
    assert_eq!(F.dim(), 4);

    // pivots of tridiag(-1,2,-1) are (k+2)/(k+1)
    let D = [2., 3. / 2., 4. / 3., 5. / 4.];
    let L = [-1. / 2., -2. / 3., -3. / 4.];
    assert!(F.pivots().norm_inf_diff(&D) < 1e-15);
    assert!(F.multipliers().norm_inf_diff(&L) < 1e-15);
}

#[test]
fn test_lsolve_ltsolve() {
    let L = [2., -1.];

    let mut x = vec![1., 1., 1.];
    ldl::_lsolve(&L, &mut x);
    assert_eq!(x, [1., -1., 0.]);

    let mut x = vec![1., 1., 1.];
    ldl::_ltsolve(&L, &mut x);
    assert_eq!(x, [-3., 2., 1.]);

    // nothing to do for scalar systems
    let mut x = vec![3.];
    ldl::_lsolve(&[], &mut x);
    ldl::_ltsolve(&[], &mut x);
    assert_eq!(x, [3.]);
}

#[test]
fn test_solve() {
    let A = test_matrix_4x4();
    let xsol = [1., -2., 3., 4.];
    let mut b = vec![0.; 4];
    A.symv(&mut b, &xsol, 1., 0.);

    let F = TridiagLDL::new(&A).unwrap();
    let mut x = b.clone();
    F.solve(&mut x);
    assert!(x.norm_inf_diff(&xsol) < 1e-14);

    let x = solve(&A.diag, &A.offdiag, &b).unwrap();
    assert!(x.norm_inf_diff(&xsol) < 1e-14);
}

#[test]
fn test_solve_scalar() {
    let x = solve(&[4.], &[], &[2.]).unwrap();
    assert_eq!(x, [0.5]);
}

#[test]
fn test_dense_matches_compact() {
    let A = test_matrix_4x4();
    let b = [1., 0.5, -2., 7.];
    let x1 = solve(&A.diag, &A.offdiag, &b).unwrap();
    let x2 = solve_dense(&A.to_dense(), &b).unwrap();
    assert_eq!(x1, x2);
}

#[test]
fn test_singular_pivot() {
    assert_eq!(
        solve(&[0., 1.], &[1.], &[1., 1.]),
        Err(TridiagError::SingularPivot { index: 0 })
    );

    // [1 1; 1 1] has a zero second pivot
    assert_eq!(
        solve(&[1., 1.], &[1.], &[1., 1.]),
        Err(TridiagError::SingularPivot { index: 1 })
    );
}

#[test]
fn test_bad_dimensions() {
    assert!(matches!(
        solve::<f64>(&[], &[], &[]),
        Err(TridiagError::InvalidDimension(_))
    ));
    assert!(matches!(
        solve(&[1., 1.], &[1., 1.], &[1., 1.]),
        Err(TridiagError::InvalidDimension(_))
    ));
    assert_eq!(
        solve(&[1., 1.], &[0.], &[1.]),
        Err(TridiagError::InvalidDimension(DimensionError::Mismatch {
            what: "right hand side",
            expected: 2,
            found: 1
        }))
    );
    let R = Matrix::<f64>::zeros((2, 3));
    assert!(solve_dense(&R, &[1., 1.]).is_err());
}
