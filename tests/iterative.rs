#![allow(non_snake_case)]

use rand::{rngs::StdRng, Rng, SeedableRng};
use symsolve::{algebra::*, solver::*};

const METHODS: [IterativeMethod; 2] = [
    IterativeMethod::SteepestDescent,
    IterativeMethod::ConjugateGradient,
];

fn tridiag_problem() -> (Matrix<f64>, Vec<f64>, Vec<f64>) {
    #[rustfmt::skip]
    let A = Matrix::from(&[
        [ 4., -1.,  0.,  0.,  0.],
        [-1.,  4., -1.,  0.,  0.],
        [ 0., -1.,  4., -1.,  0.],
        [ 0.,  0., -1.,  4., -1.],
        [ 0.,  0.,  0., -1.,  4.],
    ]);
    let xtrue = vec![1., 2., 3., 4., 5.];
    let mut b = vec![0.; 5];
    A.gemv(&mut b, &xtrue, 1., 0.);
    (A, b, xtrue)
}

#[test]
fn test_iterative_small() {
    let (A, b, xtrue) = tridiag_problem();
    let settings = IterativeSettings::default();

    // reference solution by dense Cholesky
    let mut chol = CholeskyEngine::new(5);
    chol.factor(&A).unwrap();
    let mut xchol = b.clone();
    chol.solve(&mut xchol);
    assert!(xchol.norm_inf_diff(&xtrue) < 1e-12);

    let sd = solve_steepest_descent(&A, &b, &[0.; 5], settings.clone()).unwrap();
    let cg = solve_conjugate_gradient(&A, &b, &[0.; 5], settings).unwrap();

    for sol in [&sd, &cg] {
        assert_eq!(sol.status, SolverStatus::Solved);
        assert!(sol.x.norm_inf_diff(&xtrue) < 1e-8);
        assert!(sol.x.norm_inf_diff(&xchol) < 1e-8);
        assert!(sol.residual_norm < 1e-9);
        assert!(sol.rms_error(&xtrue) < 1e-8);
    }
    assert!(cg.iterations < sd.iterations);
}

#[test]
fn test_iterative_random_circulant() {
    let n = 51;
    let A = Matrix::<f64>::circulant_decay(n, 0.25).unwrap();
    assert!(A.is_symmetric(0.));

    // strictly diagonally dominant for c < 1/3, hence SPD
    assert!(CholeskyEngine::new(n).factor(&A).is_ok());

    let mut rng = StdRng::seed_from_u64(42);
    let xtrue: Vec<f64> = (0..n).map(|_| rng.random::<f64>() * 2. - 1.).collect();
    let x0: Vec<f64> = (0..n).map(|_| rng.random::<f64>()).collect();

    let mut b = vec![0.; n];
    A.gemv(&mut b, &xtrue, 1., 0.);

    let mut solver = IterativeSolver::new(&A, &b, IterativeSettings::default()).unwrap();
    for method in METHODS {
        let sol = solver.solve(method, &x0).unwrap();
        assert!(sol.x.norm_inf_diff(&xtrue) < 1e-8);
        assert!(sol.iterations <= 1000);
        assert_eq!(solver.info.method, method);
        assert_eq!(solver.info.iterations, solver.solution.iterations);
    }
}

#[test]
fn test_iterative_ill_conditioned() {
    // slow decay gives a wide spectrum.  SD stalls where CG does not.
    let n = 101;
    let A = Matrix::<f64>::circulant_decay(n, 0.9).unwrap();

    // a constant b is an eigenvector of A, which SD solves in one step
    let mut rng = StdRng::seed_from_u64(7);
    let b: Vec<f64> = (0..n).map(|_| rng.random::<f64>() * 2. - 1.).collect();
    let x0 = vec![0.; n];
    let settings = IterativeSettings::default();

    let err = solve_steepest_descent(&A, &b, &x0, settings.clone()).unwrap_err();
    assert!(matches!(
        err,
        SolverError::ConvergenceFailure {
            method: IterativeMethod::SteepestDescent,
            status: SolverStatus::MaxIterations,
            ..
        }
    ));
    let best = err.best_iterate().unwrap();
    assert_eq!(best.iterations, 1000);
    assert!(best.x.is_finite());

    let cg = solve_conjugate_gradient(&A, &b, &x0, settings).unwrap();
    assert!(cg.iterations < 1000);

    let mut r = b.clone();
    A.gemv(&mut r, &cg.x, -1., 1.);
    assert!(r.norm() < 1e-8);
}

#[test]
fn test_iterative_iteration_limit() {
    let (A, b, _) = tridiag_problem();
    let settings = IterativeSettingsBuilder::default()
        .max_iter(2)
        .build()
        .unwrap();

    for method in METHODS {
        let mut solver = IterativeSolver::new(&A, &b, settings.clone()).unwrap();
        let err = solver.solve(method, &[0.; 5]).unwrap_err();
        let best = err.into_best_iterate().unwrap();
        assert_eq!(best.status, SolverStatus::MaxIterations);
        assert_eq!(best.iterations, 2);
        assert_eq!(best.x, solver.solution.x);

        // two steps still reduce the residual
        assert!(best.residual_norm < b.norm());
    }
}

#[test]
fn test_iterative_time_limit() {
    let (A, b, _) = tridiag_problem();
    let settings = IterativeSettingsBuilder::default()
        .time_limit(0.)
        .build()
        .unwrap();

    let err = solve_steepest_descent(&A, &b, &[0.; 5], settings).unwrap_err();
    assert!(matches!(
        err,
        SolverError::ConvergenceFailure {
            status: SolverStatus::MaxTime,
            ..
        }
    ));
}

#[test]
fn test_iterative_indefinite() {
    // zero curvature along the first search direction
    let A = Matrix::from(&[[1., 0.], [0., -1.]]);
    let b = [1., 1.];

    for method in METHODS {
        let mut solver = IterativeSolver::new(&A, &b, IterativeSettings::default()).unwrap();
        let err = solver.solve(method, &[0.; 2]).unwrap_err();
        let best = err.best_iterate().unwrap();
        assert_eq!(best.status, SolverStatus::NumericalError);
        assert_eq!(best.iterations, 1);
        assert!(!best.x.is_finite());
    }
}

#[test]
fn test_iterative_exact_guess() {
    let (A, b, xtrue) = tridiag_problem();
    for method in METHODS {
        let mut solver = IterativeSolver::new(&A, &b, IterativeSettings::default()).unwrap();
        let sol = solver.solve(method, &xtrue).unwrap();
        assert_eq!(sol.iterations, 1);
        assert_eq!(sol.x, xtrue);
    }
}

#[test]
fn test_iterative_bad_inputs() {
    let (A, b, _) = tridiag_problem();
    let settings = IterativeSettings::default();

    assert!(matches!(
        solve_conjugate_gradient(&A, &b[0..4], &[0.; 5], settings.clone()),
        Err(SolverError::InvalidDimension(_))
    ));
    assert!(matches!(
        solve_conjugate_gradient(&A, &b, &[0.; 4], settings.clone()),
        Err(SolverError::InvalidDimension(_))
    ));
    assert!(matches!(
        solve_steepest_descent(&Matrix::zeros((5, 4)), &b, &[0.; 5], settings.clone()),
        Err(SolverError::InvalidDimension(DimensionError::NotSquare { .. }))
    ));

    let mut bad = settings;
    bad.tol_conjugate_gradient = -1.;
    assert!(matches!(
        solve_conjugate_gradient(&A, &b, &[0.; 5], bad),
        Err(SolverError::BadSettings(SettingsError::BadFieldValue(
            "tol_conjugate_gradient"
        )))
    ));

    // the builder rejects bad values at construction
    assert!(IterativeSettingsBuilder::<f64>::default()
        .max_iter(0)
        .build()
        .is_err());
}
