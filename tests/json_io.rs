#![allow(non_snake_case)]

#[cfg(feature = "serde")]
#[test]
fn test_json_io() {
    use std::io::{Seek, SeekFrom};
    use symsolve::{algebra::*, solver::*};

    let A = Matrix::<f64>::circulant_decay(9, 0.5).unwrap();
    let b = vec![1.; 9];
    let x0 = vec![0.; 9];

    let settings = IterativeSettingsBuilder::default()
        .tol_conjugate_gradient(1e-12)
        .build()
        .unwrap();

    let mut solver = IterativeSolver::<f64>::new(&A, &b, settings).unwrap();
    solver
        .solve(IterativeMethod::ConjugateGradient, &x0)
        .unwrap();

    // write the problem to a file
    let mut file = tempfile::tempfile().unwrap();
    solver.save_to_file(&mut file).unwrap();

    // read the problem from the file
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut solver2 = IterativeSolver::<f64>::load_from_file(&mut file, None).unwrap();
    assert_eq!(solver2.settings, solver.settings);
    solver2
        .solve(IterativeMethod::ConjugateGradient, &x0)
        .unwrap();
    assert_eq!(solver.solution.x, solver2.solution.x);

    // read the problem from the file with custom settings
    file.seek(SeekFrom::Start(0)).unwrap();
    let settings = IterativeSettingsBuilder::default()
        .max_iter(1)
        .build()
        .unwrap();
    let mut solver3 = IterativeSolver::<f64>::load_from_file(&mut file, Some(settings)).unwrap();
    let err = solver3
        .solve(IterativeMethod::SteepestDescent, &x0)
        .unwrap_err();
    assert_eq!(
        err.best_iterate().map(|s| s.status),
        Some(SolverStatus::MaxIterations)
    );
}
