#![allow(non_snake_case)]

use symsolve::{algebra::*, io::ConfigurablePrintTarget, solver::*};

fn test_print_solver() -> IterativeSolver<f64> {
    let A = Matrix::from(&[[2., -1.], [-1., 2.]]);
    let b = [1., 1.];
    let settings = IterativeSettingsBuilder::default()
        .verbose(true)
        .build()
        .unwrap();
    IterativeSolver::new(&A, &b, settings).unwrap()
}

#[test]
fn test_print_to_stdout() {
    let mut solver = test_print_solver();
    solver.print_to_stdout();
    solver
        .solve(IterativeMethod::ConjugateGradient, &[0.; 2])
        .unwrap();
}

#[test]
fn test_print_to_buffer() {
    let mut solver = test_print_solver();
    solver.print_to_buffer();
    solver
        .solve(IterativeMethod::SteepestDescent, &[0.; 2])
        .unwrap();
    let result = solver.get_print_buffer().unwrap();
    assert!(result.contains("symsolve"));
    assert!(result.contains("steepest descent"));
    assert!(result.contains("Terminated with status = Solved"));
    assert!(result.contains("timing:"));
}

#[test]
fn test_print_to_file() {
    use std::io::{Read, Seek};

    let mut solver = test_print_solver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    solver.print_to_file(file.into_file());
    solver
        .solve(IterativeMethod::ConjugateGradient, &[0.; 2])
        .unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("symsolve"));
    assert!(result.contains("conjugate gradient"));
}

#[test]
fn test_print_to_stream() {
    use std::io::{Read, Seek};

    let mut solver = test_print_solver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    let stream = Box::new(file.into_file());

    solver.print_to_stream(stream);
    solver
        .solve(IterativeMethod::ConjugateGradient, &[0.; 2])
        .unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("symsolve"));
}

#[test]
fn test_print_to_sink() {
    let mut solver = test_print_solver();
    solver.print_to_sink();
    solver
        .solve(IterativeMethod::ConjugateGradient, &[0.; 2])
        .unwrap();
    // sink has no buffer to read back
    assert!(solver.get_print_buffer().is_err());
}

#[test]
fn test_quiet_buffer() {
    let mut solver = test_print_solver();
    solver.settings.verbose = false;
    solver.print_to_buffer();
    solver
        .solve(IterativeMethod::ConjugateGradient, &[0.; 2])
        .unwrap();
    assert_eq!(solver.get_print_buffer().unwrap(), "");
}
