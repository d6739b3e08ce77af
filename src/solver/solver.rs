#![allow(non_snake_case)]

use super::info_print::_print_timers;
use super::kernels::{IterationKernel, Kernel};
use super::*;
use crate::algebra::*;
use crate::io::ConfigurablePrintTarget;
use crate::timers::*;
use std::io::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ---------------------------------
// Solver status type
// ---------------------------------

/// Status of solver at termination

#[repr(u32)]
#[derive(PartialEq, Eq, Clone, Debug, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolverStatus {
    /// Problem is not solved (solver hasn't run).
    #[default]
    Unsolved,
    /// Solver terminated with a solution.
    Solved,
    /// Iteration limit reached before the tolerance was met.
    MaxIterations,
    /// Time limit reached before the tolerance was met.
    MaxTime,
    /// An iterate became non-finite
    NumericalError,
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ---------------------------------
// top level solver container type
// ---------------------------------

/// Iterative solver for `Ax = b` with `A` dense, symmetric and positive definite
///
/// __Example usage__ :
///
/// ```
/// use symsolve::algebra::*;
/// use symsolve::solver::*;
///
/// let A = Matrix::<f64>::circulant_decay(11, 0.25).unwrap();
/// let b = vec![1.; 11];
///
/// let settings = IterativeSettingsBuilder::default()
///     .tol_steepest_descent(1e-12)
///     .build()
///     .unwrap();
///
/// let mut solver = IterativeSolver::new(&A, &b, settings).unwrap();
/// let sd = solver.solve(IterativeMethod::SteepestDescent, &[0.; 11]).unwrap().iterations;
/// let cg = solver.solve(IterativeMethod::ConjugateGradient, &[0.; 11]).unwrap().iterations;
/// assert!(cg <= sd);
/// ```

#[derive(Debug)]
pub struct IterativeSolver<T: FloatT = f64> {
    pub A: Matrix<T>,
    pub b: Vec<T>,
    pub settings: IterativeSettings<T>,
    pub info: IterativeInfo<T>,
    pub solution: IterativeSolution<T>,
    pub timers: Option<Timers>,
}

impl<T> IterativeSolver<T>
where
    T: FloatT,
{
    /// Create a solver for the problem `Ax = b`.  `A` must be square and
    /// `b` must have matching length.  Both are copied.
    pub fn new(
        A: &Matrix<T>,
        b: &[T],
        settings: IterativeSettings<T>,
    ) -> Result<Self, SolverError<T>> {
        A.check_format()?;
        if !A.is_square() {
            return Err(DimensionError::NotSquare {
                nrows: A.nrows(),
                ncols: A.ncols(),
            }
            .into());
        }
        DimensionError::check("right hand side", A.nrows(), b.len())?;
        settings.validate()?;

        let n = A.nrows();
        Ok(Self {
            A: A.clone(),
            b: b.to_vec(),
            settings,
            info: IterativeInfo::new(),
            solution: IterativeSolution::new(n),
            timers: Some(Timers::default()),
        })
    }

    /// Problem dimension
    pub fn dim(&self) -> usize {
        self.b.len()
    }

    /// Run `method` from the initial guess `x0`.
    ///
    /// On success the solution is returned by reference, and is also
    /// available in `self.solution` along with diagnostics in
    /// `self.info`.  If the solver stops for any other reason than
    /// convergence, a [`ConvergenceFailure`](SolverError::ConvergenceFailure)
    /// is returned that carries a copy of the final iterate.
    pub fn solve(
        &mut self,
        method: IterativeMethod,
        x0: &[T],
    ) -> Result<&IterativeSolution<T>, SolverError<T>> {
        let n = self.dim();
        DimensionError::check("initial guess", n, x0.len())?;
        self.settings.validate()?;

        let tol = method.tolerance(&self.settings);
        let mut x = x0.to_vec();
        let mut kernel = Kernel::new(method, n);

        //timers is stored as an option so that
        //we can swap it out here and avoid
        //borrow conflicts with other fields.
        let mut timers = self.timers.take().unwrap_or_default();

        self.info.reset(method, &mut timers);

        // print failures never abort a solve
        notimeit! {timers; {
            let _ = self.info.print_banner(&self.settings);
            let _ = self.info.print_configuration(&self.settings, n);
            let _ = self.info.print_status_header(&self.settings);
        }}

        timeit! {timers => "solve"; {

        timeit!{timers => "initialize"; {
            kernel.initialize(&self.A, &self.b, &x);
        }}

        timeit!{timers => "iterate"; {

        let mut iter: u32 = 0;
        loop {
            let report = kernel.step(&self.A, &self.b, &mut x);
            iter += 1;

            self.info.save_step(iter, &report);
            self.info.update(&timers);

            notimeit!{timers; {
                let _ = self.info.print_status(&self.settings);
            }}

            let converged = kernel.is_converged(&report, tol);
            if self.info.check_termination(converged, &x, &self.settings) {
                break;
            }
        }

        }} //end "iterate" timer

        }} //end "solve" timer

        let residual_norm = _residual_norm(&self.A, &self.b, &x);
        self.info.finalize(residual_norm, &mut timers);
        self.solution.finalize(&x, &self.info);

        notimeit! {timers; {
            let _ = self.info.print_footer(&self.settings);
            if self.settings.verbose {
                let _ = _print_timers(&mut self.info.stream, &timers);
            }
        }}

        // timers back into the solver
        self.timers.replace(timers);

        match self.solution.status {
            SolverStatus::Solved => Ok(&self.solution),
            status => Err(SolverError::ConvergenceFailure {
                method: kernel.method(),
                status,
                solution: Box::new(self.solution.clone()),
            }),
        }
    }
}

impl<T> ConfigurablePrintTarget for IterativeSolver<T>
where
    T: FloatT,
{
    fn print_to_stdout(&mut self) {
        self.info.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.info.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.info.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.info.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.info.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.info.get_print_buffer()
    }
}

// ‖b - Ax‖
fn _residual_norm<T: FloatT>(A: &Matrix<T>, b: &[T], x: &[T]) -> T {
    let mut r = b.to_vec();
    A.gemv(&mut r, x, -T::one(), T::one());
    r.norm()
}

// ---------------------------------
// one shot solver functions
// ---------------------------------

/// Solve `Ax = b` by Steepest Descent, starting from `x0`.
///
/// Convenience wrapper around [`IterativeSolver`] with no verbose output.
pub fn solve_steepest_descent<T>(
    A: &Matrix<T>,
    b: &[T],
    x0: &[T],
    settings: IterativeSettings<T>,
) -> Result<IterativeSolution<T>, SolverError<T>>
where
    T: FloatT,
{
    _solve_once(A, b, x0, settings, IterativeMethod::SteepestDescent)
}

/// Solve `Ax = b` by Conjugate Gradient, starting from `x0`.
///
/// Convenience wrapper around [`IterativeSolver`] with no verbose output.
pub fn solve_conjugate_gradient<T>(
    A: &Matrix<T>,
    b: &[T],
    x0: &[T],
    settings: IterativeSettings<T>,
) -> Result<IterativeSolution<T>, SolverError<T>>
where
    T: FloatT,
{
    _solve_once(A, b, x0, settings, IterativeMethod::ConjugateGradient)
}

fn _solve_once<T>(
    A: &Matrix<T>,
    b: &[T],
    x0: &[T],
    mut settings: IterativeSettings<T>,
    method: IterativeMethod,
) -> Result<IterativeSolution<T>, SolverError<T>>
where
    T: FloatT,
{
    settings.verbose = false;
    let mut solver = IterativeSolver::new(A, b, settings)?;
    solver.solve(method, x0)?;
    Ok(solver.solution)
}

#[test]
fn test_solver_status_display() {
    assert_eq!(SolverStatus::default(), SolverStatus::Unsolved);
    assert_eq!(format!("{}", SolverStatus::MaxIterations), "MaxIterations");
}

#[test]
fn test_solver_new_errors() {
    let settings = IterativeSettings::<f64>::default();

    let A = Matrix::<f64>::zeros((2, 3));
    assert!(matches!(
        IterativeSolver::new(&A, &[0.; 2], settings.clone()),
        Err(SolverError::InvalidDimension(DimensionError::NotSquare { .. }))
    ));

    let A = Matrix::<f64>::identity(3);
    assert!(matches!(
        IterativeSolver::new(&A, &[0.; 2], settings.clone()),
        Err(SolverError::InvalidDimension(DimensionError::Mismatch { .. }))
    ));

    let mut bad = settings.clone();
    bad.max_iter = 0;
    assert!(matches!(
        IterativeSolver::new(&A, &[0.; 3], bad),
        Err(SolverError::BadSettings(SettingsError::BadFieldValue("max_iter")))
    ));

    let mut solver = IterativeSolver::new(&A, &[1.; 3], settings).unwrap();
    assert!(matches!(
        solver.solve(IterativeMethod::ConjugateGradient, &[0.; 4]),
        Err(SolverError::InvalidDimension(_))
    ));
}

#[test]
fn test_solver_identity() {
    // a single exact line search solves Ix = b for either method
    let A = Matrix::<f64>::identity(4);
    let b = [1., 2., 3., 4.];
    let mut solver = IterativeSolver::new(&A, &b, IterativeSettings::default()).unwrap();

    let sol = solver
        .solve(IterativeMethod::SteepestDescent, &[0.; 4])
        .unwrap()
        .clone();
    assert_eq!(sol.status, SolverStatus::Solved);
    assert!(sol.x.norm_inf_diff(&b) < 1e-14);
    assert_eq!(sol.iterations, 2);
    assert!(sol.residual_norm < 1e-14);
    assert_eq!(solver.info.method, IterativeMethod::SteepestDescent);

    let sol = solver
        .solve(IterativeMethod::ConjugateGradient, &[0.; 4])
        .unwrap();
    assert!(sol.x.norm_inf_diff(&b) < 1e-14);
    assert_eq!(sol.iterations, 2);
    assert_eq!(solver.info.method, IterativeMethod::ConjugateGradient);
    assert!(solver.timers.is_some());
}

#[test]
fn test_solver_max_iterations() {
    let A = Matrix::from(&[[4., -1., 0.], [-1., 4., -1.], [0., -1., 4.]]);
    let b = [1., 0., 0.];
    let settings = IterativeSettingsBuilder::default()
        .max_iter(1)
        .build()
        .unwrap();

    let err = solve_steepest_descent(&A, &b, &[0.; 3], settings).unwrap_err();
    let SolverError::ConvergenceFailure {
        method, status, ..
    } = &err
    else {
        panic!("unexpected error {err}");
    };
    assert_eq!(*method, IterativeMethod::SteepestDescent);
    assert_eq!(*status, SolverStatus::MaxIterations);

    let best = err.into_best_iterate().unwrap();
    assert_eq!(best.iterations, 1);
    assert!(best.x.is_finite());
    assert!(best.x != [0.; 3]);
}
