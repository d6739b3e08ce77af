use super::kernels::StepReport;
use super::*;
use crate::algebra::*;
use crate::io::PrintTarget;
use crate::timers::*;

/// Per-solve diagnostics for the [`IterativeSolver`]

#[derive(Default, Debug)]
pub struct IterativeInfo<T> {
    /// method used in the most recent solve
    pub method: IterativeMethod,
    /// number of iterations taken
    pub iterations: u32,
    /// most recent step length
    pub alpha: T,
    /// most recent conjugation coefficient (zero for steepest descent)
    pub beta: T,
    /// gradient norm (SD) or search direction norm (CG)
    pub search_norm: T,
    /// length of the most recent step `‖x_new - x_old‖`
    pub step_norm: T,
    /// final residual norm `‖b - Ax‖`
    pub residual_norm: T,
    /// solve time in seconds
    pub solve_time: f64,
    /// solver status
    pub status: SolverStatus,

    // target for verbose printing
    pub(crate) stream: PrintTarget,
}

impl<T> IterativeInfo<T>
where
    T: FloatT,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reset(&mut self, method: IterativeMethod, timers: &mut Timers) {
        self.method = method;
        self.status = SolverStatus::Unsolved;
        self.iterations = 0;
        self.alpha = T::nan();
        self.beta = T::nan();
        self.search_norm = T::nan();
        self.step_norm = T::nan();
        self.residual_norm = T::nan();
        self.solve_time = 0f64;

        timers.reset_timer("solve");
    }

    // record scalar values from the most recent iteration
    pub(crate) fn save_step(&mut self, iter: u32, report: &StepReport<T>) {
        self.iterations = iter;
        self.alpha = report.alpha;
        self.beta = report.beta;
        self.search_norm = report.search_norm;
        self.step_norm = report.step_norm;
    }

    pub(crate) fn update(&mut self, timers: &Timers) {
        // solve time so far
        self.solve_time = timers.total_time().as_secs_f64();
    }

    /// Sets the status and returns true if the solver should stop.
    /// Checks are made in the order convergence, non-finite iterate,
    /// iteration limit and then time limit.
    pub(crate) fn check_termination(
        &mut self,
        converged: bool,
        x: &[T],
        settings: &IterativeSettings<T>,
    ) -> bool {
        if converged {
            self.status = SolverStatus::Solved;
        } else if !x.is_finite() {
            self.status = SolverStatus::NumericalError;
        } else if self.iterations >= settings.max_iter {
            self.status = SolverStatus::MaxIterations;
        } else if self.solve_time > settings.time_limit {
            self.status = SolverStatus::MaxTime;
        }

        self.status != SolverStatus::Unsolved
    }

    pub(crate) fn finalize(&mut self, residual_norm: T, timers: &mut Timers) {
        self.residual_norm = residual_norm;
        self.solve_time = timers.total_time().as_secs_f64();
    }
}

#[test]
fn test_check_termination_order() {
    let mut timers = Timers::default();
    let mut info = IterativeInfo::<f64>::new();
    info.reset(IterativeMethod::SteepestDescent, &mut timers);

    let settings = IterativeSettingsBuilder::<f64>::default()
        .max_iter(3)
        .time_limit(0.0)
        .build()
        .unwrap();

    // convergence takes priority over everything else
    info.iterations = 3;
    info.solve_time = 1.0;
    assert!(info.check_termination(true, &[f64::NAN], &settings));
    assert_eq!(info.status, SolverStatus::Solved);

    info.status = SolverStatus::Unsolved;
    assert!(info.check_termination(false, &[f64::NAN], &settings));
    assert_eq!(info.status, SolverStatus::NumericalError);

    info.status = SolverStatus::Unsolved;
    assert!(info.check_termination(false, &[1.0], &settings));
    assert_eq!(info.status, SolverStatus::MaxIterations);

    info.status = SolverStatus::Unsolved;
    info.iterations = 1;
    assert!(info.check_termination(false, &[1.0], &settings));
    assert_eq!(info.status, SolverStatus::MaxTime);

    info.status = SolverStatus::Unsolved;
    info.solve_time = 0.0;
    assert!(!info.check_termination(false, &[1.0], &settings));
    assert_eq!(info.status, SolverStatus::Unsolved);
}
