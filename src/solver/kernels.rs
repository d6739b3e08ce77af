#![allow(non_snake_case)]

use super::IterativeSettings;
use crate::algebra::*;
use enum_dispatch::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Iterative method used by the [`IterativeSolver`](super::IterativeSolver)

#[derive(PartialEq, Eq, Clone, Debug, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IterativeMethod {
    /// Steepest Descent.  Stops when the gradient norm falls below
    /// `tol_steepest_descent`.
    #[default]
    SteepestDescent,
    /// Conjugate Gradient.  Stops when both the search direction norm and
    /// the step length fall below `tol_conjugate_gradient`.
    ConjugateGradient,
}

impl IterativeMethod {
    /// Stopping tolerance applied to this method
    pub fn tolerance<T: FloatT>(&self, settings: &IterativeSettings<T>) -> T {
        match self {
            IterativeMethod::SteepestDescent => settings.tol_steepest_descent,
            IterativeMethod::ConjugateGradient => settings.tol_conjugate_gradient,
        }
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            IterativeMethod::SteepestDescent => "steepest descent",
            IterativeMethod::ConjugateGradient => "conjugate gradient",
        }
    }
}

impl std::fmt::Display for IterativeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// scalar values recorded by a single iteration
#[derive(Debug, Clone, Copy)]
pub(crate) struct StepReport<T> {
    pub alpha: T,
    pub beta: T,
    // norm of the gradient (SD) or of the updated search direction (CG)
    pub search_norm: T,
    // ‖x_new - x_old‖
    pub step_norm: T,
}

// ---------------------------------------------------------
// per-method iteration kernels
// ---------------------------------------------------------

#[enum_dispatch]
pub(crate) trait IterationKernel<T>
where
    T: FloatT,
{
    fn method(&self) -> IterativeMethod;

    // prepare internal state for the initial iterate x
    fn initialize(&mut self, A: &Matrix<T>, b: &[T], x: &[T]);

    // take one step, updating x in place
    fn step(&mut self, A: &Matrix<T>, b: &[T], x: &mut [T]) -> StepReport<T>;

    fn is_converged(&self, report: &StepReport<T>, tol: T) -> bool;
}

#[enum_dispatch(IterationKernel<T>)]
pub(crate) enum Kernel<T>
where
    T: FloatT,
{
    SteepestDescent(SteepestDescentKernel<T>),
    ConjugateGradient(ConjugateGradientKernel<T>),
}

impl<T> Kernel<T>
where
    T: FloatT,
{
    pub fn new(method: IterativeMethod, n: usize) -> Self {
        match method {
            IterativeMethod::SteepestDescent => SteepestDescentKernel::new(n).into(),
            IterativeMethod::ConjugateGradient => ConjugateGradientKernel::new(n).into(),
        }
    }
}

// num/den, except that a zero numerator gives zero.  An exact
// iterate then takes a zero step instead of producing 0/0.
fn _safe_ratio<T: FloatT>(num: T, den: T) -> T {
    if num == T::zero() {
        T::zero()
    } else {
        num / den
    }
}

// ---------------------------------------------------------
// Steepest Descent
// ---------------------------------------------------------

pub(crate) struct SteepestDescentKernel<T> {
    // gradient g = Ax - b
    g: Vec<T>,
    // work vector for Ag
    Ag: Vec<T>,
}

impl<T> SteepestDescentKernel<T>
where
    T: FloatT,
{
    pub fn new(n: usize) -> Self {
        Self {
            g: vec![T::zero(); n],
            Ag: vec![T::zero(); n],
        }
    }
}

impl<T> IterationKernel<T> for SteepestDescentKernel<T>
where
    T: FloatT,
{
    fn method(&self) -> IterativeMethod {
        IterativeMethod::SteepestDescent
    }

    // the gradient is recomputed at every step
    fn initialize(&mut self, _A: &Matrix<T>, _b: &[T], _x: &[T]) {}

    fn step(&mut self, A: &Matrix<T>, b: &[T], x: &mut [T]) -> StepReport<T> {
        let g = &mut self.g;
        let Ag = &mut self.Ag;

        // g = Ax - b
        g.copy_from(b);
        A.gemv(g, x, T::one(), -T::one());

        // exact line search along -g
        A.gemv(Ag, g, T::one(), T::zero());
        let gg = g.sumsq();
        let α = _safe_ratio(gg, g.dot(Ag));

        x.axpby(-α, g, T::one());

        let gnorm = T::sqrt(gg);
        StepReport {
            alpha: α,
            beta: T::zero(),
            search_norm: gnorm,
            step_norm: T::abs(α) * gnorm,
        }
    }

    fn is_converged(&self, report: &StepReport<T>, tol: T) -> bool {
        report.search_norm < tol
    }
}

// ---------------------------------------------------------
// Conjugate Gradient
// ---------------------------------------------------------

pub(crate) struct ConjugateGradientKernel<T> {
    // residual r = b - Ax
    r: Vec<T>,
    // search direction
    p: Vec<T>,
    // work vector for Ap
    Ap: Vec<T>,
    // iterate before the most recent step
    x_prev: Vec<T>,
    // rᵀr for the current residual
    rr: T,
}

impl<T> ConjugateGradientKernel<T>
where
    T: FloatT,
{
    pub fn new(n: usize) -> Self {
        Self {
            r: vec![T::zero(); n],
            p: vec![T::zero(); n],
            Ap: vec![T::zero(); n],
            x_prev: vec![T::zero(); n],
            rr: T::zero(),
        }
    }
}

impl<T> IterationKernel<T> for ConjugateGradientKernel<T>
where
    T: FloatT,
{
    fn method(&self) -> IterativeMethod {
        IterativeMethod::ConjugateGradient
    }

    fn initialize(&mut self, A: &Matrix<T>, b: &[T], x: &[T]) {
        // r = b - Ax, p = r
        self.r.copy_from(b);
        A.gemv(&mut self.r, x, -T::one(), T::one());
        self.p.copy_from(&self.r);
        self.rr = self.r.sumsq();
    }

    fn step(&mut self, A: &Matrix<T>, _b: &[T], x: &mut [T]) -> StepReport<T> {
        let (r, p, Ap) = (&mut self.r, &mut self.p, &mut self.Ap);

        A.gemv(Ap, p, T::one(), T::zero());
        let α = _safe_ratio(self.rr, p.dot(Ap));

        self.x_prev.copy_from(x);
        x.axpby(α, p, T::one());

        // r_new = r - αAp
        r.axpby(-α, Ap, T::one());
        let rr_new = r.sumsq();
        let β = if self.rr == T::zero() {
            T::zero()
        } else {
            rr_new / self.rr
        };

        // p = r_new + βp
        p.axpby(T::one(), r, β);
        self.rr = rr_new;

        StepReport {
            alpha: α,
            beta: β,
            search_norm: p.norm(),
            step_norm: self.x_prev.dist(x),
        }
    }

    // both the search direction and the step must be small
    fn is_converged(&self, report: &StepReport<T>, tol: T) -> bool {
        report.search_norm < tol && report.step_norm < tol
    }
}

#[test]
fn test_kernels_exact_start() {
    let A = Matrix::from(&[[2., 0.], [0., 3.]]);
    let b = [2., 3.];

    // starting at the solution produces a zero step, not NaNs
    for method in [
        IterativeMethod::SteepestDescent,
        IterativeMethod::ConjugateGradient,
    ] {
        let mut x = vec![1., 1.];
        let mut kernel = Kernel::new(method, 2);
        assert_eq!(kernel.method(), method);
        kernel.initialize(&A, &b, &x);
        let report = kernel.step(&A, &b, &mut x);
        assert_eq!(report.alpha, 0.);
        assert_eq!(report.beta, 0.);
        assert_eq!(x, [1., 1.]);
        assert!(kernel.is_converged(&report, 1e-10));
    }
}

#[test]
fn test_cg_two_steps() {
    // CG terminates in at most n steps in exact arithmetic
    #[rustfmt::skip]
    let A = Matrix::from(&[
        [4., 1.],
        [1., 3.],
    ]);
    let b = [1., 2.];
    let mut x = vec![0., 0.];
    let mut kernel = Kernel::new(IterativeMethod::ConjugateGradient, 2);
    kernel.initialize(&A, &b, &x);
    kernel.step(&A, &b, &mut x);
    kernel.step(&A, &b, &mut x);
    assert!(x.norm_inf_diff(&[1. / 11., 7. / 11.]) < 1e-14);
}
