use super::*;
use crate::algebra::*;

/// Result of an iterative solve
#[derive(Debug, Clone, PartialEq)]
pub struct IterativeSolution<T> {
    /// final iterate
    pub x: Vec<T>,
    /// number of iterations taken
    pub iterations: u32,
    /// final solver status
    pub status: SolverStatus,
    /// residual norm `‖b - Ax‖` of the final iterate
    pub residual_norm: T,
    /// solve time in seconds
    pub solve_time: f64,
}

impl<T> IterativeSolution<T>
where
    T: FloatT,
{
    /// Create a new `IterativeSolution` object
    pub fn new(n: usize) -> Self {
        Self {
            x: vec![T::zero(); n],
            iterations: 0,
            status: SolverStatus::Unsolved,
            residual_norm: T::nan(),
            solve_time: 0f64,
        }
    }

    /// Root mean square distance from `x` to a reference solution
    pub fn rms_error(&self, reference: &[T]) -> T {
        self.x.rms_dist(reference)
    }

    pub(crate) fn finalize(&mut self, x: &[T], info: &IterativeInfo<T>) {
        self.x.copy_from(x);
        self.iterations = info.iterations;
        self.status = info.status;
        self.residual_norm = info.residual_norm;
        self.solve_time = info.solve_time;
    }
}
