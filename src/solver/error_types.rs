use super::{IterativeMethod, IterativeSolution, SolverStatus};
use crate::algebra::{DimensionError, FloatT};
use thiserror::Error;

/// Error type returned by settings validation

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Error type returned by the iterative solvers

#[derive(Error, Debug)]
pub enum SolverError<T: FloatT> {
    /// Problem data or initial guess have incompatible dimensions
    #[error("Incompatible problem dimensions: {0}")]
    InvalidDimension(#[from] DimensionError),
    /// Settings failed validation
    #[error("Invalid settings: {0}")]
    BadSettings(#[from] SettingsError),
    /// The solver terminated without meeting its tolerance.  The final
    /// iterate is still available in `solution`.
    #[error("{method:?} failed to converge after {} iterations (status = {status})", .solution.iterations)]
    ConvergenceFailure {
        method: IterativeMethod,
        status: SolverStatus,
        solution: Box<IterativeSolution<T>>,
    },
}

impl<T> SolverError<T>
where
    T: FloatT,
{
    /// The last iterate computed before the solver gave up, if any
    pub fn best_iterate(&self) -> Option<&IterativeSolution<T>> {
        match self {
            SolverError::ConvergenceFailure { solution, .. } => Some(solution),
            _ => None,
        }
    }

    /// As [`best_iterate`](Self::best_iterate), but consuming the error
    pub fn into_best_iterate(self) -> Option<IterativeSolution<T>> {
        match self {
            SolverError::ConvergenceFailure { solution, .. } => Some(*solution),
            _ => None,
        }
    }
}
