//! Iterative solvers for dense symmetric positive definite systems.
//!
//! Two methods are provided, [Steepest Descent](IterativeMethod::SteepestDescent)
//! and [Conjugate Gradient](IterativeMethod::ConjugateGradient).   Both
//! share a single iteration loop in [`IterativeSolver`], which handles
//! termination, timing and verbose printing, and differ only in the
//! per-iteration kernel.
//!
//! Symmetry and positive definiteness of the matrix are preconditions and
//! are not checked.  An indefinite matrix will typically cause the solver
//! to stall or to produce non-finite iterates, which is reported as a
//! [`ConvergenceFailure`](SolverError::ConvergenceFailure).

mod error_types;
mod info;
mod info_print;
mod kernels;
mod settings;
mod solution;
#[allow(clippy::module_inception)]
mod solver;

#[cfg(feature = "serde")]
mod json;

pub use error_types::*;
pub use info::*;
pub use kernels::IterativeMethod;
pub use settings::*;
pub use solution::*;
pub use solver::*;
