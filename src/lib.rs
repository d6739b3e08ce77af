//! __symsolve__ is a small numerical linear algebra toolkit for symmetric
//! systems.  It provides two independent solver families:
//!
//! * A direct $LDL^T$ solver for symmetric tridiagonal matrices, stored in
//!   compact three-vector form, which runs in $O(n)$ time and memory.  It is
//!   used to compute the second derivatives of a natural cubic spline.
//!
//! * Iterative Steepest Descent and Conjugate Gradient solvers for dense
//!   symmetric positive definite systems $Ax = b$.
//!
//! A natural cubic spline evaluator is included as the consumer of the
//! tridiagonal solver's output.
//!
//! # Tridiagonal systems
//!
//! ```
//! use symsolve::tridiag;
//!
//! // [2 1 0; 1 2 1; 0 1 2] x = [3 4 3]
//! let x = tridiag::solve::<f64>(&[2., 2., 2.], &[1., 1.], &[3., 4., 3.]).unwrap();
//! assert!((x[0] - 1.).abs() < 1e-14);
//! ```
//!
//! # Natural cubic splines
//!
//! ```
//! use symsolve::spline::NaturalCubicSpline;
//!
//! let h = 2.0 * std::f64::consts::PI / 9.0;
//! let y: Vec<f64> = (0..10).map(|i| f64::sin(i as f64 * h)).collect();
//! let spline = NaturalCubicSpline::new(h, &y).unwrap();
//! let s = spline.evaluate(3.14).unwrap();
//! assert!((s - f64::sin(3.14)).abs() < 1e-4);
//! ```
//!
//! # Iterative SPD solvers
//!
//! ```
//! use symsolve::{algebra::*, solver::*};
//!
//! let A = Matrix::from(&[
//!     [ 4., -1.,  0.],
//!     [-1.,  4., -1.],
//!     [ 0., -1.,  4.],
//! ]);
//! let b = [3., 2., 3.];
//! let x0 = [0.; 3];
//!
//! let settings = IterativeSettings::default();
//! let mut solver = IterativeSolver::new(&A, &b, settings).unwrap();
//! let solution = solver.solve(IterativeMethod::ConjugateGradient, &x0).unwrap();
//! assert!(solution.x.norm_inf_diff(&[1., 1., 1.]) < 1e-8);
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

//Rust hates greek characters
#![allow(confusable_idents)]

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod io;
pub mod solver;
pub mod spline;
pub mod timers;
pub mod tridiag;
