//! Root location for `log_b(a·x + d) = m·x + n`.
//!
//! The [`equation`] module holds the numerical building blocks: a bracketing
//! [`scan`](equation::scan) over a fixed partition of the interval and
//! [`bisection`](equation::bisection) refinement of each bracket. [`solve`]
//! ties them to [`EquationParams`](logeq_core::EquationParams), validating the
//! logarithm base first.

pub mod equation;

mod solve;

pub use solve::{RootSet, SolveError, solve, solve_with};
