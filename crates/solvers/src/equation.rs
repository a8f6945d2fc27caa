//! Solvers for locating roots of a [`Curve`] on an interval.
//!
//! A [`Curve`] may be undefined at some points. Solvers in this module treat
//! undefined and non-finite values as gaps: they never bracket a root across
//! one and never report one as converged.
//!
//! # Solvers
//!
//! - [`scan`]: partitions the interval, brackets sign changes, refines each
//!   bracket, and merges nearly coincident roots
//! - [`bisection`]: refines a single bracket with a fixed iteration cap
//!
//! [`Curve`]: logeq_core::Curve

mod evaluate;

pub use evaluate::evaluate;

pub mod bisection;
pub mod scan;
