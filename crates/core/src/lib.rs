//! Core types for solving `log_b(a·x + d) = m·x + n`.
//!
//! This crate defines the data model and the pure function evaluator that the
//! solvers and the plotting crate build on:
//!
//! - [`EquationParams`]: the five equation coefficients, with [`Base`] as the
//!   validated logarithm base
//! - [`Interval`]: the search and display interval `[min, max]`
//! - [`Curve`]: a real function that may be undefined at some `x`, with
//!   [`LogCurve`] (y1), [`Line`] (y2), and [`Difference`] (F = y1 − y2)
//! - [`Observer`]: receives solver events and optionally returns control actions
//!
//! "Undefined" is represented as `None` rather than an error, so domain gaps
//! such as `a·x + d ≤ 0` are ordinary values in a numeric loop.

mod curve;
mod interval;
mod observer;
mod params;

pub use curve::{Curve, Difference, Line, LogCurve, log_base};
pub use interval::Interval;
pub use observer::Observer;
pub use params::{Base, DomainNote, EquationParams, InvalidBase};
