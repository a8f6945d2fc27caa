use std::ops::Deref;

use thiserror::Error;

use logeq_core::{EquationParams, Interval, InvalidBase};

use crate::equation::scan;

/// Errors that can occur when solving the equation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SolveError {
    /// The logarithm base is `≤ 0`, `1`, or non-finite. No roots are searched for.
    #[error(transparent)]
    InvalidBase(#[from] InvalidBase),
}

/// Roots of the equation on an interval, strictly ascending, with no two
/// closer than the merge tolerance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootSet(Vec<f64>);

impl RootSet {
    /// Returns the roots as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Consumes the set and returns the roots.
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for RootSet {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a RootSet {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Finds every real solution of `log_b(a·x + d) = m·x + n` on `interval`
/// using the default scan resolution and tolerances.
///
/// An interval that is not valid yields an empty set; reversed bounds are
/// not swapped here (see [`Interval::ordered`]).
///
/// # Errors
///
/// Returns [`SolveError::InvalidBase`] if `b ≤ 0`, `b = 1`, or `b` is not finite.
pub fn solve(params: &EquationParams, interval: Interval) -> Result<RootSet, SolveError> {
    solve_with(params, interval, &scan::Config::default())
}

/// Finds every real solution on `interval` using a custom scan config.
///
/// # Errors
///
/// Returns [`SolveError::InvalidBase`] if `b ≤ 0`, `b = 1`, or `b` is not finite.
pub fn solve_with(
    params: &EquationParams,
    interval: Interval,
    config: &scan::Config,
) -> Result<RootSet, SolveError> {
    params.base()?;

    let roots = scan::find_roots(&params.difference(), interval, config);
    log::debug!(
        "found {} root(s) of {params:?} on [{}, {}]",
        roots.len(),
        interval.min,
        interval.max
    );

    Ok(RootSet(roots))
}
