//! Bisection refinement of a single bracket.
//!
//! # Algorithm
//!
//! Given a bracket `[l, r]` whose function values have opposite signs (or
//! where one is zero), the solver repeatedly evaluates the midpoint:
//!
//! - an endpoint that evaluates to exactly zero is returned immediately
//! - a midpoint with `|f(mid)| < residual_tol` is returned as converged
//! - an undefined midpoint moves the right bound to the midpoint
//! - otherwise the bound sharing the midpoint's sign moves to the midpoint
//!
//! When the iteration cap is reached the final midpoint is returned with
//! [`Status::MaxIters`].
//!
//! # Undefined midpoints
//!
//! A midpoint inside a domain gap always shrinks the bracket toward the left
//! bound, regardless of which side is actually defined. For a gap that sits
//! on the left, the search walks toward the gap's edge and ends with
//! [`Status::MaxIters`] instead of finding the root on the right.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use bracket::{Bracket, BracketError};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use logeq_core::{Curve, Observer};

use crate::equation::evaluate;

use bracket::Bounds;

/// Refines a bracket to a root using bisection.
///
/// Observers see every midpoint evaluation and can stop the search early.
///
/// # Errors
///
/// Returns an error if the bracket is non-finite or has zero width, if the
/// function is undefined at either endpoint, or if the endpoint values have
/// the same strict sign.
pub fn refine<C, Obs>(
    curve: &C,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    C: Curve + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let bounds = Bounds::new(bracket)?;
    let [left, right] = bounds.as_array();

    let left_value = evaluate(curve, left).ok_or(Error::UndefinedEndpoint { x: left })?;
    let right_value = evaluate(curve, right).ok_or(Error::UndefinedEndpoint { x: right })?;

    #[allow(clippy::float_cmp)]
    if left_value == 0.0 {
        return Ok(Solution {
            status: Status::ExactEndpoint,
            x: left,
            value: Some(left_value),
            iters: 0,
        });
    }
    #[allow(clippy::float_cmp)]
    if right_value == 0.0 {
        return Ok(Solution {
            status: Status::ExactEndpoint,
            x: right,
            value: Some(right_value),
            iters: 0,
        });
    }

    let mut bracket =
        Bracket::new(bounds, left_value, right_value).map_err(|_| Error::NoSignChange {
            left,
            right,
            left_value,
            right_value,
        })?;

    for iter in 1..=config.max_iters() {
        let x = bracket.midpoint();
        let value = evaluate(curve, x);

        let event = Event {
            iter,
            x,
            value,
            bracket: &bracket,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x,
                value,
                iters: iter,
            });
        }

        match value {
            None => bracket.cut_right(x),
            Some(value) if value.abs() < config.residual_tol() => {
                log::trace!("bisection converged at x = {x} after {iter} iterations");
                return Ok(Solution {
                    status: Status::Converged,
                    x,
                    value: Some(value),
                    iters: iter,
                });
            }
            Some(value) => bracket.shrink(x, value),
        }
    }

    let x = bracket.midpoint();
    log::trace!(
        "bisection reached {} iterations, returning midpoint x = {x} of width {}",
        config.max_iters(),
        bracket.width()
    );

    Ok(Solution {
        status: Status::MaxIters,
        x,
        value: evaluate(curve, x),
        iters: config.max_iters(),
    })
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`refine`].
pub fn refine_unobserved<C>(curve: &C, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    C: Curve + ?Sized,
{
    refine(curve, bracket, config, ())
}
