//! Locating every root of a curve on an interval.
//!
//! # Algorithm
//!
//! The interval is split into `steps` equal parts and the curve is evaluated
//! at each of the `steps + 1` partition points. For each consecutive pair
//! `(x₀, x₁)` where both values are defined:
//!
//! - if `f(x₀)` is exactly zero, `x₀` is recorded as a root
//! - if `f(x₀) · f(x₁) < 0`, the pair is refined with [`bisection`]
//!
//! Pairs with an undefined value are skipped, so no root is ever claimed
//! across a domain gap. The collected roots are sorted and any root within
//! `merge_tol` of the previously kept one is dropped.
//!
//! The last partition point is only ever the right end of a pair, so an exact
//! zero there is not recorded on its own.
//!
//! Roots closer together than one scan step may share a bracket with an even
//! number of sign changes and go unreported.

mod config;
mod event;

pub use config::{Config, ConfigError};
pub use event::Event;

use logeq_core::{Curve, Interval, Observer};

use crate::equation::{bisection, evaluate};

/// Control actions supported by the scanning root locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop scanning and return the roots found so far.
    StopEarly,
}

/// Finds all roots of `curve` on `interval`, ascending and deduplicated.
///
/// Returns an empty list when the interval is not valid (see
/// [`Interval::is_valid`]) or when no sign change is bracketed.
pub fn find_roots<C>(curve: &C, interval: Interval, config: &Config) -> Vec<f64>
where
    C: Curve + ?Sized,
{
    find_roots_observed(curve, interval, config, ())
}

/// Finds all roots of `curve` on `interval`, reporting progress to `observer`.
///
/// The observer receives an [`Event`] for every partition point, bracket, and
/// refinement, and may return [`Action::StopEarly`] to end the scan with the
/// roots found so far.
pub fn find_roots_observed<C, Obs>(
    curve: &C,
    interval: Interval,
    config: &Config,
    mut observer: Obs,
) -> Vec<f64>
where
    C: Curve + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    if !interval.is_valid() {
        log::debug!(
            "skipping scan over invalid interval [{}, {}]",
            interval.min,
            interval.max
        );
        return Vec::new();
    }

    let steps = config.steps();
    let mut roots = Vec::new();

    let mut prev_x = interval.min;
    let mut prev_value = evaluate(curve, prev_x);
    let mut stopped = emit(
        &mut observer,
        &Event::Sampled {
            index: 0,
            x: prev_x,
            value: prev_value,
        },
    );

    for index in 1..=steps {
        if stopped {
            break;
        }

        let x = interval.point(index, steps);
        let value = evaluate(curve, x);
        stopped = emit(&mut observer, &Event::Sampled { index, x, value });

        if let (Some(prev), Some(current)) = (prev_value, value) {
            #[allow(clippy::float_cmp)]
            if prev == 0.0 {
                roots.push(prev_x);
                stopped |= emit(&mut observer, &Event::ExactHit { x: prev_x });
            } else if prev * current < 0.0 {
                let bracket = [prev_x, x];
                stopped |= emit(&mut observer, &Event::Bracketed { bracket });

                match bisection::refine_unobserved(curve, bracket, config.bisection()) {
                    Ok(solution) => {
                        roots.push(solution.x);
                        let event = Event::Refined {
                            bracket,
                            solution: &solution,
                        };
                        stopped |= emit(&mut observer, &event);
                    }
                    Err(error) => {
                        log::debug!("skipping bracket [{prev_x}, {x}]: {error}");
                        let event = Event::Skipped {
                            bracket,
                            error: &error,
                        };
                        stopped |= emit(&mut observer, &event);
                    }
                }
            }
        }

        prev_x = x;
        prev_value = value;
    }

    if stopped {
        log::debug!(
            "scan stopped early by observer with {} candidate roots",
            roots.len()
        );
    }

    merge_roots(roots, config.merge_tol())
}

/// Sorts roots ascending and drops any root within `tol` of the last kept one.
#[must_use]
pub fn merge_roots(mut roots: Vec<f64>, tol: f64) -> Vec<f64> {
    roots.sort_by(f64::total_cmp);

    let mut merged: Vec<f64> = Vec::with_capacity(roots.len());
    for root in roots {
        if merged.last().is_none_or(|last| (root - last).abs() > tol) {
            merged.push(root);
        }
    }
    merged
}

/// Sends an event to the observer and reports whether it asked to stop.
fn emit<Obs>(observer: &mut Obs, event: &Event<'_>) -> bool
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    matches!(observer.observe(event), Some(Action::StopEarly))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use logeq_core::{Difference, EquationParams, Line, LogCurve};

    fn scan(params: EquationParams, interval: Interval) -> Vec<f64> {
        find_roots(&params.difference(), interval, &Config::default())
    }

    #[test]
    fn finds_root_of_log2() {
        // log2(x) = 0 on [0.1, 10].
        let roots = scan(
            EquationParams::new(2.0, 1.0, 0.0, 0.0, 0.0),
            Interval::new(0.1, 10.0),
        );

        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn finds_both_roots_of_log10_against_identity() {
        // log10(x + 1) = x crosses near x ≈ -0.862 and at x = 0.
        let params = EquationParams::new(10.0, 1.0, 1.0, 1.0, 0.0);
        let roots = scan(params, Interval::new(-0.9, 5.0));

        assert_eq!(roots.len(), 2);
        assert!(roots[0] > -0.9 && roots[0] < -0.8);
        assert_relative_eq!(roots[1], 0.0, epsilon = 1e-8);

        let f = params.difference();
        for root in roots {
            assert!(f.eval(root).unwrap().abs() < 1e-6);
        }
    }

    #[test]
    fn records_exact_partition_hit_once() {
        // Step width is 0.25, so x = 1.0 is partition point 2 and log2(1) = 0
        // exactly. It is the left end of one pair and the right end of another.
        let roots = scan(
            EquationParams::new(2.0, 1.0, 0.0, 0.0, 0.0),
            Interval::new(0.5, 100.5),
        );

        assert_eq!(roots, [1.0]);
    }

    #[test]
    fn undefined_everywhere_gives_no_roots() {
        // a·x + d = -1 for every x.
        let roots = scan(
            EquationParams::new(2.0, 0.0, -1.0, 0.0, 0.0),
            Interval::new(-10.0, 10.0),
        );
        assert!(roots.is_empty());
    }

    #[test]
    fn invalid_base_gives_no_roots() {
        let roots = scan(
            EquationParams::new(1.0, 1.0, 0.0, 0.0, 0.0),
            Interval::new(0.1, 10.0),
        );
        assert!(roots.is_empty());
    }

    #[test]
    fn degenerate_intervals_give_no_roots() {
        let params = EquationParams::new(2.0, 1.0, 0.0, 0.0, 0.0);

        assert!(scan(params, Interval::new(1.0, 1.0)).is_empty());
        assert!(scan(params, Interval::new(10.0, 0.1)).is_empty());
        assert!(scan(params, Interval::new(f64::NAN, 10.0)).is_empty());
    }

    #[test]
    fn never_brackets_across_domain_gap() {
        // 1/x changes sign across x = 0 but is undefined there. With a step
        // width of 0.25, x = 0 is a partition point.
        let reciprocal = |x: f64| (x != 0.0).then(|| 1.0 / x);
        let roots = find_roots(
            &reciprocal,
            Interval::new(-50.0, 50.0),
            &Config::default(),
        );
        assert!(roots.is_empty());
    }

    #[test]
    fn decreasing_log_finds_root() {
        // log_0.5(x) = -3 at x = 8.
        let f = Difference::new(LogCurve::new(1.0, 0.0, 0.5), Line::new(0.0, -3.0));
        let roots = find_roots(&f, Interval::new(1.0, 20.0), &Config::default());

        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 8.0, epsilon = 1e-8);
    }

    #[test]
    fn finds_roots_of_oscillating_closure() {
        let sine = |x: f64| Some(x.sin());
        let roots = find_roots(&sine, Interval::new(0.5, 10.0), &Config::default());

        let expected = [
            std::f64::consts::PI,
            2.0 * std::f64::consts::PI,
            3.0 * std::f64::consts::PI,
        ];
        assert_eq!(roots.len(), expected.len());
        for (root, expected) in roots.iter().zip(expected) {
            assert_relative_eq!(*root, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn merge_keeps_first_of_close_roots() {
        let merged = merge_roots(vec![2.0, 1.00005, 1.0, 3.0, 2.0002], 1e-4);
        assert_eq!(merged, [1.0, 2.0, 2.0002, 3.0]);
    }

    #[test]
    fn merge_of_empty_is_empty() {
        assert!(merge_roots(Vec::new(), 1e-4).is_empty());
    }

    #[test]
    fn observer_sees_every_partition_point() {
        let line = |x: f64| Some(x - 0.33);
        let config = Config::default().with_steps(10).expect("valid steps");
        let mut samples = 0;
        let mut brackets = Vec::new();

        let roots = find_roots_observed(
            &line,
            Interval::new(0.0, 1.0),
            &config,
            |event: &Event<'_>| -> Option<Action> {
                match event {
                    Event::Sampled { .. } => samples += 1,
                    Event::Bracketed { bracket } => brackets.push(*bracket),
                    _ => {}
                }
                None
            },
        );

        assert_eq!(samples, 11);
        assert_eq!(brackets.len(), 1);
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 0.33, epsilon = 1e-10);
    }

    #[test]
    fn observer_can_stop_scan() {
        let sine = |x: f64| Some(x.sin());

        let roots = find_roots_observed(
            &sine,
            Interval::new(0.5, 10.0),
            &Config::default(),
            |event: &Event<'_>| event.root().map(|_| Action::StopEarly),
        );

        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], std::f64::consts::PI, epsilon = 1e-9);
    }
}
