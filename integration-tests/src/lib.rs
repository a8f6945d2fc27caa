//! Shared strategies for the workspace's property tests.

use logeq_core::{EquationParams, Interval};
use proptest::prelude::*;

/// Valid logarithm bases on both sides of 1.
pub fn base() -> impl Strategy<Value = f64> {
    prop_oneof![0.1..0.9, 1.1..20.0]
}

/// Equations whose logarithm has a constant argument `d > 0`.
pub fn constant_argument() -> impl Strategy<Value = EquationParams> {
    (base(), 0.01..100.0, -10.0..10.0, -5.0..5.0)
        .prop_map(|(b, d, m, n)| EquationParams::new(b, 0.0, d, m, n))
}

/// Equations that are smooth across `[0, 10]`.
///
/// The logarithm's argument stays at or above 0.5 on that interval, so the
/// difference has a bounded slope and bisection can reach a tight residual.
pub fn smooth_on_unit_decade() -> impl Strategy<Value = EquationParams> {
    (1.5..10.0, 0.5..5.0, 0.5..5.0, -2.0..2.0, -3.0..3.0)
        .prop_map(|(b, a, d, m, n)| EquationParams::new(b, a, d, m, n))
}

/// Arbitrary finite coefficients, including ones whose logarithm is undefined
/// over part or all of the interval.
pub fn any_params() -> impl Strategy<Value = EquationParams> {
    (base(), -5.0..5.0, -5.0..5.0, -5.0..5.0, -5.0..5.0)
        .prop_map(|(b, a, d, m, n)| EquationParams::new(b, a, d, m, n))
}

/// Increasing finite intervals.
pub fn interval() -> impl Strategy<Value = Interval> {
    (-50.0..50.0, 0.01..60.0).prop_map(|(min, width)| Interval::new(min, min + width))
}
