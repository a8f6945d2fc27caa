use logeq_core::Curve;

/// Evaluates `curve` at `x`, treating non-finite values as undefined.
///
/// Every sign test in the solvers goes through this function, so NaN and
/// infinities from user-supplied curves never reach a comparison.
pub fn evaluate<C>(curve: &C, x: f64) -> Option<f64>
where
    C: Curve + ?Sized,
{
    curve.eval(x).filter(|value| value.is_finite())
}
