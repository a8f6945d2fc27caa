/// A real function of one variable that may be undefined at some points.
///
/// `None` marks an `x` where the function has no value, for example where a
/// logarithm's argument is non-positive. Scans and samplers skip those points
/// instead of handling errors.
///
/// Closures of type `Fn(f64) -> Option<f64>` implement `Curve` directly.
pub trait Curve {
    /// Evaluates the function at `x`, or returns `None` if it is undefined there.
    fn eval(&self, x: f64) -> Option<f64>;
}

impl<F> Curve for F
where
    F: Fn(f64) -> Option<f64>,
{
    fn eval(&self, x: f64) -> Option<f64> {
        self(x)
    }
}

/// Returns the logarithm of `value` in the given `base`, computed as
/// `ln(value) / ln(base)`.
///
/// Returns `None` when `base ≤ 0`, `base = 1`, or `value ≤ 0` (NaN inputs
/// fail the same comparisons and are also undefined).
#[must_use]
pub fn log_base(value: f64, base: f64) -> Option<f64> {
    #[allow(clippy::float_cmp)]
    if !(base > 0.0) || base == 1.0 {
        return None;
    }
    if !(value > 0.0) {
        return None;
    }
    Some(value.ln() / base.ln())
}

/// The logarithmic side of the equation, `y1(x) = log_b(a·x + d)`.
///
/// The base is stored unvalidated: with an invalid base the curve is simply
/// undefined everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogCurve {
    a: f64,
    d: f64,
    base: f64,
}

impl LogCurve {
    /// Creates `y1(x) = log_base(a·x + d)`.
    #[must_use]
    pub fn new(a: f64, d: f64, base: f64) -> Self {
        Self { a, d, base }
    }

    /// Returns the argument of the logarithm, `a·x + d`.
    #[must_use]
    pub fn argument(&self, x: f64) -> f64 {
        self.a * x + self.d
    }
}

impl Curve for LogCurve {
    fn eval(&self, x: f64) -> Option<f64> {
        log_base(self.argument(x), self.base)
    }
}

/// The linear side of the equation, `y2(x) = m·x + n`.
///
/// Total for every real `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    m: f64,
    n: f64,
}

impl Line {
    #[must_use]
    pub fn new(m: f64, n: f64) -> Self {
        Self { m, n }
    }

    /// Evaluates the line at `x`.
    #[must_use]
    pub fn at(&self, x: f64) -> f64 {
        self.m * x + self.n
    }
}

impl Curve for Line {
    fn eval(&self, x: f64) -> Option<f64> {
        Some(self.at(x))
    }
}

/// The residual function `F(x) = y1(x) − y2(x)` whose roots solve the equation.
///
/// `F` is undefined wherever either side is undefined or non-finite, so NaN
/// and infinities never reach the sign comparisons of a root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difference {
    log: LogCurve,
    line: Line,
}

impl Difference {
    #[must_use]
    pub fn new(log: LogCurve, line: Line) -> Self {
        Self { log, line }
    }
}

impl Curve for Difference {
    fn eval(&self, x: f64) -> Option<f64> {
        let y1 = self.log.eval(x)?;
        let y2 = self.line.eval(x)?;
        if !y1.is_finite() || !y2.is_finite() {
            return None;
        }
        Some(y1 - y2).filter(|value| value.is_finite())
    }
}
