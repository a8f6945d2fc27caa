/// A closed interval `[min, max]` on the x-axis.
///
/// Solvers and samplers expect `min < max` with both bounds finite. The type
/// does not enforce this so callers can hold raw input; use
/// [`Interval::ordered`] to normalize reversed bounds and
/// [`Interval::is_valid`] to check the precondition.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Creates an interval with the bounds exactly as given.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Creates an interval from two bounds in either order.
    ///
    /// Bounds are swapped unless `b > a`, so equal or NaN bounds come back
    /// swapped as well and remain invalid.
    #[must_use]
    pub fn ordered(a: f64, b: f64) -> Self {
        if b > a { Self::new(a, b) } else { Self::new(b, a) }
    }

    /// Returns true if both bounds are finite and `max > min`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.max > self.min
    }

    /// Returns `max − min`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Returns the `i`-th of `steps + 1` evenly spaced partition points.
    ///
    /// Points are computed as `min + (width / steps) · i`, so point `steps`
    /// may differ from `max` by rounding.
    #[must_use]
    pub fn point(&self, i: usize, steps: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let (i, steps) = (i as f64, steps as f64);
        self.min + self.width() / steps * i
    }

    /// Returns true if `x` lies within the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }
}
