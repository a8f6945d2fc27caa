use logeq_core::{Curve, Interval};

/// Number of intervals used when sampling a curve for drawing.
pub const DEFAULT_CURVE_STEPS: usize = 600;

/// A sampled point of a curve.
///
/// `y` is `None` where the curve is undefined or non-finite, which breaks the
/// drawn polyline at that point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub x: f64,
    pub y: Option<f64>,
}

impl SamplePoint {
    /// Returns the point as `[x, y]` if `y` is defined.
    #[must_use]
    pub fn defined(&self) -> Option<[f64; 2]> {
        self.y.map(|y| [self.x, y])
    }
}

/// Samples `curve` at `steps + 1` evenly spaced points across `interval`.
///
/// With `steps == 0` only the interval's lower bound is sampled.
pub fn sample_curve<C>(curve: &C, interval: Interval, steps: usize) -> Vec<SamplePoint>
where
    C: Curve + ?Sized,
{
    let sample = |x: f64| SamplePoint {
        x,
        y: curve.eval(x).filter(|y| y.is_finite()),
    };

    if steps == 0 {
        return vec![sample(interval.min)];
    }

    (0..=steps)
        .map(|i| sample(interval.point(i, steps)))
        .collect()
}

/// Splits samples into runs of consecutive defined points.
///
/// Each run is one continuous piece of the curve; undefined samples separate
/// runs and are dropped.
#[must_use]
pub fn segments(samples: &[SamplePoint]) -> Vec<Vec<[f64; 2]>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for sample in samples {
        match sample.defined() {
            Some(point) => current.push(point),
            None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}
