/// How the bisection solver arrived at its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A bracket endpoint evaluated to exactly zero.
    ExactEndpoint,

    /// A midpoint met the residual tolerance.
    Converged,

    /// The iteration cap was reached; `x` is the final midpoint.
    ///
    /// With the default config this is a precision ceiling rather than a
    /// failure: 60 halvings shrink any finite bracket far below display
    /// resolution, but `|F(x)|` is not guaranteed to be under the tolerance.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of refining one bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Root estimate.
    pub x: f64,

    /// Function value at `x`, if defined and finite.
    pub value: Option<f64>,

    /// Number of midpoints evaluated.
    pub iters: usize,
}
