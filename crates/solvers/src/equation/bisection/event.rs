use super::Bracket;

/// Event emitted by the bisection solver for each midpoint evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Iteration counter, starting at 1.
    pub iter: usize,

    /// The midpoint that was evaluated.
    pub x: f64,

    /// Function value at the midpoint, or `None` if undefined or non-finite.
    pub value: Option<f64>,

    /// The bracket before it is narrowed by this evaluation.
    pub bracket: &'a Bracket,
}
