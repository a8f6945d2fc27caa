use crate::equation::bisection;

/// Events emitted by the scanning root locator.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// A partition point was evaluated.
    Sampled {
        /// Index of the partition point, from 0 to `steps`.
        index: usize,
        /// The partition point.
        x: f64,
        /// Function value, or `None` if undefined or non-finite.
        value: Option<f64>,
    },

    /// A sign change was found between two consecutive partition points.
    Bracketed {
        /// The bracketing partition points.
        bracket: [f64; 2],
    },

    /// A partition point evaluated to exactly zero.
    ExactHit {
        /// The partition point.
        x: f64,
    },

    /// A bracket was refined to a root estimate.
    Refined {
        /// The bracket that was refined.
        bracket: [f64; 2],
        /// The bisection result.
        solution: &'a bisection::Solution,
    },

    /// A bracket could not be refined and was skipped.
    Skipped {
        /// The bracket that was skipped.
        bracket: [f64; 2],
        /// Why refinement failed.
        error: &'a bisection::Error,
    },
}

impl Event<'_> {
    /// Returns the root candidate reported by this event, if any.
    #[must_use]
    pub fn root(&self) -> Option<f64> {
        match self {
            Self::ExactHit { x } => Some(*x),
            Self::Refined { solution, .. } => Some(solution.x),
            Self::Sampled { .. } | Self::Bracketed { .. } | Self::Skipped { .. } => None,
        }
    }
}
