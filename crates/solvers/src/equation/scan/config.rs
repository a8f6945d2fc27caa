use thiserror::Error;

use crate::equation::bisection;

/// Configuration for the scanning root locator.
///
/// The defaults use 400 scan intervals, merge roots closer than `1e-4`, and
/// refine with the default [`bisection::Config`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    steps: usize,
    merge_tol: f64,
    bisection: bisection::Config,
}

/// Errors that can occur when validating a scan config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("steps must be at least 1")]
    Steps,

    #[error("merge_tol must be finite and non-negative")]
    MergeTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            steps: 400,
            merge_tol: 1e-4,
            bisection: bisection::Config::default(),
        }
    }
}

impl Config {
    /// Creates a new config with validated settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `steps` is zero or `merge_tol` is negative or
    /// non-finite.
    pub fn new(
        steps: usize,
        merge_tol: f64,
        bisection: bisection::Config,
    ) -> Result<Self, ConfigError> {
        if steps == 0 {
            return Err(ConfigError::Steps);
        }
        if !merge_tol.is_finite() || merge_tol < 0.0 {
            return Err(ConfigError::MergeTol);
        }

        Ok(Self {
            steps,
            merge_tol,
            bisection,
        })
    }

    /// Returns a copy of this config with a different number of scan steps.
    ///
    /// # Errors
    ///
    /// Returns an error if `steps` is zero.
    pub fn with_steps(self, steps: usize) -> Result<Self, ConfigError> {
        Self::new(steps, self.merge_tol, self.bisection)
    }

    /// Returns the number of scan intervals.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the distance at or below which two roots are merged.
    #[must_use]
    pub fn merge_tol(&self) -> f64 {
        self.merge_tol
    }

    /// Returns the config used to refine each bracket.
    #[must_use]
    pub fn bisection(&self) -> &bisection::Config {
        &self.bisection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_values() {
        let config = Config::default();
        assert_eq!(config.steps(), 400);
        assert_relative_eq!(config.merge_tol(), 1e-4);
        assert_eq!(*config.bisection(), bisection::Config::default());
    }

    #[test]
    fn rejects_invalid_settings() {
        let bisection = bisection::Config::default();
        assert_eq!(Config::new(0, 1e-4, bisection), Err(ConfigError::Steps));
        assert_eq!(Config::new(10, -1.0, bisection), Err(ConfigError::MergeTol));
        assert_eq!(
            Config::new(10, f64::INFINITY, bisection),
            Err(ConfigError::MergeTol)
        );
    }

    #[test]
    fn with_steps_keeps_other_settings() {
        let config = Config::default().with_steps(1000).expect("valid steps");
        assert_eq!(config.steps(), 1000);
        assert_relative_eq!(config.merge_tol(), 1e-4);

        assert_eq!(Config::default().with_steps(0), Err(ConfigError::Steps));
    }
}
