use std::fmt;

use thiserror::Error;

use crate::{Difference, Line, LogCurve};

/// Error returned when a logarithm base is not positive or equals one.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("logarithm base must be positive and not equal to 1, got {base}")]
pub struct InvalidBase {
    pub base: f64,
}

/// A validated logarithm base: finite, `b > 0`, and `b ≠ 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Base(f64);

impl Base {
    /// Validates a logarithm base.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBase`] if `base` is non-finite, `≤ 0`, or `1`.
    pub fn new(base: f64) -> Result<Self, InvalidBase> {
        #[allow(clippy::float_cmp)]
        if !base.is_finite() || base <= 0.0 || base == 1.0 {
            return Err(InvalidBase { base });
        }
        Ok(Self(base))
    }

    /// Returns the base value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Coefficients of the equation `log_b(a·x + d) = m·x + n`.
///
/// The base is kept as a plain number so that parameters can be built from
/// raw input; call [`EquationParams::base`] to validate it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct EquationParams {
    /// Logarithm base.
    pub b: f64,
    /// Slope of the logarithm's argument.
    pub a: f64,
    /// Offset of the logarithm's argument.
    pub d: f64,
    /// Slope of the line.
    pub m: f64,
    /// Intercept of the line.
    pub n: f64,
}

impl EquationParams {
    #[must_use]
    pub fn new(b: f64, a: f64, d: f64, m: f64, n: f64) -> Self {
        Self { b, a, d, m, n }
    }

    /// Returns the validated logarithm base.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBase`] if `b` is not a usable logarithm base.
    pub fn base(&self) -> Result<Base, InvalidBase> {
        Base::new(self.b)
    }

    /// Returns `y1(x) = log_b(a·x + d)`.
    #[must_use]
    pub fn log_curve(&self) -> LogCurve {
        LogCurve::new(self.a, self.d, self.b)
    }

    /// Returns `y2(x) = m·x + n`.
    #[must_use]
    pub fn line(&self) -> Line {
        Line::new(self.m, self.n)
    }

    /// Returns `F(x) = y1(x) − y2(x)`.
    #[must_use]
    pub fn difference(&self) -> Difference {
        Difference::new(self.log_curve(), self.line())
    }

    /// Describes where the logarithm is defined.
    #[must_use]
    pub fn domain_note(&self) -> DomainNote {
        #[allow(clippy::float_cmp)]
        if self.a == 0.0 {
            DomainNote::ConstantArgument
        } else {
            DomainNote::LinearArgument
        }
    }
}

/// Where `log_b(a·x + d)` is defined, for reporting next to results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainNote {
    /// `a = 0`: the logarithm exists for every `x` when `d > 0`, and nowhere otherwise.
    ConstantArgument,
    /// `a ≠ 0`: the logarithm exists where `a·x + d > 0`.
    LinearArgument,
}

impl fmt::Display for DomainNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstantArgument => {
                write!(f, "domain: d > 0 (otherwise the logarithm does not exist)")
            }
            Self::LinearArgument => write!(f, "domain: a·x + d > 0"),
        }
    }
}
