use thiserror::Error;

/// Errors that can occur when validating bracket bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,
}

/// Current bracket bounds and the function value at the left bound.
///
/// Only the left value is tracked: narrowing compares the midpoint's value
/// against it, and a gap at the midpoint always moves the right bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: f64,
    right: f64,
    left_value: f64,
}

impl Bracket {
    /// Creates a bracket from ordered bounds and their function values.
    ///
    /// # Errors
    ///
    /// Returns the bounds and values back if they have the same strict sign.
    pub(super) fn new(
        bounds: Bounds,
        left_value: f64,
        right_value: f64,
    ) -> Result<Self, [f64; 2]> {
        if left_value * right_value > 0.0 {
            return Err([left_value, right_value]);
        }

        Ok(Self {
            left: bounds.left,
            right: bounds.right,
            left_value,
        })
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns the function value at the left bound.
    #[must_use]
    pub fn left_value(&self) -> f64 {
        self.left_value
    }

    /// Narrows the bracket to the half that keeps the sign change.
    ///
    /// The root is taken to lie in `[left, x]` when `f(left) · value ≤ 0`,
    /// otherwise in `[x, right]`.
    pub(super) fn shrink(&mut self, x: f64, value: f64) {
        if self.left_value * value <= 0.0 {
            self.right = x;
        } else {
            self.left = x;
            self.left_value = value;
        }
    }

    /// Narrows the bracket past an undefined point by moving the right bound.
    ///
    /// This always keeps the left half, whichever side of `x` is actually
    /// defined.
    pub(super) fn cut_right(&mut self, x: f64) {
        self.right = x;
    }
}

/// Ordered finite bounds for a bisection bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bracket;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if left == right {
            return Err(BracketError::ZeroWidth);
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    /// Returns the bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }
}
