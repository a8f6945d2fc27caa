use thiserror::Error;

use super::bracket::BracketError;

/// Reasons a bracket cannot be refined.
///
/// The scan treats every variant as "no root here" and moves on.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("function is undefined at bracket endpoint x = {x}")]
    UndefinedEndpoint { x: f64 },

    #[error("no sign change: f({left})={left_value}, f({right})={right_value}")]
    NoSignChange {
        left: f64,
        right: f64,
        left_value: f64,
        right_value: f64,
    },
}
