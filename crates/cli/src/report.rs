use std::fmt;

use logeq_core::{EquationParams, Interval};
use serde::Serialize;

/// The outcome of one solve, printed as text or JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub params: EquationParams,
    pub interval: Interval,
    pub roots: Vec<f64>,
    pub domain: String,
}

impl Report {
    pub fn new(params: EquationParams, interval: Interval, roots: Vec<f64>) -> Self {
        Self {
            params,
            interval,
            roots,
            domain: params.domain_note().to_string(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Interval { min, max } = self.interval;

        if self.roots.is_empty() {
            writeln!(f, "no roots on [{min}; {max}]")?;
        } else {
            let roots = self
                .roots
                .iter()
                .map(|root| format!("{root:.6}"))
                .collect::<Vec<_>>()
                .join(", ");
            let noun = if self.roots.len() == 1 { "root" } else { "roots" };
            writeln!(f, "found {} {noun}: x ≈ {roots}", self.roots.len())?;
        }

        write!(f, "{}", self.domain)
    }
}
