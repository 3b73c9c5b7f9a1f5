//! Mortality-risk percentage value object (0-95 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A mortality-risk percentage, clamped to the closed interval [0, 95].
///
/// The upper bound reflects the ceiling of the scoring formulas: no
/// deterministic estimate ever reports more than 95% risk.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskPercent(f64);

impl RiskPercent {
    /// Zero percent risk.
    pub const ZERO: Self = Self(0.0);

    /// The maximum reportable risk.
    pub const MAX: Self = Self(95.0);

    /// Creates a new RiskPercent, clamping to the valid range.
    pub fn new(value: f64) -> Self {
        Self(value.min(95.0).max(0.0))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for RiskPercent {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for RiskPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}
