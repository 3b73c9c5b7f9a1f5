//! Physiological stability index value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stability index, clamped to the closed interval [0, 100].
///
/// Higher means closer to reference vitals. The underlying deviation formula
/// is a fixed legacy weighting and does not sum to a guaranteed maximum, so
/// clamping here is what establishes the reported scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StabilityIndex(f64);

impl StabilityIndex {
    /// Fully unstable.
    pub const ZERO: Self = Self(0.0);

    /// Fully stable.
    pub const MAX: Self = Self(100.0);

    /// Creates a new StabilityIndex, clamping to the valid range.
    pub fn new(value: f64) -> Self {
        Self(value.min(100.0).max(0.0))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for StabilityIndex {
    fn default() -> Self {
        Self::MAX
    }
}

impl fmt::Display for StabilityIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
