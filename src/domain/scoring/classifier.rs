//! Risk-level classification.
//!
//! Two deliberately distinct scales coexist: one over the mortality
//! percentage reported by the prediction model, one over the composite
//! deterioration score. They look similar but are separate clinical
//! contexts and must not be unified.

use serde::{Deserialize, Serialize};

/// Ordinal risk-level label.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

/// Mortality-percentage scale: Moderate starts at 20%.
const PERCENT_MODERATE_FROM: f64 = 20.0;
const PERCENT_HIGH_FROM: f64 = 50.0;

/// Composite-score scale: Moderate starts at 25, High strictly above 50.
const SCORE_MODERATE_FROM: f64 = 25.0;
const SCORE_HIGH_ABOVE: f64 = 50.0;

impl RiskLevel {
    /// Returns the display label for this risk level.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }

    /// Classifies a mortality-risk percentage (model output scale).
    ///
    /// Below 20 is Low, below 50 is Moderate, 50 and above is High.
    pub fn from_mortality_percent(percent: f64) -> Self {
        if percent < PERCENT_MODERATE_FROM {
            RiskLevel::Low
        } else if percent < PERCENT_HIGH_FROM {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }

    /// Classifies a composite deterioration score (25/50 scale).
    ///
    /// Strictly above 50 is High, 25 up to and including 50 is Moderate,
    /// below 25 is Low.
    pub fn from_composite_score(score: f64) -> Self {
        if score > SCORE_HIGH_ABOVE {
            RiskLevel::High
        } else if score >= SCORE_MODERATE_FROM {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}
