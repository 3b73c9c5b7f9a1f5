//! Clinical analysis result record.

use serde::{Deserialize, Serialize};

use super::classifier::RiskLevel;
use crate::domain::foundation::{RiskPercent, StabilityIndex};

/// Categorical status of one organ subsystem.
///
/// Derived from raw vitals with thresholds intentionally distinct from the
/// severity subscore thresholds; a subsystem can be Compromised while its
/// subscore is still 0 and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrganStatus {
    Normal,
    Compromised,
}

impl OrganStatus {
    /// Returns the display label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            OrganStatus::Normal => "Normal",
            OrganStatus::Compromised => "Compromised",
        }
    }

    /// Builds a status from a compromised-predicate result.
    pub fn from_compromised(compromised: bool) -> Self {
        if compromised {
            OrganStatus::Compromised
        } else {
            OrganStatus::Normal
        }
    }
}

/// The complete derived analysis for one patient vector.
///
/// Produced fresh per input, immutable after construction, owned by the
/// caller. Carries no identity beyond its input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalAnalysis {
    /// Respiratory severity subscore (0-4), from PaO2.
    pub respiratory_score: u8,
    /// Cardiovascular severity subscore (0-4), from mean arterial pressure.
    pub cardiovascular_score: u8,
    /// Neurological severity subscore (0-4), from the GCS total.
    pub neurological_score: u8,
    /// Renal severity subscore (0-4), from creatinine.
    pub renal_score: u8,
    /// Composite severity score: the sum of the four subscores.
    pub severity_score: u8,
    /// Composite mortality-risk percentage.
    pub mortality_risk: RiskPercent,
    /// Physiological stability index.
    pub stability_index: StabilityIndex,
    pub respiratory_status: OrganStatus,
    pub cardiovascular_status: OrganStatus,
    pub renal_status: OrganStatus,
    pub neurological_status: OrganStatus,
    /// Overall risk level on the composite-score scale.
    pub risk_level: RiskLevel,
}
