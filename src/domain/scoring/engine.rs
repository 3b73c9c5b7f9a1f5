//! Clinical deterioration scoring engine.
//!
//! Deterministic, stateless rule evaluation over a [`PatientVector`]. Every
//! function here is total: out-of-range inputs produce out-of-range
//! intermediate sums, never panics, and the final values are clamped by the
//! foundation value objects.

use super::analysis::{ClinicalAnalysis, OrganStatus};
use super::classifier::RiskLevel;
use crate::domain::foundation::{RiskPercent, StabilityIndex};
use crate::domain::patient::PatientVector;

/// Additive risk weight per comorbidity flag.
pub(crate) const AIDS_WEIGHT: f64 = 10.0;
pub(crate) const CIRRHOSIS_WEIGHT: f64 = 8.0;
pub(crate) const DIABETES_WEIGHT: f64 = 5.0;
pub(crate) const HEPATIC_FAILURE_WEIGHT: f64 = 12.0;
pub(crate) const IMMUNOSUPPRESSION_WEIGHT: f64 = 10.0;

/// Risk contribution per severity point.
const SEVERITY_RISK_MULTIPLIER: f64 = 5.0;

/// Reference vitals and divisors for the stability index.
const STABILITY_HR_REFERENCE: f64 = 75.0;
const STABILITY_RR_REFERENCE: f64 = 16.0;
const STABILITY_TEMP_REFERENCE: f64 = 37.0;
const STABILITY_TEMP_DIVISOR: f64 = 3.0;
const STABILITY_TERM_WEIGHT: f64 = 20.0;

pub(crate) fn flag(present: bool, weight: f64) -> f64 {
    if present {
        weight
    } else {
        0.0
    }
}

/// Total comorbidity risk contribution for a patient.
pub(crate) fn comorbidity_burden(patient: &PatientVector) -> f64 {
    flag(patient.aids, AIDS_WEIGHT)
        + flag(patient.cirrhosis, CIRRHOSIS_WEIGHT)
        + flag(patient.diabetes, DIABETES_WEIGHT)
        + flag(patient.hepatic_failure, HEPATIC_FAILURE_WEIGHT)
        + flag(patient.immunosuppression, IMMUNOSUPPRESSION_WEIGHT)
}

/// Rule-based scoring over patient vitals and labs.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Respiratory severity from PaO2 (strict thresholds, worse below).
    pub fn respiratory_score(pao2: f64) -> u8 {
        if pao2 < 100.0 {
            3
        } else if pao2 < 200.0 {
            2
        } else if pao2 < 300.0 {
            1
        } else {
            0
        }
    }

    /// Cardiovascular severity from mean arterial pressure.
    pub fn cardiovascular_score(mean_arterial_pressure: f64) -> u8 {
        if mean_arterial_pressure < 70.0 {
            1
        } else {
            0
        }
    }

    /// Neurological severity from the GCS total.
    ///
    /// Strict comparisons throughout: the maximum valid total of 15 scores 0.
    pub fn neurological_score(gcs_total: f64) -> u8 {
        if gcs_total < 6.0 {
            4
        } else if gcs_total < 10.0 {
            3
        } else if gcs_total < 13.0 {
            2
        } else if gcs_total < 15.0 {
            1
        } else {
            0
        }
    }

    /// Renal severity from creatinine (strict thresholds, worse above).
    pub fn renal_score(creatinine: f64) -> u8 {
        if creatinine > 5.0 {
            4
        } else if creatinine > 3.5 {
            3
        } else if creatinine > 2.0 {
            2
        } else if creatinine > 1.2 {
            1
        } else {
            0
        }
    }

    /// Additive age adjustment to the composite risk.
    ///
    /// Bracket edges are inclusive: 65 already contributes the 65-bracket.
    pub fn age_adjustment(age: f64) -> f64 {
        if age >= 80.0 {
            15.0
        } else if age >= 65.0 {
            10.0
        } else if age >= 50.0 {
            5.0
        } else {
            0.0
        }
    }

    /// Stability index from heart rate, respiratory rate, and temperature
    /// deviations. Fixed legacy weighting; the value object clamps the
    /// result to [0, 100].
    pub fn stability_index(patient: &PatientVector) -> StabilityIndex {
        let hr_term = (patient.heart_rate - STABILITY_HR_REFERENCE).abs()
            / STABILITY_HR_REFERENCE
            * STABILITY_TERM_WEIGHT;
        let rr_term = (patient.respiratory_rate - STABILITY_RR_REFERENCE).abs()
            / STABILITY_RR_REFERENCE
            * STABILITY_TERM_WEIGHT;
        let temp_term = (patient.temperature - STABILITY_TEMP_REFERENCE).abs()
            / STABILITY_TEMP_DIVISOR
            * STABILITY_TERM_WEIGHT;

        StabilityIndex::new(100.0 - (hr_term + rr_term + temp_term))
    }

    /// Computes the full clinical analysis for one patient vector.
    pub fn analyze(patient: &PatientVector) -> ClinicalAnalysis {
        let gcs_total = patient.gcs_total();

        let respiratory_score = Self::respiratory_score(patient.pao2);
        let cardiovascular_score =
            Self::cardiovascular_score(patient.mean_arterial_pressure);
        let neurological_score = Self::neurological_score(gcs_total);
        let renal_score = Self::renal_score(patient.creatinine);

        let severity_score =
            respiratory_score + cardiovascular_score + neurological_score + renal_score;

        // All contributions are additive; the clamp is applied exactly once,
        // after the last term.
        let raw_risk = f64::from(severity_score) * SEVERITY_RISK_MULTIPLIER
            + Self::age_adjustment(patient.age)
            + comorbidity_burden(patient);
        let mortality_risk = RiskPercent::new(raw_risk);

        let respiratory_status = OrganStatus::from_compromised(
            patient.respiratory_rate > 25.0
                || patient.respiratory_rate < 10.0
                || patient.pao2 < 250.0,
        );
        let cardiovascular_status = OrganStatus::from_compromised(
            patient.mean_arterial_pressure < 65.0
                || patient.heart_rate > 120.0
                || patient.heart_rate < 50.0,
        );
        let renal_status = OrganStatus::from_compromised(
            patient.creatinine > 1.5 || patient.blood_urea_nitrogen > 30.0,
        );
        let neurological_status = OrganStatus::from_compromised(gcs_total < 13.0);

        ClinicalAnalysis {
            respiratory_score,
            cardiovascular_score,
            neurological_score,
            renal_score,
            severity_score,
            mortality_risk,
            stability_index: Self::stability_index(patient),
            respiratory_status,
            cardiovascular_status,
            renal_status,
            neurological_status,
            risk_level: RiskLevel::from_composite_score(mortality_risk.value()),
        }
    }
}
