//! Local fallback risk estimator.
//!
//! A deliberately cruder heuristic than the composite risk in
//! [`super::engine`], used only when the remote prediction model cannot be
//! reached. The two formulas are independent functions of the same input and
//! may legitimately disagree; they must never be merged.

use super::engine::comorbidity_burden;
use crate::domain::foundation::RiskPercent;
use crate::domain::patient::PatientVector;

/// Age contribution: age/100 scaled to 20 points.
const AGE_DIVISOR: f64 = 100.0;
const AGE_WEIGHT: f64 = 20.0;

/// Vital deviation terms: same reference vitals as the stability index but
/// weighted at 15 points each.
const HR_REFERENCE: f64 = 75.0;
const RR_REFERENCE: f64 = 16.0;
const VITAL_TERM_WEIGHT: f64 = 15.0;

/// Flat renal penalty above the creatinine threshold.
const CREATININE_THRESHOLD: f64 = 1.2;
const CREATININE_PENALTY: f64 = 10.0;

/// Points per missing GCS point below the maximum total of 15.
const GCS_MAX_TOTAL: f64 = 15.0;
const GCS_DEFICIT_WEIGHT: f64 = 3.0;

/// Crude local substitute for the remote mortality prediction.
pub struct FallbackRiskEstimator;

impl FallbackRiskEstimator {
    /// Estimates mortality risk from vitals, labs, and comorbidities alone.
    pub fn estimate(patient: &PatientVector) -> RiskPercent {
        let age_term = patient.age / AGE_DIVISOR * AGE_WEIGHT;
        let hr_term = (patient.heart_rate - HR_REFERENCE).abs() / HR_REFERENCE * VITAL_TERM_WEIGHT;
        let rr_term =
            (patient.respiratory_rate - RR_REFERENCE).abs() / RR_REFERENCE * VITAL_TERM_WEIGHT;
        let renal_term = if patient.creatinine > CREATININE_THRESHOLD {
            CREATININE_PENALTY
        } else {
            0.0
        };
        let gcs_term = (GCS_MAX_TOTAL - patient.gcs_total()) * GCS_DEFICIT_WEIGHT;

        RiskPercent::new(
            age_term + hr_term + rr_term + renal_term + gcs_term + comorbidity_burden(patient),
        )
    }
}
