//! Property tests for the scoring engine invariants.
//!
//! Exercises the clamp and monotonicity guarantees over the full space of
//! valid patient vectors.

use proptest::prelude::*;

use icu_sentinel::domain::patient::PatientVector;
use icu_sentinel::domain::scoring::{FallbackRiskEstimator, RiskLevel, ScoringEngine};

/// Strategy producing patient vectors within the canonical clinical bounds.
fn arb_patient() -> impl Strategy<Value = PatientVector> {
    let vitals = (
        18.0..=100.0f64,  // age
        12.0..=50.0f64,   // bmi
        30.0..=200.0f64,  // heart_rate
        4.0..=60.0f64,    // respiratory_rate
        40.0..=160.0f64,  // mean_arterial_pressure
        33.0..=42.0f64,   // temperature
    );
    let neuro = (1u8..=4, 1u8..=6, 1u8..=5);
    let labs = (
        0.2..=15.0f64,   // creatinine
        1.0..=150.0f64,  // blood_urea_nitrogen
        110.0..=170.0f64, // sodium
        1.0..=7.0f64,    // albumin
        0.0..=50.0f64,   // wbcs
        15.0..=60.0f64,  // hematocrit
        30.0..=500.0f64, // pao2
        6.8..=7.8f64,    // blood_ph
    );
    let flags = (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    );

    (vitals, neuro, labs, flags).prop_map(
        |(
            (age, bmi, heart_rate, respiratory_rate, mean_arterial_pressure, temperature),
            (gcs_eyes, gcs_motor, gcs_verbal),
            (creatinine, blood_urea_nitrogen, sodium, albumin, wbcs, hematocrit, pao2, blood_ph),
            (aids, cirrhosis, diabetes, hepatic_failure, immunosuppression),
        )| PatientVector {
            age,
            bmi,
            heart_rate,
            respiratory_rate,
            mean_arterial_pressure,
            temperature,
            gcs_eyes: f64::from(gcs_eyes),
            gcs_motor: f64::from(gcs_motor),
            gcs_verbal: f64::from(gcs_verbal),
            creatinine,
            blood_urea_nitrogen,
            sodium,
            albumin,
            wbcs,
            hematocrit,
            pao2,
            blood_ph,
            aids,
            cirrhosis,
            diabetes,
            hepatic_failure,
            immunosuppression,
        },
    )
}

proptest! {
    #[test]
    fn composite_risk_stays_within_0_and_95(patient in arb_patient()) {
        let analysis = ScoringEngine::analyze(&patient);
        prop_assert!((0.0..=95.0).contains(&analysis.mortality_risk.value()));
    }

    #[test]
    fn stability_index_stays_within_0_and_100(patient in arb_patient()) {
        let analysis = ScoringEngine::analyze(&patient);
        prop_assert!((0.0..=100.0).contains(&analysis.stability_index.value()));
    }

    #[test]
    fn fallback_estimate_stays_within_0_and_95(patient in arb_patient()) {
        let estimate = FallbackRiskEstimator::estimate(&patient);
        prop_assert!((0.0..=95.0).contains(&estimate.value()));
    }

    #[test]
    fn severity_is_always_the_sum_of_subscores(patient in arb_patient()) {
        let analysis = ScoringEngine::analyze(&patient);
        let sum = analysis.respiratory_score
            + analysis.cardiovascular_score
            + analysis.neurological_score
            + analysis.renal_score;
        prop_assert_eq!(analysis.severity_score, sum);
    }

    #[test]
    fn every_subscore_stays_within_0_and_4(patient in arb_patient()) {
        let analysis = ScoringEngine::analyze(&patient);
        prop_assert!(analysis.respiratory_score <= 4);
        prop_assert!(analysis.cardiovascular_score <= 4);
        prop_assert!(analysis.neurological_score <= 4);
        prop_assert!(analysis.renal_score <= 4);
    }

    #[test]
    fn percentage_scale_classification_is_monotonic(a in 0.0..=95.0f64, b in 0.0..=95.0f64) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            RiskLevel::from_mortality_percent(low) <= RiskLevel::from_mortality_percent(high)
        );
    }

    #[test]
    fn score_scale_classification_is_monotonic(a in 0.0..=95.0f64, b in 0.0..=95.0f64) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            RiskLevel::from_composite_score(low) <= RiskLevel::from_composite_score(high)
        );
    }

    #[test]
    fn analysis_is_deterministic(patient in arb_patient()) {
        prop_assert_eq!(
            ScoringEngine::analyze(&patient),
            ScoringEngine::analyze(&patient)
        );
    }

    #[test]
    fn full_gcs_total_scores_zero(patient in arb_patient()) {
        let mut patient = patient;
        patient.gcs_eyes = 4.0;
        patient.gcs_motor = 6.0;
        patient.gcs_verbal = 5.0;

        let analysis = ScoringEngine::analyze(&patient);
        prop_assert_eq!(analysis.neurological_score, 0);
    }
}
