//! HTTP DTOs (Data Transfer Objects) for the scoring API.
//!
//! These types define the JSON request/response structure and serve as the
//! boundary between HTTP and the application layer. Every request field is
//! required; a missing field is a contract violation and rejects the request
//! rather than defaulting.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;
use crate::domain::patient::PatientVector;
use crate::domain::scoring::{ClinicalAnalysis, OrganStatus, RiskLevel};
use crate::ports::{MortalityPrediction, PredictionSource};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A patient vector as submitted by input controls.
///
/// Comorbidity flags arrive as 0/1 numbers (slider positions) and are
/// converted to booleans during validation.
#[derive(Debug, Clone, Deserialize)]
pub struct PatientVectorRequest {
    pub age: f64,
    pub bmi: f64,
    pub heart_rate: f64,
    pub respiratory_rate: f64,
    pub mean_arterial_pressure: f64,
    pub temperature: f64,
    pub gcs_eyes: f64,
    pub gcs_motor: f64,
    pub gcs_verbal: f64,
    pub creatinine: f64,
    pub blood_urea_nitrogen: f64,
    pub sodium: f64,
    pub albumin: f64,
    pub wbcs: f64,
    pub hematocrit: f64,
    pub pao2: f64,
    pub blood_ph: f64,
    pub aids: f64,
    pub cirrhosis: f64,
    pub diabetes: f64,
    pub hepatic_failure: f64,
    pub immunosuppression: f64,
}

impl TryFrom<PatientVectorRequest> for PatientVector {
    type Error = ValidationError;

    fn try_from(request: PatientVectorRequest) -> Result<Self, Self::Error> {
        Ok(PatientVector {
            age: request.age,
            bmi: request.bmi,
            heart_rate: request.heart_rate,
            respiratory_rate: request.respiratory_rate,
            mean_arterial_pressure: request.mean_arterial_pressure,
            temperature: request.temperature,
            gcs_eyes: request.gcs_eyes,
            gcs_motor: request.gcs_motor,
            gcs_verbal: request.gcs_verbal,
            creatinine: request.creatinine,
            blood_urea_nitrogen: request.blood_urea_nitrogen,
            sodium: request.sodium,
            albumin: request.albumin,
            wbcs: request.wbcs,
            hematocrit: request.hematocrit,
            pao2: request.pao2,
            blood_ph: request.blood_ph,
            aids: comorbidity_flag("aids", request.aids)?,
            cirrhosis: comorbidity_flag("cirrhosis", request.cirrhosis)?,
            diabetes: comorbidity_flag("diabetes", request.diabetes)?,
            hepatic_failure: comorbidity_flag("hepatic_failure", request.hepatic_failure)?,
            immunosuppression: comorbidity_flag(
                "immunosuppression",
                request.immunosuppression,
            )?,
        })
    }
}

/// Converts a 0/1 wire value into a boolean comorbidity flag.
fn comorbidity_flag(field: &str, value: f64) -> Result<bool, ValidationError> {
    if value == 0.0 {
        Ok(false)
    } else if value == 1.0 {
        Ok(true)
    } else {
        Err(ValidationError::invalid_format(
            field,
            "comorbidity flag must be 0 or 1",
        ))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a mortality prediction.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    /// Predicted mortality risk in percent, rounded to two decimals.
    pub mortality_risk: f64,
    /// Which provider answered.
    pub source: PredictionSource,
    /// Risk level on the mortality-percentage scale.
    pub risk_level: RiskLevel,
}

impl PredictionResponse {
    pub fn new(prediction: &MortalityPrediction, risk_level: RiskLevel) -> Self {
        Self {
            mortality_risk: round2(prediction.mortality_risk.value()),
            source: prediction.source,
            risk_level,
        }
    }
}

/// Full clinical analysis for one patient.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub sofa_score: u8,
    pub respiratory_score: u8,
    pub cardiovascular_score: u8,
    pub neurological_score: u8,
    pub renal_score: u8,
    pub mortality_risk_percentage: f64,
    pub stability_index: f64,
    pub risk_level: RiskLevel,
    pub respiratory_status: OrganStatus,
    pub cardiovascular_status: OrganStatus,
    pub renal_status: OrganStatus,
    pub neurological_status: OrganStatus,
}

impl From<ClinicalAnalysis> for AnalysisResponse {
    fn from(analysis: ClinicalAnalysis) -> Self {
        Self {
            sofa_score: analysis.severity_score,
            respiratory_score: analysis.respiratory_score,
            cardiovascular_score: analysis.cardiovascular_score,
            neurological_score: analysis.neurological_score,
            renal_score: analysis.renal_score,
            mortality_risk_percentage: round1(analysis.mortality_risk.value()),
            stability_index: round1(analysis.stability_index.value()),
            risk_level: analysis.risk_level,
            respiratory_status: analysis.respiratory_status,
            cardiovascular_status: analysis.cardiovascular_status,
            renal_status: analysis.renal_status,
            neurological_status: analysis.neurological_status,
        }
    }
}

/// Liveness payload.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            version: env!("CARGO_PKG_VERSION"),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Standard error envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn baseline_request() -> serde_json::Value {
        json!({
            "age": 65, "bmi": 25, "heart_rate": 80, "respiratory_rate": 16,
            "mean_arterial_pressure": 90, "temperature": 37,
            "gcs_eyes": 4, "gcs_motor": 6, "gcs_verbal": 5,
            "creatinine": 1.0, "blood_urea_nitrogen": 20, "sodium": 140,
            "albumin": 4.0, "wbcs": 8.0, "hematocrit": 40, "pao2": 95,
            "blood_ph": 7.4, "aids": 0, "cirrhosis": 0, "diabetes": 0,
            "hepatic_failure": 0, "immunosuppression": 0
        })
    }

    #[test]
    fn request_converts_to_patient_vector() {
        let request: PatientVectorRequest =
            serde_json::from_value(baseline_request()).unwrap();
        let patient = PatientVector::try_from(request).unwrap();
        assert_eq!(patient, PatientVector::baseline());
    }

    #[test]
    fn request_rejects_fractional_comorbidity_flag() {
        let mut body = baseline_request();
        body["diabetes"] = json!(0.5);

        let request: PatientVectorRequest = serde_json::from_value(body).unwrap();
        let err = PatientVector::try_from(request).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn request_accepts_flag_set_to_one() {
        let mut body = baseline_request();
        body["hepatic_failure"] = json!(1);

        let request: PatientVectorRequest = serde_json::from_value(body).unwrap();
        let patient = PatientVector::try_from(request).unwrap();
        assert!(patient.hepatic_failure);
    }

    #[test]
    fn request_with_missing_field_fails_to_deserialize() {
        let mut body = baseline_request();
        body.as_object_mut().unwrap().remove("pao2");

        assert!(serde_json::from_value::<PatientVectorRequest>(body).is_err());
    }

    #[test]
    fn prediction_response_rounds_to_two_decimals() {
        use crate::domain::foundation::RiskPercent;

        let prediction = MortalityPrediction::from_model(RiskPercent::new(23.456));
        let response = PredictionResponse::new(&prediction, RiskLevel::Moderate);
        assert_eq!(response.mortality_risk, 23.46);
    }

    #[test]
    fn analysis_response_mirrors_the_analysis() {
        use crate::domain::scoring::ScoringEngine;

        let analysis = ScoringEngine::analyze(&PatientVector::baseline());
        let response = AnalysisResponse::from(analysis);

        assert_eq!(response.sofa_score, 3);
        assert_eq!(response.mortality_risk_percentage, 25.0);
        assert_eq!(response.risk_level, RiskLevel::Moderate);
        assert_eq!(response.respiratory_status, OrganStatus::Compromised);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["risk_level"], "Moderate");
        assert_eq!(json["neurological_status"], "Normal");
    }
}
