//! Remote Prediction Provider - Client for the statistical model service.
//!
//! The service accepts the patient vector as a flat JSON object (comorbidity
//! flags as 0/1 numbers, matching the model's feature-order contract) on
//! `POST /predict` and returns `{"mortality_risk": <percentage>}`.
//!
//! # Configuration
//!
//! ```ignore
//! let config = RemotePredictionConfig::new("http://localhost:5000")
//!     .with_timeout(Duration::from_secs(20));
//!
//! let provider = RemotePredictionProvider::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::domain::foundation::RiskPercent;
use crate::domain::patient::PatientVector;
use crate::ports::{MortalityPrediction, PredictionError, PredictionProvider, ProviderInfo};

/// Configuration for the remote prediction provider.
#[derive(Debug, Clone)]
pub struct RemotePredictionConfig {
    /// Base URL of the model service.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl RemotePredictionConfig {
    /// Creates a new configuration for the given service URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(20),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Remote model service provider implementation.
pub struct RemotePredictionProvider {
    config: RemotePredictionConfig,
    client: Client,
}

impl RemotePredictionProvider {
    /// Creates a new provider with the given configuration.
    pub fn new(config: RemotePredictionConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the predict endpoint URL.
    fn predict_url(&self) -> String {
        format!("{}/predict", self.config.base_url.trim_end_matches('/'))
    }

    /// Sends the prediction request.
    async fn send_request(&self, patient: &PatientVector) -> Result<Response, PredictionError> {
        let payload = PredictRequest::from(patient);

        self.client
            .post(self.predict_url())
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PredictionError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    PredictionError::unavailable(format!("Connection failed: {}", e))
                } else {
                    PredictionError::network(e.to_string())
                }
            })
    }

    /// Maps non-success statuses onto prediction errors.
    async fn handle_response_status(
        &self,
        response: Response,
    ) -> Result<Response, PredictionError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        let message = parse_error_message(&error_body).unwrap_or(error_body);

        match status.as_u16() {
            400 => Err(PredictionError::InvalidRequest(message)),
            500..=599 => {
                // An untrained model artifact is reported as a 5xx with an
                // explanatory error; it is substitutable, not fatal.
                if message.to_ascii_lowercase().contains("train") {
                    Err(PredictionError::model_not_ready(message))
                } else {
                    Err(PredictionError::unavailable(format!(
                        "Server error {}: {}",
                        status, message
                    )))
                }
            }
            _ => Err(PredictionError::network(format!(
                "Unexpected status {}: {}",
                status, message
            ))),
        }
    }
}

#[async_trait]
impl PredictionProvider for RemotePredictionProvider {
    async fn predict(
        &self,
        patient: &PatientVector,
    ) -> Result<MortalityPrediction, PredictionError> {
        let response = self.send_request(patient).await?;
        let response = self.handle_response_status(response).await?;

        let body: PredictResponse = response
            .json()
            .await
            .map_err(|e| PredictionError::parse(format!("Failed to parse response: {}", e)))?;

        debug!(mortality_risk = body.mortality_risk, "model prediction received");

        Ok(MortalityPrediction::from_model(RiskPercent::new(
            body.mortality_risk,
        )))
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("model-service", &self.config.base_url)
    }
}

/// Extracts the `error` field from a JSON error body, if present.
fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("error")?
        .as_str()
        .map(str::to_string)
}

/// Wire request: the patient vector with comorbidity flags as 0/1 numbers.
#[derive(Debug, Serialize)]
struct PredictRequest {
    age: f64,
    bmi: f64,
    heart_rate: f64,
    respiratory_rate: f64,
    mean_arterial_pressure: f64,
    temperature: f64,
    gcs_eyes: f64,
    gcs_motor: f64,
    gcs_verbal: f64,
    creatinine: f64,
    blood_urea_nitrogen: f64,
    sodium: f64,
    albumin: f64,
    wbcs: f64,
    hematocrit: f64,
    pao2: f64,
    blood_ph: f64,
    aids: u8,
    cirrhosis: u8,
    diabetes: u8,
    hepatic_failure: u8,
    immunosuppression: u8,
}

impl From<&PatientVector> for PredictRequest {
    fn from(patient: &PatientVector) -> Self {
        Self {
            age: patient.age,
            bmi: patient.bmi,
            heart_rate: patient.heart_rate,
            respiratory_rate: patient.respiratory_rate,
            mean_arterial_pressure: patient.mean_arterial_pressure,
            temperature: patient.temperature,
            gcs_eyes: patient.gcs_eyes,
            gcs_motor: patient.gcs_motor,
            gcs_verbal: patient.gcs_verbal,
            creatinine: patient.creatinine,
            blood_urea_nitrogen: patient.blood_urea_nitrogen,
            sodium: patient.sodium,
            albumin: patient.albumin,
            wbcs: patient.wbcs,
            hematocrit: patient.hematocrit,
            pao2: patient.pao2,
            blood_ph: patient.blood_ph,
            aids: patient.aids.into(),
            cirrhosis: patient.cirrhosis.into(),
            diabetes: patient.diabetes.into(),
            hepatic_failure: patient.hepatic_failure.into(),
            immunosuppression: patient.immunosuppression.into(),
        }
    }
}

/// Wire response from the model service.
#[derive(Debug, Deserialize)]
struct PredictResponse {
    mortality_risk: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_url_tolerates_trailing_slash() {
        let provider =
            RemotePredictionProvider::new(RemotePredictionConfig::new("http://localhost:5000/"));
        assert_eq!(provider.predict_url(), "http://localhost:5000/predict");
    }

    #[test]
    fn wire_request_encodes_flags_as_numbers() {
        let mut patient = PatientVector::baseline();
        patient.cirrhosis = true;

        let json = serde_json::to_value(PredictRequest::from(&patient)).unwrap();
        assert_eq!(json["cirrhosis"], 1);
        assert_eq!(json["aids"], 0);
        assert_eq!(json["age"], 65.0);
    }

    #[test]
    fn parse_error_message_reads_error_field() {
        let body = r#"{"error": "Model not found. Please train the model first."}"#;
        assert_eq!(
            parse_error_message(body).as_deref(),
            Some("Model not found. Please train the model first.")
        );
        assert_eq!(parse_error_message("not json"), None);
    }

    #[test]
    fn wire_response_parses_mortality_risk() {
        let body: PredictResponse = serde_json::from_str(r#"{"mortality_risk": 23.55}"#).unwrap();
        assert_eq!(body.mortality_risk, 23.55);
    }

    #[test]
    fn provider_info_names_the_service() {
        let provider =
            RemotePredictionProvider::new(RemotePredictionConfig::new("http://localhost:5000"));
        assert_eq!(provider.provider_info().name, "model-service");
    }
}
