//! PredictMortalityHandler - Command handler for mortality-risk prediction.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::patient::PatientVector;
use crate::domain::scoring::RiskLevel;
use crate::ports::{MortalityPrediction, PredictionError, PredictionProvider};

/// Command to predict mortality risk for one patient.
#[derive(Debug, Clone)]
pub struct PredictMortalityCommand {
    pub patient: PatientVector,
}

/// Result of a prediction request.
#[derive(Debug, Clone)]
pub struct PredictMortalityResult {
    /// The prediction, from the model or the local fallback.
    pub prediction: MortalityPrediction,
    /// Risk level on the mortality-percentage scale.
    pub risk_level: RiskLevel,
}

/// Handler for mortality-risk prediction.
///
/// Validates the vector at the boundary, then delegates to the configured
/// prediction provider. With a failover provider wired in, transport failures
/// surface here only when the whole chain is exhausted.
pub struct PredictMortalityHandler {
    provider: Arc<dyn PredictionProvider>,
}

impl PredictMortalityHandler {
    pub fn new(provider: Arc<dyn PredictionProvider>) -> Self {
        Self { provider }
    }

    pub async fn handle(
        &self,
        command: PredictMortalityCommand,
    ) -> Result<PredictMortalityResult, DomainError> {
        command.patient.validate()?;

        let prediction = self
            .provider
            .predict(&command.patient)
            .await
            .map_err(prediction_error)?;

        let risk_level = RiskLevel::from_mortality_percent(prediction.mortality_risk.value());

        Ok(PredictMortalityResult {
            prediction,
            risk_level,
        })
    }
}

fn prediction_error(err: PredictionError) -> DomainError {
    match err {
        PredictionError::InvalidRequest(message) => {
            DomainError::new(ErrorCode::ValidationFailed, message)
        }
        other => DomainError::new(ErrorCode::PredictionUnavailable, other.to_string()),
    }
}
