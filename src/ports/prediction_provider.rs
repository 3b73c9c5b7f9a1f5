//! Prediction Provider Port - Interface for mortality-risk prediction.
//!
//! Abstracts the source of a mortality-risk percentage so the application
//! layer never couples to a transport. The primary implementation calls the
//! remote statistical model service; a local rule-based estimator stands in
//! when that service is unreachable, and a failover wrapper makes the
//! substitution transparent to downstream consumers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::RiskPercent;
use crate::domain::patient::PatientVector;

/// Port for mortality-risk prediction.
#[async_trait]
pub trait PredictionProvider: Send + Sync {
    /// Produces a mortality-risk estimate for one patient vector.
    async fn predict(
        &self,
        patient: &PatientVector,
    ) -> Result<MortalityPrediction, PredictionError>;

    /// Get provider information (name, endpoint).
    fn provider_info(&self) -> ProviderInfo;
}

/// Where a prediction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionSource {
    /// The remote statistical model.
    Model,
    /// The local rule-based fallback estimator.
    LocalEstimate,
}

/// A mortality-risk prediction, whatever its source.
///
/// The shape is identical for model output and fallback output; only the
/// source tag differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortalityPrediction {
    pub mortality_risk: RiskPercent,
    pub source: PredictionSource,
}

impl MortalityPrediction {
    /// Wraps a model-produced risk percentage.
    pub fn from_model(mortality_risk: RiskPercent) -> Self {
        Self {
            mortality_risk,
            source: PredictionSource::Model,
        }
    }

    /// Wraps a locally estimated risk percentage.
    pub fn from_local_estimate(mortality_risk: RiskPercent) -> Self {
        Self {
            mortality_risk,
            source: PredictionSource::LocalEstimate,
        }
    }
}

/// Provider identity for logging and failover diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    pub name: String,
    pub endpoint: String,
}

impl ProviderInfo {
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
        }
    }
}

/// Errors from a prediction provider.
#[derive(Debug, Clone, Error)]
pub enum PredictionError {
    /// Service reachable but reported the model artifact is not trained yet.
    #[error("model not ready: {message}")]
    ModelNotReady { message: String },

    /// Service is unavailable (5xx or connection refused).
    #[error("prediction service unavailable: {message}")]
    Unavailable { message: String },

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse the service response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Service rejected the request payload.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl PredictionError {
    /// Creates a model-not-ready error.
    pub fn model_not_ready(message: impl Into<String>) -> Self {
        PredictionError::ModelNotReady {
            message: message.into(),
        }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        PredictionError::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        PredictionError::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        PredictionError::Parse(message.into())
    }

    /// Whether a fallback provider should be tried after this error.
    ///
    /// Transport failures and an untrained model are substitutable; a payload
    /// the service rejected would be rejected by any provider.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PredictionError::ModelNotReady { .. }
                | PredictionError::Unavailable { .. }
                | PredictionError::Timeout { .. }
                | PredictionError::Network(_)
                | PredictionError::Parse(_)
        )
    }
}
