//! Analytics Provider Port - Interface for dataset-level statistics.
//!
//! The analytics service supplies pre-aggregated cohort statistics (age,
//! SOFA, and GCS distributions, feature importances, comorbidity impact
//! rates) consumed read-only for display. The engine neither computes nor
//! validates these numbers.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port for retrieving dataset-level statistics.
#[async_trait]
pub trait AnalyticsProvider: Send + Sync {
    /// Fetches the dataset overview used by the cohort charts.
    async fn dataset_overview(&self) -> Result<DatasetOverview, AnalyticsError>;
}

/// Patient counts and mortality for one band of a distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandMortality {
    /// Band label, e.g. "60-69" or "SOFA 4-6".
    pub band: String,
    /// Patients in the band.
    pub count: u64,
    /// Deaths in the band.
    pub mortality: u64,
    /// Mortality rate in percent.
    pub mortality_rate: f64,
}

/// Relative importance of one model feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
}

/// Share of the cohort in one predicted-risk band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskBand {
    pub name: String,
    pub value: f64,
}

/// Mortality impact of one comorbidity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComorbidityImpact {
    /// Mortality rate in percent among patients carrying the comorbidity.
    pub rate: f64,
}

/// Pre-aggregated dataset statistics for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetOverview {
    pub age_distribution: Vec<BandMortality>,
    pub sofa_distribution: Vec<BandMortality>,
    pub gcs_mortality: Vec<BandMortality>,
    pub feature_importance: Vec<FeatureImportance>,
    pub risk_distribution: Vec<RiskBand>,
    pub comorbidity_impact: BTreeMap<String, ComorbidityImpact>,
}

/// Errors from the analytics provider.
#[derive(Debug, Clone, Error)]
pub enum AnalyticsError {
    /// Service is unavailable.
    #[error("analytics service unavailable: {message}")]
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
}

impl AnalyticsError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        AnalyticsError::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        AnalyticsError::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        AnalyticsError::Parse(message.into())
    }
}
