//! Local Estimate Provider - PredictionProvider backed by the rule-based
//! fallback estimator.
//!
//! Runs entirely in-process and never fails, which makes it the terminal
//! member of a failover chain.

use async_trait::async_trait;

use crate::domain::patient::PatientVector;
use crate::domain::scoring::FallbackRiskEstimator;
use crate::ports::{MortalityPrediction, PredictionError, PredictionProvider, ProviderInfo};

/// Provider that computes the crude local risk estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalEstimateProvider;

impl LocalEstimateProvider {
    /// Creates a new local estimate provider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PredictionProvider for LocalEstimateProvider {
    async fn predict(
        &self,
        patient: &PatientVector,
    ) -> Result<MortalityPrediction, PredictionError> {
        Ok(MortalityPrediction::from_local_estimate(
            FallbackRiskEstimator::estimate(patient),
        ))
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("local-estimator", "in-process")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::PredictionSource;

    #[tokio::test]
    async fn local_provider_never_fails() {
        let provider = LocalEstimateProvider::new();
        let prediction = provider
            .predict(&PatientVector::baseline())
            .await
            .unwrap();

        assert_eq!(prediction.source, PredictionSource::LocalEstimate);
        assert!((0.0..=95.0).contains(&prediction.mortality_risk.value()));
    }

    #[tokio::test]
    async fn local_provider_matches_the_domain_estimator() {
        let patient = PatientVector::baseline();
        let prediction = LocalEstimateProvider::new().predict(&patient).await.unwrap();

        assert_eq!(
            prediction.mortality_risk,
            FallbackRiskEstimator::estimate(&patient)
        );
    }
}
