//! Failover Prediction Provider - Wrapper with automatic fallback.
//!
//! When the primary provider fails with a substitutable error (service down,
//! timeout, untrained model), the fallback provider answers instead. The
//! substitution is transparent: callers receive the same prediction shape
//! either way, with only the source tag revealing which provider answered.
//!
//! # Example
//!
//! ```ignore
//! let primary = RemotePredictionProvider::new(config);
//! let fallback = LocalEstimateProvider::new();
//!
//! let provider = FailoverPredictionProvider::new(primary)
//!     .with_fallback(fallback);
//! ```

use async_trait::async_trait;
use tracing::warn;

use crate::domain::patient::PatientVector;
use crate::ports::{MortalityPrediction, PredictionError, PredictionProvider, ProviderInfo};

/// Prediction provider wrapper with automatic failover support.
///
/// Wraps a primary provider and optionally a fallback provider. On
/// substitutable failures, automatically tries the fallback.
pub struct FailoverPredictionProvider<P: PredictionProvider, F: PredictionProvider = NoFallback> {
    primary: P,
    fallback: Option<F>,
}

/// Marker type for when no fallback is configured.
pub struct NoFallback;

#[async_trait]
impl PredictionProvider for NoFallback {
    async fn predict(&self, _: &PatientVector) -> Result<MortalityPrediction, PredictionError> {
        unreachable!("NoFallback should never be called")
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("none", "none")
    }
}

impl<P: PredictionProvider> FailoverPredictionProvider<P, NoFallback> {
    /// Creates a new failover provider with only a primary provider.
    pub fn new(primary: P) -> Self {
        Self {
            primary,
            fallback: None,
        }
    }

    /// Adds a fallback provider.
    pub fn with_fallback<F: PredictionProvider>(
        self,
        fallback: F,
    ) -> FailoverPredictionProvider<P, F> {
        FailoverPredictionProvider {
            primary: self.primary,
            fallback: Some(fallback),
        }
    }
}

#[async_trait]
impl<P, F> PredictionProvider for FailoverPredictionProvider<P, F>
where
    P: PredictionProvider + 'static,
    F: PredictionProvider + 'static,
{
    async fn predict(
        &self,
        patient: &PatientVector,
    ) -> Result<MortalityPrediction, PredictionError> {
        match self.primary.predict(patient).await {
            Ok(prediction) => Ok(prediction),
            Err(err) if err.is_retryable() && self.fallback.is_some() => {
                let fallback = self.fallback.as_ref().unwrap();
                let request_id = uuid::Uuid::new_v4();

                warn!(
                    %request_id,
                    primary = %self.primary.provider_info().name,
                    fallback = %fallback.provider_info().name,
                    reason = %err,
                    "primary prediction provider failed, substituting fallback"
                );

                fallback.predict(patient).await
            }
            Err(err) => Err(err),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        // Report primary provider's info
        self.primary.provider_info()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::prediction::{
        LocalEstimateProvider, MockError, MockPredictionProvider,
    };
    use crate::ports::PredictionSource;

    fn patient() -> PatientVector {
        PatientVector::baseline()
    }

    #[tokio::test]
    async fn primary_success_no_fallback_used() {
        let primary = MockPredictionProvider::new().with_risk(33.0);
        let fallback = MockPredictionProvider::new().with_risk(99.0);

        let provider = FailoverPredictionProvider::new(primary)
            .with_fallback(fallback.clone());

        let prediction = provider.predict(&patient()).await.unwrap();

        assert_eq!(prediction.mortality_risk.value(), 33.0);
        assert_eq!(fallback.call_count(), 0);
    }

    #[tokio::test]
    async fn primary_unavailable_uses_fallback() {
        let primary = MockPredictionProvider::new().with_error(MockError::Unavailable {
            message: "Service down".to_string(),
        });
        let fallback = MockPredictionProvider::new().with_risk(28.0);

        let provider = FailoverPredictionProvider::new(primary)
            .with_fallback(fallback.clone());

        let prediction = provider.predict(&patient()).await.unwrap();

        assert_eq!(prediction.mortality_risk.value(), 28.0);
        assert_eq!(fallback.call_count(), 1);
    }

    #[tokio::test]
    async fn untrained_model_uses_fallback() {
        let primary = MockPredictionProvider::new().with_error(MockError::ModelNotReady);
        let fallback = MockPredictionProvider::new().with_risk(17.0);

        let provider = FailoverPredictionProvider::new(primary).with_fallback(fallback);

        let prediction = provider.predict(&patient()).await.unwrap();
        assert_eq!(prediction.mortality_risk.value(), 17.0);
    }

    #[tokio::test]
    async fn non_substitutable_error_is_returned() {
        let primary = MockPredictionProvider::new().with_error(MockError::InvalidRequest {
            message: "bad payload".to_string(),
        });
        let fallback = MockPredictionProvider::new().with_risk(28.0);

        let provider = FailoverPredictionProvider::new(primary)
            .with_fallback(fallback.clone());

        let result = provider.predict(&patient()).await;

        assert!(matches!(
            result.unwrap_err(),
            PredictionError::InvalidRequest(_)
        ));
        assert_eq!(fallback.call_count(), 0);
    }

    #[tokio::test]
    async fn no_fallback_configured_returns_error() {
        let primary = MockPredictionProvider::new().with_error(MockError::Timeout {
            timeout_secs: 20,
        });

        let provider = FailoverPredictionProvider::new(primary);

        assert!(provider.predict(&patient()).await.is_err());
    }

    #[tokio::test]
    async fn fallback_also_fails_returns_fallback_error() {
        let primary = MockPredictionProvider::new().with_error(MockError::Unavailable {
            message: "down".to_string(),
        });
        let fallback = MockPredictionProvider::new();

        let provider = FailoverPredictionProvider::new(primary).with_fallback(fallback);

        assert!(provider.predict(&patient()).await.is_err());
    }

    #[tokio::test]
    async fn substitution_is_transparent_apart_from_the_source_tag() {
        let primary = MockPredictionProvider::new().with_error(MockError::Unavailable {
            message: "down".to_string(),
        });

        let provider =
            FailoverPredictionProvider::new(primary).with_fallback(LocalEstimateProvider::new());

        let prediction = provider.predict(&patient()).await.unwrap();
        assert_eq!(prediction.source, PredictionSource::LocalEstimate);
        assert!((0.0..=95.0).contains(&prediction.mortality_risk.value()));
    }
}
