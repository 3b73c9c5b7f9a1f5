//! Mock Prediction Provider for testing.
//!
//! Configurable mock implementation of the PredictionProvider port, allowing
//! tests to run without a live model service.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockPredictionProvider::new().with_risk(42.5);
//! let prediction = provider.predict(&patient).await?;
//! assert_eq!(prediction.mortality_risk.value(), 42.5);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::foundation::RiskPercent;
use crate::domain::patient::PatientVector;
use crate::ports::{MortalityPrediction, PredictionError, PredictionProvider, ProviderInfo};

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful model prediction with this risk percentage.
    Risk(f64),
    /// Return an error.
    Error(MockError),
}

/// Mock error types for testing failover handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate an untrained model.
    ModelNotReady,
    /// Simulate service unavailability.
    Unavailable { message: String },
    /// Simulate a timeout.
    Timeout { timeout_secs: u64 },
    /// Simulate a rejected payload.
    InvalidRequest { message: String },
}

impl From<MockError> for PredictionError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::ModelNotReady => {
                PredictionError::model_not_ready("Model not found. Please train the model first.")
            }
            MockError::Unavailable { message } => PredictionError::unavailable(message),
            MockError::Timeout { timeout_secs } => PredictionError::Timeout { timeout_secs },
            MockError::InvalidRequest { message } => PredictionError::InvalidRequest(message),
        }
    }
}

/// Mock prediction provider for testing.
#[derive(Debug, Clone, Default)]
pub struct MockPredictionProvider {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<PatientVector>>>,
}

impl MockPredictionProvider {
    /// Creates a new mock provider with no configured responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful prediction.
    pub fn with_risk(self, mortality_risk: f64) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Risk(mortality_risk));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: MockError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Error(error));
        self
    }

    /// Number of predict calls received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The patient vectors this mock was called with.
    pub fn calls(&self) -> Vec<PatientVector> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PredictionProvider for MockPredictionProvider {
    async fn predict(
        &self,
        patient: &PatientVector,
    ) -> Result<MortalityPrediction, PredictionError> {
        self.calls.lock().unwrap().push(patient.clone());

        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(MockResponse::Risk(risk)) => {
                Ok(MortalityPrediction::from_model(RiskPercent::new(risk)))
            }
            Some(MockResponse::Error(err)) => Err(err.into()),
            None => Err(PredictionError::unavailable("no mock response configured")),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", "in-memory")
    }
}
