//! Prediction Adapters.
//!
//! Implementations of the PredictionProvider port.
//!
//! ## Available Adapters
//!
//! - `RemotePredictionProvider` - HTTP client for the statistical model service
//! - `LocalEstimateProvider` - In-process rule-based fallback estimator
//! - `FailoverPredictionProvider` - Wrapper with automatic fallback on failure
//! - `MockPredictionProvider` - Configurable mock for testing

mod failover_provider;
mod local_provider;
mod mock_provider;
mod remote_provider;

pub use failover_provider::{FailoverPredictionProvider, NoFallback};
pub use local_provider::LocalEstimateProvider;
pub use mock_provider::{MockError, MockPredictionProvider, MockResponse};
pub use remote_provider::{RemotePredictionConfig, RemotePredictionProvider};
