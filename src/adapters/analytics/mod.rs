//! Analytics Adapters.
//!
//! Implementations of the AnalyticsProvider port.

mod remote_client;

pub use remote_client::{AnalyticsClientConfig, RemoteAnalyticsClient};
