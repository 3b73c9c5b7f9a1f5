//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `prediction` - Prediction providers (remote model, local estimator, failover)
//! - `analytics` - Dataset statistics client
//! - `http` - Inbound REST API

pub mod analytics;
pub mod http;
pub mod prediction;
