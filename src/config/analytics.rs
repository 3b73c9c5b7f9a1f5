//! Analytics service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for the dataset analytics service
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    /// Base URL of the analytics service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. Statistics are recomputed server-side,
    /// so the default is generous.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl AnalyticsConfig {
    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the analytics service configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidAnalyticsUrl);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}
