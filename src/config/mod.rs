//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `ICU_SENTINEL` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use icu_sentinel::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod analytics;
mod error;
mod prediction;
mod server;

pub use analytics::AnalyticsConfig;
pub use error::{ConfigError, ValidationError};
pub use prediction::PredictionConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the ICU Sentinel service.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Remote prediction service configuration
    #[serde(default)]
    pub prediction: PredictionConfig,

    /// Analytics service configuration
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ICU_SENTINEL` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ICU_SENTINEL__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `ICU_SENTINEL__PREDICTION__BASE_URL=...` -> `prediction.base_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ICU_SENTINEL")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.prediction.validate()?;
        self.analytics.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("ICU_SENTINEL__SERVER__PORT");
        env::remove_var("ICU_SENTINEL__SERVER__ENVIRONMENT");
        env::remove_var("ICU_SENTINEL__PREDICTION__BASE_URL");
        env::remove_var("ICU_SENTINEL__ANALYTICS__TIMEOUT_SECS");
    }

    #[test]
    fn loads_defaults_with_no_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = AppConfig::load().expect("defaults should load");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.prediction.base_url, "http://localhost:5001");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reads_nested_values_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ICU_SENTINEL__SERVER__PORT", "8080");
        env::set_var(
            "ICU_SENTINEL__PREDICTION__BASE_URL",
            "http://model.internal:9000",
        );

        let config = AppConfig::load().expect("config should load");
        clear_env();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.prediction.base_url, "http://model.internal:9000");
    }

    #[test]
    fn environment_parses_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ICU_SENTINEL__SERVER__ENVIRONMENT", "production");

        let config = AppConfig::load().expect("config should load");
        clear_env();

        assert!(config.is_production());
    }
}
