//! Remote Analytics Client - HTTP client for the dataset statistics service.
//!
//! The analytics service serializes every scalar as a one-element array
//! (R-style column vectors), so each wire field is unwrapped through
//! [`flatten_scalar`] before it reaches the port types. That normalization
//! lives here, at the client boundary, and nowhere else.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;
use tracing::debug;

use crate::ports::{
    AnalyticsError, AnalyticsProvider, BandMortality, ComorbidityImpact, DatasetOverview,
    FeatureImportance, RiskBand,
};

/// Configuration for the analytics client.
#[derive(Debug, Clone)]
pub struct AnalyticsClientConfig {
    /// Base URL of the analytics service.
    pub base_url: String,
    /// Request timeout. Statistics are recomputed server-side, so this is
    /// generous by default.
    pub timeout: Duration,
}

impl AnalyticsClientConfig {
    /// Creates a new configuration for the given service URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP implementation of the AnalyticsProvider port.
pub struct RemoteAnalyticsClient {
    config: AnalyticsClientConfig,
    client: Client,
}

impl RemoteAnalyticsClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: AnalyticsClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the chart-data endpoint URL.
    fn chart_data_url(&self) -> String {
        format!(
            "{}/js-chart-data",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl AnalyticsProvider for RemoteAnalyticsClient {
    async fn dataset_overview(&self) -> Result<DatasetOverview, AnalyticsError> {
        let response = self
            .client
            .get(self.chart_data_url())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AnalyticsError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    AnalyticsError::unavailable(format!("Connection failed: {}", e))
                } else {
                    AnalyticsError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalyticsError::unavailable(format!(
                "Server error {}: {}",
                status, body
            )));
        }

        let body: ChartDataResponse = response
            .json()
            .await
            .map_err(|e| AnalyticsError::parse(format!("Failed to parse response: {}", e)))?;

        if !body.success {
            return Err(AnalyticsError::unavailable(
                body.error.unwrap_or_else(|| "analytics request failed".to_string()),
            ));
        }

        debug!(
            age_bands = body.age_distribution.len(),
            features = body.feature_importance.len(),
            "dataset overview received"
        );

        Ok(body.into_overview())
    }
}

/// Unwraps a value that may arrive as a bare scalar or a one-element array.
fn flatten_scalar<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        One(T),
        Many(Vec<T>),
    }

    match OneOrMany::<T>::deserialize(deserializer)? {
        OneOrMany::One(value) => Ok(value),
        OneOrMany::Many(values) => values
            .into_iter()
            .next()
            .ok_or_else(|| serde::de::Error::custom("expected at least one element")),
    }
}

/// Wire payload from the analytics service.
#[derive(Debug, Deserialize)]
struct ChartDataResponse {
    #[serde(default, deserialize_with = "flatten_scalar")]
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    age_distribution: Vec<WireAgeBand>,
    #[serde(default)]
    sofa_distribution: Vec<WireSofaBand>,
    #[serde(default)]
    gcs_mortality: Vec<WireGcsBand>,
    #[serde(default)]
    feature_importance: Vec<WireFeatureImportance>,
    #[serde(default)]
    risk_distribution: Vec<WireRiskBand>,
    #[serde(default)]
    comorbidity_impact: HashMap<String, WireComorbidityImpact>,
}

impl ChartDataResponse {
    fn into_overview(self) -> DatasetOverview {
        DatasetOverview {
            age_distribution: self
                .age_distribution
                .into_iter()
                .map(|b| band(b.age_group, b.count, b.mortality, b.mortality_rate))
                .collect(),
            sofa_distribution: self
                .sofa_distribution
                .into_iter()
                .map(|b| band(b.sofa_group, b.count, b.mortality, b.mortality_rate))
                .collect(),
            gcs_mortality: self
                .gcs_mortality
                .into_iter()
                .map(|b| band(b.gcs_group, b.count, b.mortality, b.mortality_rate))
                .collect(),
            feature_importance: self
                .feature_importance
                .into_iter()
                .map(|f| FeatureImportance {
                    feature: f.feature,
                    importance: f.importance,
                })
                .collect(),
            risk_distribution: self
                .risk_distribution
                .into_iter()
                .map(|r| RiskBand {
                    name: r.name,
                    value: r.value,
                })
                .collect(),
            comorbidity_impact: self
                .comorbidity_impact
                .into_iter()
                .map(|(name, impact)| (name, ComorbidityImpact { rate: impact.rate }))
                .collect::<BTreeMap<_, _>>(),
        }
    }
}

/// Counts arrive as R doubles; round to the integer they represent.
fn band(label: String, count: f64, mortality: f64, mortality_rate: f64) -> BandMortality {
    BandMortality {
        band: label,
        count: count.round() as u64,
        mortality: mortality.round() as u64,
        mortality_rate,
    }
}

#[derive(Debug, Deserialize)]
struct WireAgeBand {
    #[serde(deserialize_with = "flatten_scalar")]
    age_group: String,
    #[serde(deserialize_with = "flatten_scalar")]
    count: f64,
    #[serde(deserialize_with = "flatten_scalar")]
    mortality: f64,
    #[serde(deserialize_with = "flatten_scalar")]
    mortality_rate: f64,
}

#[derive(Debug, Deserialize)]
struct WireSofaBand {
    #[serde(deserialize_with = "flatten_scalar")]
    sofa_group: String,
    #[serde(deserialize_with = "flatten_scalar")]
    count: f64,
    #[serde(deserialize_with = "flatten_scalar")]
    mortality: f64,
    #[serde(deserialize_with = "flatten_scalar")]
    mortality_rate: f64,
}

#[derive(Debug, Deserialize)]
struct WireGcsBand {
    #[serde(deserialize_with = "flatten_scalar")]
    gcs_group: String,
    #[serde(deserialize_with = "flatten_scalar")]
    count: f64,
    #[serde(deserialize_with = "flatten_scalar")]
    mortality: f64,
    #[serde(deserialize_with = "flatten_scalar")]
    mortality_rate: f64,
}

#[derive(Debug, Deserialize)]
struct WireFeatureImportance {
    #[serde(deserialize_with = "flatten_scalar")]
    feature: String,
    #[serde(deserialize_with = "flatten_scalar")]
    importance: f64,
}

#[derive(Debug, Deserialize)]
struct WireRiskBand {
    #[serde(deserialize_with = "flatten_scalar")]
    name: String,
    #[serde(deserialize_with = "flatten_scalar")]
    value: f64,
}

#[derive(Debug, Deserialize)]
struct WireComorbidityImpact {
    #[serde(deserialize_with = "flatten_scalar")]
    rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_array_wrapped_scalars() {
        let json = r#"{
            "success": [true],
            "age_distribution": [
                {"age_group": ["60-69"], "count": [120], "mortality": [18], "mortality_rate": [15.0]}
            ],
            "comorbidity_impact": {"AIDS": {"rate": [31.5]}}
        }"#;

        let parsed: ChartDataResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.success);

        let overview = parsed.into_overview();
        assert_eq!(overview.age_distribution[0].band, "60-69");
        assert_eq!(overview.age_distribution[0].count, 120);
        assert_eq!(overview.comorbidity_impact["AIDS"].rate, 31.5);
    }

    #[test]
    fn accepts_bare_scalars_too() {
        let json = r#"{
            "success": true,
            "sofa_distribution": [
                {"sofa_group": "4-6", "count": 55, "mortality": 12, "mortality_rate": 21.8}
            ]
        }"#;

        let parsed: ChartDataResponse = serde_json::from_str(json).unwrap();
        let overview = parsed.into_overview();
        assert_eq!(overview.sofa_distribution[0].band, "4-6");
        assert_eq!(overview.sofa_distribution[0].mortality, 12);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let parsed: ChartDataResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        let overview = parsed.into_overview();
        assert!(overview.age_distribution.is_empty());
        assert!(overview.comorbidity_impact.is_empty());
    }

    #[test]
    fn empty_wrapped_array_is_an_error() {
        let json = r#"{
            "success": true,
            "feature_importance": [{"feature": [], "importance": [0.2]}]
        }"#;

        assert!(serde_json::from_str::<ChartDataResponse>(json).is_err());
    }

    #[test]
    fn chart_data_url_tolerates_trailing_slash() {
        let client =
            RemoteAnalyticsClient::new(AnalyticsClientConfig::new("http://localhost:8000/"));
        assert_eq!(client.chart_data_url(), "http://localhost:8000/js-chart-data");
    }
}
