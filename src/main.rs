//! ICU Sentinel server binary.
//!
//! Wires the prediction failover chain and the analytics client into the
//! HTTP router and serves the scoring API.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use http::HeaderValue;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use icu_sentinel::adapters::analytics::{AnalyticsClientConfig, RemoteAnalyticsClient};
use icu_sentinel::adapters::http::{app_router, AppState};
use icu_sentinel::adapters::prediction::{
    FailoverPredictionProvider, LocalEstimateProvider, RemotePredictionConfig,
    RemotePredictionProvider,
};
use icu_sentinel::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let remote = RemotePredictionProvider::new(
        RemotePredictionConfig::new(&config.prediction.base_url)
            .with_timeout(config.prediction.timeout()),
    );
    let prediction_provider =
        FailoverPredictionProvider::new(remote).with_fallback(LocalEstimateProvider::new());

    let analytics_provider = RemoteAnalyticsClient::new(
        AnalyticsClientConfig::new(&config.analytics.base_url)
            .with_timeout(config.analytics.timeout()),
    );

    let state = AppState {
        prediction_provider: Arc::new(prediction_provider),
        analytics_provider: Arc::new(analytics_provider),
    };

    let app = app_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(cors_layer(&config)),
    );

    let addr = config.server.socket_addr();
    info!(%addr, prediction_service = %config.prediction.base_url, "starting server");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Installs the tracing subscriber: human-readable locally, JSON in
/// production.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Builds the CORS layer from configured origins, permissive when none are
/// configured (development).
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
