//! Axum router configuration for the scoring API.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{analyze, dataset_overview, health, patient_bounds, predict, AppState};

/// Create the scoring API router.
///
/// # Routes
///
/// - `POST /predict` - Mortality-risk prediction (model with local failover)
/// - `POST /analyze` - Deterministic clinical analysis
/// - `GET /dataset/overview` - Pre-aggregated cohort statistics
/// - `GET /patient/bounds` - Canonical input ranges
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/predict", post(predict))
        .route("/analyze", post(analyze))
        .route("/dataset/overview", get(dataset_overview))
        .route("/patient/bounds", get(patient_bounds))
}

/// Create the complete application router.
///
/// Mounts the API under `/api` and the liveness probe at `/health`.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .route("/health", get(health))
        .with_state(state)
}
