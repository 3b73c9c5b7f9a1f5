//! HTTP handlers for the scoring API.
//!
//! These handlers connect Axum routes to application layer command/query
//! handlers.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use tracing::info;

use crate::application::handlers::{
    AnalyzePatientCommand, AnalyzePatientHandler, GetDatasetOverviewHandler,
    GetDatasetOverviewQuery, PredictMortalityCommand, PredictMortalityHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::patient::{PatientVector, FIELD_BOUNDS};
use crate::ports::{AnalyticsProvider, PredictionProvider};

use super::dto::{
    AnalysisResponse, ErrorResponse, HealthResponse, PatientVectorRequest, PredictionResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned per request; dependencies are Arc-wrapped for cheap sharing.
#[derive(Clone)]
pub struct AppState {
    pub prediction_provider: Arc<dyn PredictionProvider>,
    pub analytics_provider: Arc<dyn AnalyticsProvider>,
}

impl AppState {
    /// Create handlers on demand from the shared state.
    pub fn predict_handler(&self) -> PredictMortalityHandler {
        PredictMortalityHandler::new(self.prediction_provider.clone())
    }

    pub fn analyze_handler(&self) -> AnalyzePatientHandler {
        AnalyzePatientHandler::new()
    }

    pub fn dataset_overview_handler(&self) -> GetDatasetOverviewHandler {
        GetDatasetOverviewHandler::new(self.analytics_provider.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/predict - mortality-risk prediction with transparent failover.
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PatientVectorRequest>,
) -> Response {
    let patient = match PatientVector::try_from(request) {
        Ok(patient) => patient,
        Err(err) => return validation_rejection(err),
    };

    match state
        .predict_handler()
        .handle(PredictMortalityCommand { patient })
        .await
    {
        Ok(result) => {
            info!(
                mortality_risk = result.prediction.mortality_risk.value(),
                source = ?result.prediction.source,
                "prediction served"
            );
            Json(PredictionResponse::new(&result.prediction, result.risk_level))
                .into_response()
        }
        Err(err) => domain_rejection(err),
    }
}

/// POST /api/analyze - full deterministic clinical analysis.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<PatientVectorRequest>,
) -> Response {
    let patient = match PatientVector::try_from(request) {
        Ok(patient) => patient,
        Err(err) => return validation_rejection(err),
    };

    match state
        .analyze_handler()
        .handle(AnalyzePatientCommand { patient })
    {
        Ok(analysis) => Json(AnalysisResponse::from(analysis)).into_response(),
        Err(err) => domain_rejection(err),
    }
}

/// GET /api/dataset/overview - pre-aggregated cohort statistics.
pub async fn dataset_overview(State(state): State<AppState>) -> Response {
    match state
        .dataset_overview_handler()
        .handle(GetDatasetOverviewQuery)
        .await
    {
        Ok(overview) => Json(overview).into_response(),
        Err(err) => domain_rejection(err),
    }
}

/// GET /api/patient/bounds - canonical input ranges for input controls.
pub async fn patient_bounds() -> Response {
    Json(FIELD_BOUNDS).into_response()
}

/// GET /health - liveness probe.
pub async fn health() -> Response {
    Json(HealthResponse::healthy()).into_response()
}

// ════════════════════════════════════════════════════════════════════════════════
// Error mapping
// ════════════════════════════════════════════════════════════════════════════════

fn validation_rejection(err: ValidationError) -> Response {
    domain_rejection(err.into())
}

fn domain_rejection(err: DomainError) -> Response {
    let status = match err.code {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::PredictionUnavailable | ErrorCode::AnalyticsUnavailable => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let body = ErrorResponse::new(err.code.to_string(), err.message);
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_unprocessable_entity() {
        let err = DomainError::new(ErrorCode::OutOfRange, "age out of range");
        let response = domain_rejection(err);
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn collaborator_failures_map_to_service_unavailable() {
        let err = DomainError::new(ErrorCode::PredictionUnavailable, "chain exhausted");
        let response = domain_rejection(err);
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
