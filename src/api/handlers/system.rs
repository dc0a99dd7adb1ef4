use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::api::state::AppState;
use crate::api::types::{HealthResponse, ModelInfoResponse};

/// GET /health -- lightweight liveness/readiness probe
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: format!("loaded ({} classes)", state.classifier.num_classes()),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// Kubernetes liveness probe - is the process alive?
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Kubernetes readiness probe - is the service ready to handle traffic?
///
/// The classifier is loaded before the listener binds, so a serving
/// process is always ready.
pub async fn readiness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// GET /api/model/info
pub async fn model_info_handler(State(state): State<AppState>) -> Json<ModelInfoResponse> {
    Json(ModelInfoResponse {
        classes: state.classifier.class_labels.clone(),
        input_dim: state.classifier.input_dim,
        metadata: state.classifier.metadata.clone(),
    })
}
