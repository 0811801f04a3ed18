//! Status Routes

use axum::{routing::get, Json, Router};

use crate::models::{HealthCheck, StatusResponse};
use crate::AppState;

/// Static status payload
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Server is running", body = StatusResponse)
    ),
    tag = "Health"
)]
pub async fn root_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "Spam Detection Server Running".to_string(),
    })
}

/// Liveness probe with version
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthCheck)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "SpamLens API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root_status))
        .route("/health", get(health_check))
}
