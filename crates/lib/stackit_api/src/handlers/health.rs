//! Liveness probe.

use axum::Json;

use crate::models::HealthResponse;

/// `GET /health` — always healthy while the process is serving.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
