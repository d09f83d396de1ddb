use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Liveness check.
pub async fn handle() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}
