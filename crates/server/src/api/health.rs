use axum::Json;
use hackathons_api_types::HealthCheckResponse;

/// Liveness check.
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse::ok())
}
