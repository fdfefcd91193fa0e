use crate::dtos::HealthResponse;
use crate::AppState;
use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};

pub const BANNER: &str = "CSE341 Contact API is running";

/// Liveness banner
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API is running", body = String, content_type = "text/plain")
    ),
    tag = "Health Check"
)]
pub async fn root() -> &'static str {
    BANNER
}

/// Server health information
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server health information", body = HealthResponse)
    ),
    tag = "Health Check"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime: state.started_at.elapsed().as_secs_f64(),
        environment: state.config.environment.to_string(),
    })
}
