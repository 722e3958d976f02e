//! Health check controller.

use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use stratus_service::HealthReport;

/// Creates the health router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Dependency health report.
///
/// Always answers 200; a failing dependency shows up as `degraded`.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Health of the service and its dependencies", body = HealthReport)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthReport> {
    Json(state.health_service.report().await)
}
