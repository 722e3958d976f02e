//! Statistics controller.

use crate::{
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{extract::State, routing::get, Router};
use stratus_service::StatsResponse;

/// Creates the stats router.
pub fn router() -> Router<AppState> {
    Router::new().route("/stats", get(get_stats))
}

/// Aggregate user statistics, cached for a short TTL.
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Statistics", body = StatsResponse),
        (status = 500, description = "Store unavailable", body = stratus_core::ErrorResponse)
    )
)]
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<StatsResponse> {
    ok(state.user_service.get_stats().await?)
}
