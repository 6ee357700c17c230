use axum::{extract::State, response::Json};

use crate::{generator::DashboardSummary, handlers::ApiResult, AppState};

#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "High-level metrics for the dashboard cards and charts", body = DashboardSummary)
    ),
    tag = "dashboard"
)]
pub async fn dashboard_summary(State(state): State<AppState>) -> ApiResult<DashboardSummary> {
    let summary = state.generator()?.dashboard_summary();
    Ok(Json(summary))
}
