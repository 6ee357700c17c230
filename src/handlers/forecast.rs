use axum::{extract::State, response::Json};

use crate::{
    generator::{ForecastOverview, ForecastSettings},
    handlers::ApiResult,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/forecast/settings",
    responses(
        (status = 200, description = "Forecast model configuration and supported scenarios", body = ForecastSettings)
    ),
    tag = "forecast"
)]
pub async fn forecast_settings(State(state): State<AppState>) -> ApiResult<ForecastSettings> {
    let settings = state.generator()?.forecast_settings();
    Ok(Json(settings))
}

#[utoipa::path(
    get,
    path = "/api/forecast/overview",
    responses(
        (status = 200, description = "Monthly demand and supply series for charting", body = ForecastOverview)
    ),
    tag = "forecast"
)]
pub async fn forecast_overview(State(state): State<AppState>) -> ApiResult<ForecastOverview> {
    let overview = state.generator()?.forecast_overview();
    Ok(Json(overview))
}
