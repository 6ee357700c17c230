pub mod dashboard;
pub mod forecast;
pub mod health;
pub mod orders;
pub mod shipments;
pub mod warehouses;

use axum::{response::Json, routing::get, Router};

use crate::{errors::ApiError, AppState};

/// Default page size for the orders and shipments endpoints.
pub const DEFAULT_LIMIT: u64 = 25;

pub type ApiResult<T> = Result<Json<T>, ApiError>;

/// All HTTP routes served by the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::liveness_check))
        .route("/api/dashboard", get(dashboard::dashboard_summary))
        .route("/api/orders", get(orders::list_orders))
        .route("/api/shipments", get(shipments::list_shipments))
        .route("/api/warehouses", get(warehouses::list_warehouses))
        .route("/api/forecast/settings", get(forecast::forecast_settings))
        .route("/api/forecast/overview", get(forecast::forecast_overview))
}
