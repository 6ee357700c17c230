use axum::{extract::State, response::Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{generator::Warehouse, handlers::ApiResult, AppState};

#[derive(Debug, Serialize, ToSchema)]
pub struct WarehouseListResponse {
    pub rows: Vec<Warehouse>,
}

#[utoipa::path(
    get,
    path = "/api/warehouses",
    responses(
        (status = 200, description = "Warehouse capacity and utilization rows", body = WarehouseListResponse)
    ),
    tag = "warehouses"
)]
pub async fn list_warehouses(State(state): State<AppState>) -> ApiResult<WarehouseListResponse> {
    let rows = state.generator()?.warehouses();
    Ok(Json(WarehouseListResponse { rows }))
}
