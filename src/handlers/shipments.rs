use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    errors::ApiError,
    generator::Shipment,
    handlers::{ApiResult, DEFAULT_LIMIT},
    AppState,
};

#[derive(Debug, Deserialize, Default, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ShipmentListQuery {
    /// Number of shipments to return (1-200, default 25)
    #[validate(range(min = 1, max = 200))]
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ShipmentListResponse {
    pub rows: Vec<Shipment>,
}

#[utoipa::path(
    get,
    path = "/api/shipments",
    params(ShipmentListQuery),
    responses(
        (status = 200, description = "Shipment tracking rows", body = ShipmentListResponse),
        (status = 422, description = "Limit outside 1-200", body = crate::errors::ErrorResponse)
    ),
    tag = "shipments"
)]
pub async fn list_shipments(
    State(state): State<AppState>,
    Query(query): Query<ShipmentListQuery>,
) -> ApiResult<ShipmentListResponse> {
    query
        .validate()
        .map_err(|_| ApiError::Validation("limit must be between 1 and 200".to_string()))?;

    let limit = query.limit.unwrap_or(DEFAULT_LIMIT) as usize;
    let rows = state.generator()?.shipments(Some(limit));

    Ok(Json(ShipmentListResponse { rows }))
}
