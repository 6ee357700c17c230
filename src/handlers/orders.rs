use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    errors::ApiError,
    generator::OrderPage,
    handlers::{ApiResult, DEFAULT_LIMIT},
    AppState,
};

#[derive(Debug, Deserialize, Default, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderListQuery {
    /// Number of records to return (1-200, default 25)
    #[validate(range(min = 1, max = 200))]
    pub limit: Option<u64>,
    /// Optional status filter, matched case-insensitively
    pub status: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/orders",
    params(OrderListQuery),
    responses(
        (status = 200, description = "Order rows with the full column list", body = OrderPage),
        (status = 422, description = "Limit outside 1-200", body = crate::errors::ErrorResponse)
    ),
    tag = "orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> ApiResult<OrderPage> {
    // Out-of-range limits are rejected before any generation happens
    query
        .validate()
        .map_err(|_| ApiError::Validation("limit must be between 1 and 200".to_string()))?;

    let limit = query.limit.unwrap_or(DEFAULT_LIMIT) as usize;
    let page = state
        .generator()?
        .orders(Some(limit), query.status.as_deref());

    Ok(Json(page))
}
