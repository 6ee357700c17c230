use axum::response::Json;
use serde_json::{json, Value};

/// Liveness probe. There are no backing dependencies to check: if the
/// process answers, it is healthy.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up")
    ),
    tag = "health"
)]
pub async fn liveness_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
