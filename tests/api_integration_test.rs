use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use dispatch_demo_api::{
    build_app,
    config::AppConfig,
    generator::{DataGenerator, SHIPMENT_STATUSES},
    AppState,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    test_app_with_seed(42)
}

fn test_app_with_seed(seed: u64) -> Router {
    let cfg = AppConfig {
        seed,
        ..AppConfig::default()
    };
    let state = AppState::new(cfg, DataGenerator::from_seed(seed));
    build_app(state)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or_else(|_| json!({}));
    (status, body)
}

#[tokio::test]
async fn liveness_endpoint_reports_ok() {
    let app = test_app();
    let (status, body) = get_json(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn orders_default_limit_is_25() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/orders").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rows"].as_array().unwrap().len(), 25);
}

#[tokio::test]
async fn orders_respect_an_explicit_limit() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/orders?limit=10").await;
    assert_eq!(status, StatusCode::OK);

    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 10);

    // Columns cover the fixed fields plus the 160-wide metrics block.
    let columns = body["columns"].as_array().unwrap();
    assert_eq!(columns.len(), 175);
    assert_eq!(columns[0], "order_id");
    assert_eq!(columns[174], "metric_160");

    // Every row serializes all declared columns.
    for row in rows {
        let object = row.as_object().unwrap();
        assert_eq!(object.len(), columns.len());
        for column in columns {
            assert!(object.contains_key(column.as_str().unwrap()));
        }
    }
}

#[tokio::test]
async fn orders_limit_of_200_returns_all_50() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/orders?limit=200").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rows"].as_array().unwrap().len(), 50);
}

#[tokio::test]
async fn orders_status_filter_is_case_insensitive() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/orders?limit=200&status=shipped").await;
    assert_eq!(status, StatusCode::OK);
    for row in body["rows"].as_array().unwrap() {
        assert_eq!(row["status"], "Shipped");
    }
}

#[tokio::test]
async fn orders_empty_status_param_counts_as_no_filter() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/orders?status=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rows"].as_array().unwrap().len(), 25);
    assert_eq!(body["columns"].as_array().unwrap().len(), 175);
}

#[tokio::test]
async fn orders_unmatched_status_yields_empty_rows_and_columns() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/orders?status=Backordered").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["rows"].as_array().unwrap().is_empty());
    assert!(body["columns"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn out_of_range_limits_are_rejected_before_generation() {
    let app = test_app();

    for uri in ["/api/orders?limit=0", "/api/orders?limit=500"] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "uri: {}", uri);
        assert_eq!(body["error"], "Unprocessable Entity");
        assert!(body["message"].as_str().unwrap().contains("limit"));
    }

    let (status, _) = get_json(&app, "/api/shipments?limit=0").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let (status, _) = get_json(&app, "/api/shipments?limit=201").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn non_numeric_limit_is_a_client_error() {
    let app = test_app();
    let (status, _) = get_json(&app, "/api/orders?limit=abc").await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn shipments_limit_five_returns_five_well_formed_rows() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/shipments?limit=5").await;
    assert_eq!(status, StatusCode::OK);

    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 5);

    for row in rows {
        let shipment_id = row["shipment_id"].as_str().unwrap();
        assert!(shipment_id.starts_with("SHP-"));
        assert_eq!(shipment_id.len(), "SHP-00000".len());
        assert!(shipment_id["SHP-".len()..].chars().all(|c| c.is_ascii_digit()));

        let shipment_status = row["status"].as_str().unwrap();
        assert!(SHIPMENT_STATUSES.contains(&shipment_status));
    }
}

#[tokio::test]
async fn warehouses_hold_their_capacity_invariants() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/warehouses").await;
    assert_eq!(status, StatusCode::OK);

    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 16);

    for row in rows {
        let capacity = row["capacity"].as_u64().unwrap();
        let current = row["current_units"].as_u64().unwrap();
        let utilization = row["utilization"].as_f64().unwrap();
        assert!(current <= capacity);
        let expected = (current as f64 / capacity as f64 * 100.0).round() / 100.0;
        assert!((utilization - expected).abs() < 1e-9);
    }
}

#[tokio::test]
async fn forecast_settings_are_static() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/forecast/settings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model"], "Prophet");
    assert_eq!(body["horizon_months"], 6);
    assert_eq!(body["confidence_interval"], 0.9);
    assert_eq!(body["scenarios"].as_array().unwrap().len(), 3);

    // A second read returns the identical configuration.
    let (_, again) = get_json(&app, "/api/forecast/settings").await;
    assert_eq!(body, again);
}

#[tokio::test]
async fn forecast_overview_has_seven_points_with_bounded_supply() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/forecast/overview").await;
    assert_eq!(status, StatusCode::OK);

    let labels = body["labels"].as_array().unwrap();
    let demand = body["demand"].as_array().unwrap();
    let supply = body["supply"].as_array().unwrap();
    assert_eq!(labels.len(), 7);
    assert_eq!(demand.len(), 7);
    assert_eq!(supply.len(), 7);

    for (d, s) in demand.iter().zip(supply) {
        let d = d.as_i64().unwrap();
        let s = s.as_i64().unwrap();
        assert!(s >= (d as f64 * 0.8).floor() as i64);
        assert!(s <= (d as f64 * 1.1).ceil() as i64);
    }
}

#[tokio::test]
async fn dashboard_summary_aggregates_the_fixed_counts() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/dashboard").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["totals"]["orders"], 50);
    assert_eq!(body["totals"]["shipments"], 40);
    assert_eq!(body["totals"]["warehouses"], 16);
    assert!(body["totals"]["order_value"].as_f64().unwrap() > 0.0);

    let pipeline = body["pipeline"].as_object().unwrap();
    let total: u64 = pipeline.values().map(|v| v.as_u64().unwrap()).sum();
    assert_eq!(total, 50);

    assert!(body["late_orders"].as_u64().unwrap() <= 50);
    let utilization = body["warehouse_utilization"].as_f64().unwrap();
    assert!(utilization > 0.0 && utilization <= 1.0);
}

#[tokio::test]
async fn same_seed_replays_the_same_first_response() {
    let (status_a, body_a) = get_json(&test_app_with_seed(7), "/api/orders?limit=5").await;
    let (status_b, body_b) = get_json(&test_app_with_seed(7), "/api/orders?limit=5").await;
    assert_eq!(status_a, StatusCode::OK);
    assert_eq!(status_a, status_b);
    assert_eq!(body_a, body_b);

    // A different seed produces different data.
    let (_, body_c) = get_json(&test_app_with_seed(8), "/api/orders?limit=5").await;
    assert_ne!(body_a, body_c);
}

#[tokio::test]
async fn every_response_carries_a_request_id() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(Request::get("/api/warehouses").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));

    // Inbound ids are echoed back.
    let response = app
        .oneshot(
            Request::get("/api/warehouses")
                .header("x-request-id", "itest-77")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "itest-77");
}

#[tokio::test]
async fn cross_origin_requests_are_permitted() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/orders")
                .header("origin", "http://localhost:4200")
                .header("access-control-request-method", "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}
