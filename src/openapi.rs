use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{errors, generator, handlers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order to Dispatch API",
        version = "1.0.0",
        description = r#"
Demo backend for the Order to Dispatch dashboard.

Serves synthetic logistics data: orders (with a wide generic metrics block),
shipment tracking, warehouse utilization, and forecast configuration/series.
All data is generated in memory from a seeded random stream on every request;
nothing is persisted, and records do not keep their values across calls.
"#
    ),
    paths(
        handlers::health::liveness_check,
        handlers::dashboard::dashboard_summary,
        handlers::orders::list_orders,
        handlers::shipments::list_shipments,
        handlers::warehouses::list_warehouses,
        handlers::forecast::forecast_settings,
        handlers::forecast::forecast_overview,
    ),
    components(schemas(
        errors::ErrorResponse,
        generator::Order,
        generator::OrderPage,
        generator::Shipment,
        generator::Warehouse,
        generator::ForecastSettings,
        generator::ForecastSeasonality,
        generator::ForecastScenario,
        generator::ForecastOverview,
        generator::DashboardSummary,
        generator::DashboardTotals,
        generator::PipelineBreakdown,
        handlers::shipments::ShipmentListResponse,
        handlers::warehouses::WarehouseListResponse,
    )),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "dashboard", description = "Aggregated dashboard metrics"),
        (name = "orders", description = "Synthetic order data with dynamic columns"),
        (name = "shipments", description = "Shipment-level tracking data"),
        (name = "warehouses", description = "Warehouse capacity and utilization"),
        (name = "forecast", description = "Forecast configuration and overview series"),
    )
)]
pub struct ApiDoc;

/// Swagger UI mounted at /docs, serving the generated document at
/// /api-docs/openapi.json.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}
