use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use super::{round2, DataGenerator, STATUS_PIPELINE};

/// Orders generated per call, before any status filter.
pub(super) const ORDER_COUNT: usize = 50;

/// Width of the generic metrics block appended to every order row.
pub(super) const ORDER_METRIC_COUNT: usize = 160;

const PRIORITIES: [&str; 4] = ["Low", "Medium", "High", "Critical"];
const SALES_CHANNELS: [&str; 4] = ["Online", "Retail", "Wholesale", "Marketplace"];
const COUNTRIES: [&str; 6] = ["US", "CA", "DE", "FR", "JP", "AU"];
const ORDER_CARRIERS: [&str; 5] = ["UPS", "FedEx", "DHL", "USPS", "Royal Mail"];
const FULFILLMENT_SITES: [&str; 5] = ["New York", "Dallas", "Berlin", "Tokyo", "Sydney"];

/// Fixed (non-metric) order columns, in serialization order.
const ORDER_FIELDS: [&str; 15] = [
    "order_id",
    "customer_name",
    "status",
    "priority",
    "order_date",
    "promised_date",
    "sales_channel",
    "country",
    "total_value",
    "currency",
    "units",
    "late_risk",
    "pipeline_step",
    "carrier",
    "warehouse",
];

/// A synthetic order row. The wide metrics block is kept in an explicit map
/// flattened into the JSON object, so rows stay a fixed struct while still
/// serializing with 160+ columns.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Order {
    /// Order identifier (ORD-#####)
    #[schema(example = "ORD-00017")]
    pub order_id: String,
    #[schema(example = "Customer 017")]
    pub customer_name: String,
    /// One of the fixed six-step pipeline statuses
    #[schema(example = "Shipped")]
    pub status: String,
    #[schema(example = "High")]
    pub priority: String,
    pub order_date: NaiveDate,
    pub promised_date: NaiveDate,
    #[schema(example = "Online")]
    pub sales_channel: String,
    #[schema(example = "US")]
    pub country: String,
    /// Order value, rounded to 2 decimals
    #[schema(example = 1234.56)]
    pub total_value: f64,
    #[schema(example = "USD")]
    pub currency: String,
    pub units: u32,
    /// Synthetic late-risk score in [0, 1]; values above 0.6 count as late
    #[schema(example = 0.72)]
    pub late_risk: f64,
    /// 1-indexed position of `status` in the pipeline
    #[schema(example = 5)]
    pub pipeline_step: usize,
    #[schema(example = "FedEx")]
    pub carrier: String,
    #[schema(example = "Dallas")]
    pub warehouse: String,
    /// Generic numeric metric columns (metric_001..metric_160)
    #[serde(flatten)]
    pub metrics: BTreeMap<String, f64>,
}

/// Order listing: the ordered column list plus the rows themselves, the shape
/// the dashboard's dynamic table expects.
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderPage {
    pub columns: Vec<String>,
    pub rows: Vec<Order>,
}

impl DataGenerator {
    /// Generates 50 orders, optionally filtered case-insensitively by status
    /// and truncated to `limit`. An empty status string counts as no filter.
    /// The column list reflects the filtered set: an unmatched status yields
    /// empty rows and empty columns.
    pub fn orders(&mut self, limit: Option<usize>, status: Option<&str>) -> OrderPage {
        let status = status.filter(|s| !s.is_empty());
        let today = Utc::now().date_naive();
        let mut rows = Vec::with_capacity(ORDER_COUNT);

        for order_id in 1..=ORDER_COUNT {
            let placed = self.random_date(today - Duration::days(90), today);
            let promised = placed + Duration::days(self.rng.gen_range(1..=14));
            let pipeline_position = self.rng.gen_range(0..STATUS_PIPELINE.len());

            rows.push(Order {
                order_id: format!("ORD-{:05}", order_id),
                customer_name: format!("Customer {:03}", order_id),
                status: STATUS_PIPELINE[pipeline_position].to_string(),
                priority: self.pick(&PRIORITIES).to_string(),
                order_date: placed,
                promised_date: promised,
                sales_channel: self.pick(&SALES_CHANNELS).to_string(),
                country: self.pick(&COUNTRIES).to_string(),
                total_value: round2(self.rng.gen_range(50.0..5000.0)),
                currency: "USD".to_string(),
                units: self.rng.gen_range(1..=250),
                late_risk: round2(self.rng.gen_range(0.0..1.0)),
                pipeline_step: pipeline_position + 1,
                carrier: self.pick(&ORDER_CARRIERS).to_string(),
                warehouse: self.pick(&FULFILLMENT_SITES).to_string(),
                metrics: self.metrics_block("metric", ORDER_METRIC_COUNT),
            });
        }

        if let Some(filter) = status {
            rows.retain(|order| order.status.eq_ignore_ascii_case(filter));
        }

        let columns = if rows.is_empty() {
            Vec::new()
        } else {
            order_columns()
        };

        if let Some(limit) = limit {
            rows.truncate(limit);
        }

        OrderPage { columns, rows }
    }

    fn metrics_block(&mut self, prefix: &str, count: usize) -> BTreeMap<String, f64> {
        (1..=count)
            .map(|index| {
                (
                    format!("{}_{:03}", prefix, index),
                    round2(self.rng.gen_range(0.0..1000.0)),
                )
            })
            .collect()
    }
}

/// The full ordered column list: fixed fields first, then the metric keys.
pub(super) fn order_columns() -> Vec<String> {
    ORDER_FIELDS
        .iter()
        .map(|field| field.to_string())
        .chain((1..=ORDER_METRIC_COUNT).map(|index| format!("metric_{:03}", index)))
        .collect()
}
