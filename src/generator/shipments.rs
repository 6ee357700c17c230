use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use super::orders::ORDER_COUNT;
use super::{DataGenerator, SHIPMENT_STATUSES};

/// Shipments generated per call.
pub(super) const SHIPMENT_COUNT: usize = 40;

const SHIPMENT_CARRIERS: [&str; 4] = ["UPS", "FedEx", "DHL", "USPS"];
const ORIGINS: [&str; 5] = ["New York", "Atlanta", "Los Angeles", "Berlin", "Tokyo"];
const DESTINATIONS: [&str; 5] = ["Chicago", "Dallas", "San Francisco", "Paris", "Osaka"];

/// A synthetic shipment-tracking row.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Shipment {
    /// Shipment identifier (SHP-#####)
    #[schema(example = "SHP-00031")]
    pub shipment_id: String,
    /// Referenced order id, drawn independently of the order dataset and not
    /// guaranteed to correspond to any generated order
    #[schema(example = "ORD-00012")]
    pub order_id: String,
    /// One of the fixed five shipment statuses
    #[schema(example = "In Transit")]
    pub status: String,
    #[schema(example = "DHL")]
    pub carrier: String,
    #[schema(example = "Berlin")]
    pub origin: String,
    #[schema(example = "Paris")]
    pub destination: String,
    pub departed_at: DateTime<Utc>,
    pub estimated_delivery: DateTime<Utc>,
    /// Number of tracking events recorded so far
    #[schema(example = 7)]
    pub tracking_events: u32,
    pub is_expedited: bool,
}

impl DataGenerator {
    /// Generates 40 shipments, truncated to `limit` (None returns all).
    pub fn shipments(&mut self, limit: Option<usize>) -> Vec<Shipment> {
        let now = Utc::now();
        let mut rows = Vec::with_capacity(SHIPMENT_COUNT);

        for shipment_id in 1..=SHIPMENT_COUNT {
            let departed = now - Duration::days(self.rng.gen_range(1..=15));
            let eta = departed + Duration::days(self.rng.gen_range(1..=10));

            rows.push(Shipment {
                shipment_id: format!("SHP-{:05}", shipment_id),
                order_id: format!("ORD-{:05}", self.rng.gen_range(1..=ORDER_COUNT)),
                status: self.pick(&SHIPMENT_STATUSES).to_string(),
                carrier: self.pick(&SHIPMENT_CARRIERS).to_string(),
                origin: self.pick(&ORIGINS).to_string(),
                destination: self.pick(&DESTINATIONS).to_string(),
                departed_at: departed,
                estimated_delivery: eta,
                tracking_events: self.rng.gen_range(3..=12),
                is_expedited: self.rng.gen_bool(0.5),
            });
        }

        if let Some(limit) = limit {
            rows.truncate(limit);
        }

        rows
    }
}
