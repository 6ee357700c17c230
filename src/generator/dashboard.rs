use serde::Serialize;
use utoipa::ToSchema;

use super::{round2, DataGenerator, Order, Warehouse};

/// Orders with a late-risk score above this threshold count as late.
const LATE_RISK_THRESHOLD: f64 = 0.6;

/// High-level metrics for the dashboard cards and charts.
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardSummary {
    pub totals: DashboardTotals,
    /// Orders whose late-risk score exceeds 0.6
    pub late_orders: usize,
    pub pipeline: PipelineBreakdown,
    /// Mean warehouse utilization, rounded to 2 decimals
    #[schema(example = 0.61)]
    pub warehouse_utilization: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardTotals {
    #[schema(example = 50)]
    pub orders: usize,
    #[schema(example = 40)]
    pub shipments: usize,
    #[schema(example = 16)]
    pub warehouses: usize,
    /// Sum of all order values, rounded to 2 decimals
    #[schema(example = 127431.89)]
    pub order_value: f64,
}

/// Per-status order counts, keyed by the pipeline status names.
#[derive(Debug, Serialize, ToSchema)]
pub struct PipelineBreakdown {
    #[serde(rename = "Pending")]
    pub pending: usize,
    #[serde(rename = "Confirmed")]
    pub confirmed: usize,
    #[serde(rename = "Allocated")]
    pub allocated: usize,
    #[serde(rename = "Packed")]
    pub packed: usize,
    #[serde(rename = "Shipped")]
    pub shipped: usize,
    #[serde(rename = "Delivered")]
    pub delivered: usize,
}

impl PipelineBreakdown {
    fn tally(orders: &[Order]) -> Self {
        let mut counts = Self {
            pending: 0,
            confirmed: 0,
            allocated: 0,
            packed: 0,
            shipped: 0,
            delivered: 0,
        };
        for order in orders {
            match order.status.as_str() {
                "Pending" => counts.pending += 1,
                "Confirmed" => counts.confirmed += 1,
                "Allocated" => counts.allocated += 1,
                "Packed" => counts.packed += 1,
                "Shipped" => counts.shipped += 1,
                "Delivered" => counts.delivered += 1,
                _ => {}
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.pending + self.confirmed + self.allocated + self.packed + self.shipped + self.delivered
    }
}

/// Mean utilization across the fleet, 0.0 for an empty list.
fn mean_utilization(warehouses: &[Warehouse]) -> f64 {
    if warehouses.is_empty() {
        return 0.0;
    }
    let sum: f64 = warehouses.iter().map(|w| w.utilization).sum();
    round2(sum / warehouses.len() as f64)
}

impl DataGenerator {
    /// Aggregates fresh order, shipment, and warehouse datasets into the
    /// dashboard summary. Calls the other generators internally, so it
    /// consumes additional draws from the shared random stream.
    pub fn dashboard_summary(&mut self) -> DashboardSummary {
        let orders = self.orders(None, None).rows;
        let shipments = self.shipments(None);
        let warehouses = self.warehouses();

        let total_order_value = round2(orders.iter().map(|order| order.total_value).sum());
        let late_orders = orders
            .iter()
            .filter(|order| order.late_risk > LATE_RISK_THRESHOLD)
            .count();

        DashboardSummary {
            totals: DashboardTotals {
                orders: orders.len(),
                shipments: shipments.len(),
                warehouses: warehouses.len(),
                order_value: total_order_value,
            },
            late_orders,
            pipeline: PipelineBreakdown::tally(&orders),
            warehouse_utilization: mean_utilization(&warehouses),
        }
    }
}
