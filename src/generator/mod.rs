//! Synthetic data generation for the Order to Dispatch dashboard.
//!
//! Every dataset is produced from a single [`DataGenerator`], which owns the
//! seeded random stream. Records are regenerated on every call; nothing is
//! cached or persisted, so successive calls return different values. Replaying
//! the same call sequence on a generator built from the same seed reproduces
//! the same datasets bit-for-bit.

mod dashboard;
mod forecast;
mod orders;
mod shipments;
mod warehouses;

pub use dashboard::{DashboardSummary, DashboardTotals, PipelineBreakdown};
pub use forecast::{ForecastOverview, ForecastScenario, ForecastSeasonality, ForecastSettings};
pub use orders::{Order, OrderPage};
pub use shipments::Shipment;
pub use warehouses::Warehouse;

use chrono::{Duration, NaiveDate};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Fixed six-step order pipeline, in progression order.
pub const STATUS_PIPELINE: [&str; 6] = [
    "Pending",
    "Confirmed",
    "Allocated",
    "Packed",
    "Shipped",
    "Delivered",
];

/// Shipment lifecycle statuses.
pub const SHIPMENT_STATUSES: [&str; 5] = [
    "Label Created",
    "In Transit",
    "Out for Delivery",
    "Delivered",
    "Exception",
];

pub const WAREHOUSE_REGIONS: [&str; 4] = ["North", "South", "East", "West"];

/// Generator for all synthetic dashboard datasets.
///
/// Owns its random stream so tests can inject a deterministic seed per
/// instance instead of sharing process-wide singleton state.
pub struct DataGenerator {
    rng: StdRng,
}

impl DataGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks one entry from a fixed, non-empty choice list.
    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.rng.gen_range(0..items.len())]
    }

    /// Returns a random date between `start` and `end` inclusive.
    fn random_date(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        let delta_days = (end - start).num_days();
        start + Duration::days(self.rng.gen_range(0..=delta_days))
    }
}

/// Rounds to 2 decimal places, the precision of all monetary and metric
/// values in the generated datasets.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
