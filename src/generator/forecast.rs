use chrono::{Duration, Utc};
use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use super::DataGenerator;

const FORECAST_HORIZON_MONTHS: u32 = 6;

/// Points in the overview series: the current month plus the full horizon.
const FORECAST_POINTS: usize = 7;

/// Static forecast model configuration.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ForecastSettings {
    #[schema(example = 6)]
    pub horizon_months: u32,
    #[schema(example = "Prophet")]
    pub model: String,
    #[schema(example = 0.9)]
    pub confidence_interval: f64,
    pub seasonality: ForecastSeasonality,
    pub demand_drivers: Vec<String>,
    pub scenarios: Vec<ForecastScenario>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ForecastSeasonality {
    pub weekly: bool,
    pub monthly: bool,
    pub yearly: bool,
}

/// Named growth scenario applied on top of the baseline forecast.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ForecastScenario {
    #[schema(example = "Optimistic")]
    pub name: String,
    #[schema(example = 1.15)]
    pub growth: f64,
}

/// Monthly demand/supply series for charting.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ForecastOverview {
    /// Month labels ("Aug 2025", ...)
    pub labels: Vec<String>,
    pub demand: Vec<i64>,
    pub supply: Vec<i64>,
}

impl DataGenerator {
    /// Returns the static forecast configuration. Draws nothing from the
    /// random stream.
    pub fn forecast_settings(&self) -> ForecastSettings {
        ForecastSettings {
            horizon_months: FORECAST_HORIZON_MONTHS,
            model: "Prophet".to_string(),
            confidence_interval: 0.9,
            seasonality: ForecastSeasonality {
                weekly: true,
                monthly: true,
                yearly: false,
            },
            demand_drivers: [
                "seasonal_index",
                "promotion_calendar",
                "economic_indicator",
                "new_product_launches",
            ]
            .iter()
            .map(|driver| driver.to_string())
            .collect(),
            scenarios: vec![
                ForecastScenario {
                    name: "Baseline".to_string(),
                    growth: 1.0,
                },
                ForecastScenario {
                    name: "Optimistic".to_string(),
                    growth: 1.15,
                },
                ForecastScenario {
                    name: "Conservative".to_string(),
                    growth: 0.9,
                },
            ],
        }
    }

    /// Generates the 7-point monthly demand/supply series. Supply is demand
    /// scaled by a random multiplier in [0.8, 1.1), integer-truncated.
    pub fn forecast_overview(&mut self) -> ForecastOverview {
        let now = Utc::now();

        let labels: Vec<String> = (0..FORECAST_POINTS)
            .map(|offset| {
                (now + Duration::days(30 * offset as i64))
                    .format("%b %Y")
                    .to_string()
            })
            .collect();

        let demand: Vec<i64> = (0..FORECAST_POINTS)
            .map(|_| self.rng.gen_range(800..=1800))
            .collect();

        let supply: Vec<i64> = demand
            .iter()
            .map(|&value| (value as f64 * self.rng.gen_range(0.8..1.1)) as i64)
            .collect();

        ForecastOverview {
            labels,
            demand,
            supply,
        }
    }
}
