use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use super::{round2, DataGenerator, WAREHOUSE_REGIONS};

const WAREHOUSE_NAMES: [&str; 4] = ["Alpha", "Beta", "Gamma", "Delta"];

/// A synthetic warehouse capacity/utilization row.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Warehouse {
    /// Warehouse identifier (WH-###)
    #[schema(example = "WH-007")]
    pub warehouse_id: String,
    /// Region plus Greek-letter suffix
    #[schema(example = "East Gamma")]
    pub name: String,
    #[schema(example = "East")]
    pub region: String,
    pub capacity: u32,
    /// Occupied units, never exceeding `capacity`
    pub current_units: u32,
    /// current_units / capacity, rounded to 2 decimals
    #[schema(example = 0.64)]
    pub utilization: f64,
    pub active_orders: u32,
    pub open_positions: u32,
}

impl DataGenerator {
    /// Generates the fixed fleet of 16 warehouses (4 regions x 4 names).
    pub fn warehouses(&mut self) -> Vec<Warehouse> {
        let mut rows = Vec::with_capacity(WAREHOUSE_REGIONS.len() * WAREHOUSE_NAMES.len());
        let mut index = 0;

        for region in WAREHOUSE_REGIONS {
            for name in WAREHOUSE_NAMES {
                index += 1;
                let capacity = self.rng.gen_range(5000..=15000u32);
                let current = self.rng.gen_range(2000..=capacity);

                rows.push(Warehouse {
                    warehouse_id: format!("WH-{:03}", index),
                    name: format!("{} {}", region, name),
                    region: region.to_string(),
                    capacity,
                    current_units: current,
                    utilization: round2(f64::from(current) / f64::from(capacity)),
                    active_orders: self.rng.gen_range(50..=600),
                    open_positions: self.rng.gen_range(0..=25),
                });
            }
        }

        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_sixteen_warehouses_across_all_regions() {
        let mut generator = DataGenerator::from_seed(42);
        let warehouses = generator.warehouses();
        assert_eq!(warehouses.len(), 16);

        for region in WAREHOUSE_REGIONS {
            let in_region = warehouses.iter().filter(|w| w.region == region).count();
            assert_eq!(in_region, WAREHOUSE_NAMES.len());
        }

        assert_eq!(warehouses[0].warehouse_id, "WH-001");
        assert_eq!(warehouses[15].warehouse_id, "WH-016");
    }

    #[test]
    fn occupancy_never_exceeds_capacity() {
        let mut generator = DataGenerator::from_seed(42);
        for warehouse in generator.warehouses() {
            assert!(warehouse.current_units <= warehouse.capacity);
            assert!(warehouse.current_units >= 2000);
            assert_eq!(
                warehouse.utilization,
                round2(f64::from(warehouse.current_units) / f64::from(warehouse.capacity))
            );
        }
    }

    #[test]
    fn names_combine_region_and_suffix() {
        let mut generator = DataGenerator::from_seed(42);
        for warehouse in generator.warehouses() {
            let (region, suffix) = warehouse
                .name
                .split_once(' ')
                .expect("name should be region + suffix");
            assert_eq!(region, warehouse.region);
            assert!(WAREHOUSE_NAMES.contains(&suffix));
        }
    }
}
