use anyhow::{anyhow, Result};
use maxcal_foods::Capacity;

/// Discretization of ounces into whole table units.
///
/// Item weights round up and capacities round down. Float products are taken
/// as they come, so `0.7` ounces on a ten-unit grid (`7.000000000000001`)
/// occupies eight units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightGrid {
    units_per_ounce: u32,
}

impl Default for WeightGrid {
    fn default() -> Self {
        Self { units_per_ounce: 1 }
    }
}

impl WeightGrid {
    pub fn new(units_per_ounce: u32) -> Result<Self> {
        if units_per_ounce == 0 {
            return Err(anyhow!("units_per_ounce must be at least 1"));
        }
        Ok(Self { units_per_ounce })
    }

    pub fn units_per_ounce(&self) -> u32 {
        self.units_per_ounce
    }

    /// Units occupied by an item. Positive weights always occupy at least one unit.
    pub fn item_units(&self, weight: f64) -> usize {
        let units = (weight * self.units_per_ounce as f64).ceil();
        (units as usize).max(1)
    }

    pub fn capacity_units(&self, capacity: Capacity) -> usize {
        (capacity.ounces() * self.units_per_ounce as f64).floor() as usize
    }
}
