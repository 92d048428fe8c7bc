use crate::{FoodItem, FoodVector};
use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Track {
    pub num_items: usize,
    pub max_item_weight: u32,
    pub max_calories: u32,
}

impl Default for Track {
    fn default() -> Self {
        Self {
            num_items: 20,
            max_item_weight: 20,
            max_calories: 500,
        }
    }
}

/// Deterministic random catalog with whole-ounce weights in
/// `[1, max_item_weight]` and whole calories in `[0, max_calories]`.
pub fn generate_instance(seed: &[u8; 32], track: &Track) -> Result<FoodVector> {
    if track.max_item_weight == 0 {
        return Err(anyhow!("max_item_weight must be at least 1"));
    }
    let mut rng = SmallRng::from_seed(seed.clone());
    (0..track.num_items)
        .map(|i| {
            let weight = rng.gen_range(1..=track.max_item_weight);
            let calories = rng.gen_range(0..=track.max_calories);
            FoodItem::new(format!("food-{}", i), weight as f64, calories as f64)
        })
        .collect()
}
