use anyhow::{anyhow, Result};
use maxcal_foods::{Capacity, FoodItem, Selection};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub mod dynamic;
pub mod exhaustive;
mod grid;
pub use grid::*;
mod settings;
pub use settings::*;

/// The interchangeable solving strategies.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Exhaustive,
    Dynamic,
}

impl Algorithm {
    /// Runs the chosen solver. Unlike calling [`exhaustive::solve`] directly,
    /// an oversized catalog is reported as an error instead of a panic.
    pub fn solve<'a>(
        &self,
        foods: &'a [FoodItem],
        capacity: Capacity,
        grid: WeightGrid,
    ) -> Result<Selection<'a>> {
        match self {
            Algorithm::Exhaustive => {
                if foods.len() >= exhaustive::MAX_EXHAUSTIVE_ITEMS {
                    return Err(anyhow!(
                        "Exhaustive search needs fewer than {} items but got {}; filter the catalog first",
                        exhaustive::MAX_EXHAUSTIVE_ITEMS,
                        foods.len()
                    ));
                }
                Ok(exhaustive::solve(foods, capacity))
            }
            Algorithm::Dynamic => dynamic::solve_on_grid(foods, capacity, grid),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Exhaustive => write!(f, "exhaustive"),
            Algorithm::Dynamic => write!(f, "dynamic"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "exhaustive" => Ok(Algorithm::Exhaustive),
            "dynamic" => Ok(Algorithm::Dynamic),
            _ => Err(anyhow!("Unsupported algorithm '{}'", s)),
        }
    }
}
