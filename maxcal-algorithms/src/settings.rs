use crate::{Algorithm, WeightGrid};
use anyhow::Result;
use maxcal_foods::{filter_food_vector, Capacity, FoodItem, Selection};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SolverSettings {
    pub algorithm: Algorithm,
    pub capacity: Capacity,
    #[serde(default = "default_units_per_ounce")]
    pub units_per_ounce: u32,
    #[serde(default)]
    pub filter: Option<FilterSettings>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FilterSettings {
    pub min_calories: f64,
    pub max_calories: f64,
    pub max_items: usize,
}

fn default_units_per_ounce() -> u32 {
    1
}

impl SolverSettings {
    pub fn grid(&self) -> Result<WeightGrid> {
        WeightGrid::new(self.units_per_ounce)
    }

    /// The catalog the solver should see: filtered if a filter is configured,
    /// otherwise `foods` itself.
    pub fn prepare<'a>(&self, foods: &'a [FoodItem]) -> Result<Cow<'a, [FoodItem]>> {
        match &self.filter {
            Some(filter) => Ok(Cow::Owned(filter_food_vector(
                foods,
                filter.min_calories,
                filter.max_calories,
                filter.max_items,
            )?)),
            None => Ok(Cow::Borrowed(foods)),
        }
    }

    pub fn solve<'a>(&self, foods: &'a [FoodItem]) -> Result<Selection<'a>> {
        self.algorithm.solve(foods, self.capacity, self.grid()?)
    }
}
