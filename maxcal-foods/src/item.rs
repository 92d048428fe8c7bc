use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// One food item available for purchase.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FoodItem {
    description: String,
    weight: f64,
    calories: f64,
}

/// Ordered catalog of food items. Order fixes solver tie-breaking.
pub type FoodVector = Vec<FoodItem>;

impl FoodItem {
    /// `description` must be non-empty and `weight` (ounces) positive.
    /// Calories are expected to be non-negative but this is not enforced.
    pub fn new(description: impl Into<String>, weight: f64, calories: f64) -> Result<Self> {
        let description = description.into();
        if description.is_empty() {
            return Err(anyhow!("Food description must be non-empty"));
        }
        if !(weight > 0.0) || !weight.is_finite() {
            return Err(anyhow!(
                "Food '{}' has invalid weight ({}); must be positive",
                description,
                weight
            ));
        }
        if !calories.is_finite() {
            return Err(anyhow!(
                "Food '{}' has invalid calories ({})",
                description,
                calories
            ));
        }
        Ok(Self {
            description,
            weight,
            calories,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Weight in ounces.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn calories(&self) -> f64 {
        self.calories
    }
}

/// Maximum total weight, in ounces, that a selection may carry.
///
/// Always finite and non-negative.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, PartialOrd)]
#[serde(try_from = "f64", into = "f64")]
pub struct Capacity(f64);

impl Capacity {
    pub fn new(ounces: f64) -> Result<Self> {
        if ounces.is_nan() || ounces.is_infinite() || ounces < 0.0 {
            return Err(anyhow!(
                "Capacity ({}) must be a finite, non-negative number of ounces",
                ounces
            ));
        }
        Ok(Self(ounces))
    }

    pub fn ounces(&self) -> f64 {
        self.0
    }
}

impl From<u32> for Capacity {
    fn from(ounces: u32) -> Self {
        Self(ounces as f64)
    }
}

impl TryFrom<f64> for Capacity {
    type Error = anyhow::Error;

    fn try_from(ounces: f64) -> Result<Self> {
        Self::new(ounces)
    }
}

impl From<Capacity> for f64 {
    fn from(capacity: Capacity) -> f64 {
        capacity.0
    }
}
