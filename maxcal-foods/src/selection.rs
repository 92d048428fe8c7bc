use crate::{Capacity, FoodItem};
use anyhow::{anyhow, Result};
use serde::Serialize;
use std::{collections::HashSet, fmt};

/// A subset of a catalog chosen by a solver.
///
/// Items are borrowed from the catalog, never copied.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Selection<'a> {
    items: Vec<&'a FoodItem>,
}

impl<'a> Selection<'a> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: &'a FoodItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[&'a FoodItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a FoodItem> + '_ {
        self.items.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(|item| item.weight()).sum()
    }

    pub fn total_calories(&self) -> f64 {
        self.items.iter().map(|item| item.calories()).sum()
    }

    pub fn fits(&self, capacity: Capacity) -> bool {
        self.total_weight() <= capacity.ounces()
    }
}

impl<'a> FromIterator<&'a FoodItem> for Selection<'a> {
    fn from_iter<I: IntoIterator<Item = &'a FoodItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Total weight and calories of a list of food items.
pub fn sum_food_vector<'a, I>(foods: I) -> (f64, f64)
where
    I: IntoIterator<Item = &'a FoodItem>,
{
    foods
        .into_iter()
        .fold((0.0, 0.0), |(weight, calories), food| {
            (weight + food.weight(), calories + food.calories())
        })
}

impl fmt::Display for Selection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "*** food Vector ***")?;
        if self.is_empty() {
            return write!(f, "[empty food list]");
        }
        for food in self.iter() {
            writeln!(
                f,
                "Ye olde {} ==> Weight of {} ounces; calories = {}",
                food.description(),
                food.weight(),
                food.calories()
            )?;
        }
        let (total_weight, total_calories) = sum_food_vector(self.iter());
        writeln!(f, "> Grand total weight: {} ounces", total_weight)?;
        write!(f, "> Grand total calories: {}", total_calories)
    }
}

/// Checks that `indices` name a feasible subset of `foods` and returns its
/// total calories.
pub fn verify_selection(foods: &[FoodItem], indices: &[usize], capacity: Capacity) -> Result<f64> {
    let unique: HashSet<usize> = indices.iter().cloned().collect();
    if unique.len() != indices.len() {
        return Err(anyhow!("Duplicate items selected."));
    }

    let selection = indices
        .iter()
        .map(|&i| {
            foods
                .get(i)
                .ok_or_else(|| anyhow!("Item ({}) is out of bounds", i))
        })
        .collect::<Result<Selection>>()?;

    if !selection.fits(capacity) {
        return Err(anyhow!(
            "Total weight ({}) exceeded capacity ({})",
            selection.total_weight(),
            capacity.ounces()
        ));
    }
    Ok(selection.total_calories())
}
