use maxcal_foods::{Capacity, FoodItem, Selection};
use tracing::debug;

/// Subsets are enumerated as bits of a `u64`.
pub const MAX_EXHAUSTIVE_ITEMS: usize = u64::BITS as usize;

/// Examines every subset of `foods` and returns the one with the most
/// calories whose weight fits within `capacity`.
///
/// Subsets are visited in ascending bitmask order (bit `j` is `foods[j]`) and
/// only a strictly better subset replaces the best so far, so lower masks win
/// ties. Runs in `O(2^n * n)`.
///
/// # Panics
///
/// If `foods.len() >= MAX_EXHAUSTIVE_ITEMS`.
pub fn solve<'a>(foods: &'a [FoodItem], capacity: Capacity) -> Selection<'a> {
    let n = foods.len();
    assert!(
        n < MAX_EXHAUSTIVE_ITEMS,
        "exhaustive search needs fewer than {} items, got {}",
        MAX_EXHAUSTIVE_ITEMS,
        n
    );
    let max_weight = capacity.ounces();

    let mut best_mask = 0u64;
    let mut best_calories = 0.0;
    for mask in 0..(1u64 << n) {
        let mut total_weight = 0.0;
        let mut total_calories = 0.0;
        for (j, food) in foods.iter().enumerate() {
            if (mask >> j) & 1 == 1 {
                total_weight += food.weight();
                total_calories += food.calories();
            }
        }
        if total_weight <= max_weight && total_calories > best_calories {
            best_mask = mask;
            best_calories = total_calories;
        }
    }

    let selection: Selection = foods
        .iter()
        .enumerate()
        .filter(|&(j, _)| (best_mask >> j) & 1 == 1)
        .map(|(_, food)| food)
        .collect();
    debug!(
        num_items = n,
        best_mask,
        best_calories,
        "exhaustive search complete"
    );
    selection
}
