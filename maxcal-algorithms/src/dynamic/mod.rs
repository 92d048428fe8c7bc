use crate::WeightGrid;
use anyhow::{anyhow, Result};
use maxcal_foods::{Capacity, FoodItem, Selection};
use tracing::debug;

/// Dynamic programming solver on the default one-unit-per-ounce grid.
pub fn solve<'a>(foods: &'a [FoodItem], capacity: Capacity) -> Result<Selection<'a>> {
    solve_on_grid(foods, capacity, WeightGrid::default())
}

/// Fills the 0/1 knapsack table `T[i][w]` (best calories using the first `i`
/// foods within `w` units) and traces it back from `T[n][capacity]`.
///
/// The returned selection's calories equal `T[n][w]` for the largest budget
/// `w` whose traceback also fits in real ounces; on integral weights that is
/// always the full capacity. Among several optima the traceback favours later
/// foods; items appear in traceback order. Fails only if the table cannot be
/// allocated.
pub fn solve_on_grid<'a>(
    foods: &'a [FoodItem],
    capacity: Capacity,
    grid: WeightGrid,
) -> Result<Selection<'a>> {
    let max_weight = grid.capacity_units(capacity);
    let weights: Vec<usize> = foods.iter().map(|f| grid.item_units(f.weight())).collect();

    let table = CalorieTable::build(foods, &weights, max_weight)?;

    // Summing float ounces can overshoot a capacity the grid accepted
    // (0.1 + 0.2 > 0.3), so fall back to smaller budgets. Budget 0 is empty.
    let mut budget = max_weight;
    let selection = loop {
        let selection = table.traceback(foods, &weights, budget);
        if budget == 0 || selection.fits(capacity) {
            break selection;
        }
        debug!(
            budget,
            total_weight = selection.total_weight(),
            "traceback exceeds capacity in ounces, shrinking budget"
        );
        budget -= 1;
    };

    debug!(
        num_items = foods.len(),
        max_weight,
        budget,
        units_per_ounce = grid.units_per_ounce(),
        optimum = table.get(foods.len(), budget),
        selected = selection.len(),
        "dynamic programming complete"
    );
    Ok(selection)
}

/// Row-major `(n + 1) x (max_weight + 1)` table.
struct CalorieTable {
    cells: Vec<f64>,
    width: usize,
}

impl CalorieTable {
    fn build(foods: &[FoodItem], weights: &[usize], max_weight: usize) -> Result<Self> {
        let width = max_weight
            .checked_add(1)
            .ok_or_else(|| anyhow!("Capacity ({} units) is too large", max_weight))?;
        let num_cells = (foods.len() + 1)
            .checked_mul(width)
            .ok_or_else(|| anyhow!("DP table of {} x {} cells is too large", foods.len() + 1, width))?;

        let mut cells: Vec<f64> = Vec::new();
        cells.try_reserve_exact(num_cells).map_err(|e| {
            anyhow!(
                "Failed to allocate DP table of {} x {} cells: {}",
                foods.len() + 1,
                width,
                e
            )
        })?;

        cells.resize(width, 0.0);
        for (i, food) in foods.iter().enumerate() {
            let prev = i * width;
            for w in 0..width {
                let skip = cells[prev + w];
                let value = if weights[i] <= w {
                    skip.max(food.calories() + cells[prev + w - weights[i]])
                } else {
                    skip
                };
                cells.push(value);
            }
        }

        Ok(Self { cells, width })
    }

    fn get(&self, i: usize, w: usize) -> f64 {
        self.cells[i * self.width + w]
    }

    fn traceback<'a>(&self, foods: &'a [FoodItem], weights: &[usize], budget: usize) -> Selection<'a> {
        let mut selection = Selection::new();
        let mut step = budget;
        for i in (1..=foods.len()).rev() {
            if self.get(i, step) != self.get(i - 1, step) {
                selection.push(&foods[i - 1]);
                step -= weights[i - 1];
            }
        }
        selection
    }
}
