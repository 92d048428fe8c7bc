use maxcal_algorithms::{dynamic, exhaustive, WeightGrid};
use maxcal_foods::{Capacity, FoodItem, FoodVector};
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn food(description: &str, weight: f64, calories: f64) -> FoodItem {
    FoodItem::new(description, weight, calories).unwrap()
}

fn chosen(selection: &maxcal_foods::Selection) -> Vec<String> {
    selection.iter().map(|f| f.description().to_string()).collect()
}

#[test]
fn test_small_catalog_traceback_order() {
    let foods = vec![
        food("A", 2.0, 3.0),
        food("B", 3.0, 4.0),
        food("C", 4.0, 5.0),
        food("D", 5.0, 6.0),
    ];
    let selection = dynamic::solve(&foods, Capacity::from(5)).unwrap();
    assert_eq!(chosen(&selection), vec!["B", "A"]);
    assert_eq!(selection.total_weight(), 5.0);
    assert_eq!(selection.total_calories(), 7.0);
}

#[test]
fn test_empty_catalog() {
    let foods = FoodVector::new();
    let selection = dynamic::solve(&foods, Capacity::from(10)).unwrap();
    assert!(selection.is_empty());
    assert_eq!(selection.total_weight(), 0.0);
}

#[test]
fn test_zero_capacity() {
    let foods = vec![food("A", 1.0, 10.0), food("B", 2.0, 3.0)];
    assert!(dynamic::solve(&foods, Capacity::from(0)).unwrap().is_empty());
}

#[test]
fn test_single_oversized_item() {
    let foods = vec![food("X", 10.0, 100.0)];
    let selection = dynamic::solve(&foods, Capacity::from(5)).unwrap();
    assert!(selection.is_empty());
    assert_eq!(selection.total_calories(), 0.0);
}

#[test]
fn test_oversized_item_is_skipped() {
    let foods = vec![
        food("small", 2.0, 10.0),
        food("huge", 50.0, 1000.0),
        food("medium", 3.0, 12.0),
    ];
    let selection = dynamic::solve(&foods, Capacity::from(5)).unwrap();
    assert_eq!(chosen(&selection), vec!["medium", "small"]);
}

#[test]
fn test_fractional_capacity_truncates() {
    let foods = vec![food("A", 2.0, 3.0), food("B", 3.0, 4.0)];
    let selection = dynamic::solve(&foods, Capacity::new(4.9).unwrap()).unwrap();
    assert_eq!(selection.total_calories(), 4.0);
}

#[test]
fn test_finer_grid_keeps_fractional_weights() {
    let foods = vec![
        food("A", 0.5, 10.0),
        food("B", 0.75, 12.0),
        food("C", 0.25, 9.0),
    ];
    let capacity = Capacity::new(1.25).unwrap();

    // Every item rounds up to one whole ounce on the default grid.
    let coarse = dynamic::solve(&foods, capacity).unwrap();
    assert_eq!(chosen(&coarse), vec!["B"]);

    let fine = dynamic::solve_on_grid(&foods, capacity, WeightGrid::new(4).unwrap()).unwrap();
    assert_eq!(chosen(&fine), vec!["B", "A"]);
    assert_eq!(fine.total_calories(), 22.0);
}

#[test]
fn test_fine_grid_selection_fits_in_ounces() {
    // 0.1 + 0.2 sums past 0.3 in floating point even though the grid accepts both.
    let foods = vec![food("a", 0.1, 1.0), food("b", 0.2, 1.0)];
    let capacity = Capacity::new(0.3).unwrap();

    let selection = dynamic::solve_on_grid(&foods, capacity, WeightGrid::new(10).unwrap()).unwrap();
    assert!(selection.fits(capacity));
    assert_eq!(selection.len(), 1);
    assert_eq!(
        selection.total_calories(),
        exhaustive::solve(&foods, capacity).total_calories()
    );
}

#[test]
fn test_fine_grid_selections_always_fit() {
    let mut rng = SmallRng::seed_from_u64(2024);
    for _ in 0..200 {
        let foods: FoodVector = (0..rng.gen_range(1..8))
            .map(|i| {
                let weight = rng.gen_range(1..=30) as f64 / 10.0;
                let calories = rng.gen_range(0..=50) as f64;
                food(&format!("food-{}", i), weight, calories)
            })
            .collect();
        let capacity = Capacity::new(rng.gen_range(0..=60) as f64 / 10.0).unwrap();

        let selection =
            dynamic::solve_on_grid(&foods, capacity, WeightGrid::new(10).unwrap()).unwrap();
        assert!(selection.fits(capacity));
    }
}

#[test]
fn test_weight_grid_rounding() {
    let grid = WeightGrid::default();
    assert_eq!(grid.item_units(2.0), 2);
    assert_eq!(grid.item_units(2.5), 3);
    assert_eq!(grid.item_units(0.01), 1);
    assert_eq!(grid.capacity_units(Capacity::new(5.9).unwrap()), 5);

    let grid = WeightGrid::new(10).unwrap();
    assert_eq!(grid.item_units(0.25), 3);
    assert_eq!(grid.item_units(0.3), 3);
    assert_eq!(grid.item_units(0.7), 8);
    assert_eq!(grid.item_units(0.31), 4);
    assert_eq!(grid.capacity_units(Capacity::new(0.7).unwrap()), 7);

    assert!(WeightGrid::new(0).is_err());
}

#[test]
fn test_table_too_large() {
    let foods = vec![food("A", 1.0, 1.0), food("B", 1.0, 1.0), food("C", 1.0, 1.0)];
    assert!(dynamic::solve(&foods, Capacity::new(1e30).unwrap()).is_err());
    assert!(dynamic::solve(&foods, Capacity::new(1e18).unwrap()).is_err());
}
