use maxcal_algorithms::exhaustive::{self, MAX_EXHAUSTIVE_ITEMS};
use maxcal_algorithms::{Algorithm, WeightGrid};
use maxcal_foods::{Capacity, FoodItem, FoodVector};

fn food(description: &str, weight: f64, calories: f64) -> FoodItem {
    FoodItem::new(description, weight, calories).unwrap()
}

#[test]
fn test_small_catalog() {
    let foods = vec![
        food("A", 2.0, 3.0),
        food("B", 3.0, 4.0),
        food("C", 4.0, 5.0),
        food("D", 5.0, 6.0),
    ];
    let selection = exhaustive::solve(&foods, Capacity::from(5));
    let chosen: Vec<&str> = selection.iter().map(|f| f.description()).collect();
    assert_eq!(chosen, vec!["A", "B"]);
    assert_eq!(selection.total_weight(), 5.0);
    assert_eq!(selection.total_calories(), 7.0);
}

#[test]
fn test_empty_catalog() {
    let foods = FoodVector::new();
    let selection = exhaustive::solve(&foods, Capacity::from(10));
    assert!(selection.is_empty());
    assert_eq!(selection.total_calories(), 0.0);
}

#[test]
fn test_zero_capacity() {
    let foods = vec![food("A", 1.0, 10.0), food("B", 0.5, 3.0)];
    assert!(exhaustive::solve(&foods, Capacity::from(0)).is_empty());
}

#[test]
fn test_single_oversized_item() {
    let foods = vec![food("X", 10.0, 100.0)];
    let selection = exhaustive::solve(&foods, Capacity::from(5));
    assert!(selection.is_empty());
    assert_eq!(selection.total_calories(), 0.0);
}

#[test]
fn test_fractional_weights_fit_exactly() {
    let foods = vec![
        food("half", 0.5, 10.0),
        food("quarter", 0.25, 4.0),
        food("heavy", 1.5, 13.0),
    ];
    let selection = exhaustive::solve(&foods, Capacity::new(0.75).unwrap());
    assert_eq!(selection.total_calories(), 14.0);
}

#[test]
fn test_lower_mask_wins_ties() {
    let foods = vec![food("P", 1.0, 5.0), food("Q", 1.0, 5.0)];
    let selection = exhaustive::solve(&foods, Capacity::from(1));
    let chosen: Vec<&str> = selection.iter().map(|f| f.description()).collect();
    assert_eq!(chosen, vec!["P"]);
}

#[test]
fn test_negative_calories_never_chosen() {
    let foods = vec![food("bad", 1.0, -3.0), food("good", 1.0, 2.0)];
    let selection = exhaustive::solve(&foods, Capacity::from(2));
    let chosen: Vec<&str> = selection.iter().map(|f| f.description()).collect();
    assert_eq!(chosen, vec!["good"]);
}

#[test]
#[should_panic]
fn test_too_many_items() {
    let foods: FoodVector = (0..MAX_EXHAUSTIVE_ITEMS)
        .map(|i| food(&format!("food-{}", i), 1.0, 1.0))
        .collect();
    let _ = exhaustive::solve(&foods, Capacity::from(1));
}

#[test]
fn test_algorithm_rejects_too_many_items() {
    let foods: FoodVector = (0..MAX_EXHAUSTIVE_ITEMS)
        .map(|i| food(&format!("food-{}", i), 1.0, 1.0))
        .collect();
    let err = Algorithm::Exhaustive
        .solve(&foods, Capacity::from(1), WeightGrid::default())
        .unwrap_err();
    assert!(err.to_string().contains("filter the catalog first"));
}
