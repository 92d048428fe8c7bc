use crate::{FoodItem, FoodVector};
use anyhow::{anyhow, Context, Result};
use std::{fs, path::Path};
use tracing::debug;

pub const FIELD_DELIMITER: char = '^';
pub const DATABASE_HEADER: &str = "description^weight_ounces^calories";

/// Load all the valid food items from a `^`-delimited database file.
///
/// The first line is a header. Rows with unparseable numbers, an empty
/// description or a non-positive weight are skipped. A row with the wrong
/// number of fields fails the whole load.
pub fn load_food_database<P: AsRef<Path>>(path: P) -> Result<FoodVector> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to load food database; cannot open file: {}",
            path.display()
        )
    })?;
    parse_food_database(&contents)
}

pub fn parse_food_database(contents: &str) -> Result<FoodVector> {
    let mut foods = FoodVector::new();
    for (i, line) in contents.lines().enumerate() {
        let line_number = i + 1;
        if line_number == 1 {
            continue;
        }

        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        if fields.len() != 3 {
            return Err(anyhow!(
                "Failed to load food database: Invalid field count at line {}; Want 3 but got {}\nLine: {}",
                line_number,
                fields.len(),
                line
            ));
        }

        let (weight, calories) = match (
            fields[1].trim().parse::<f64>(),
            fields[2].trim().parse::<f64>(),
        ) {
            (Ok(weight), Ok(calories)) => (weight, calories),
            _ => {
                debug!(line_number, "skipping row with unparseable numbers");
                continue;
            }
        };

        match FoodItem::new(fields[0], weight, calories) {
            Ok(food) => foods.push(food),
            Err(e) => debug!(line_number, error = %e, "skipping invalid row"),
        }
    }
    debug!(num_items = foods.len(), "loaded food database");
    Ok(foods)
}

pub fn format_food_database(foods: &[FoodItem]) -> String {
    let mut out = String::from(DATABASE_HEADER);
    out.push('\n');
    for food in foods {
        out.push_str(&format!(
            "{}{}{}{}{}\n",
            food.description(),
            FIELD_DELIMITER,
            food.weight(),
            FIELD_DELIMITER,
            food.calories()
        ));
    }
    out
}

pub fn write_food_database<P: AsRef<Path>>(path: P, foods: &[FoodItem]) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, format_food_database(foods))
        .with_context(|| format!("Failed to write food database: {}", path.display()))
}

/// Returns the first `total_size` foods, in catalog order, whose calories lie
/// in `[min_calories, max_calories]`.
///
/// Used to drop non-positive-calorie foods and to keep the exhaustive search
/// input small.
pub fn filter_food_vector(
    source: &[FoodItem],
    min_calories: f64,
    max_calories: f64,
    total_size: usize,
) -> Result<FoodVector> {
    if total_size == 0 {
        return Err(anyhow!("Invalid total size ({}); must be positive", total_size));
    }
    Ok(source
        .iter()
        .filter(|food| food.calories() >= min_calories && food.calories() <= max_calories)
        .take(total_size)
        .cloned()
        .collect())
}
