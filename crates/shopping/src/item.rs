use std::collections::HashMap;

use cookapp_shared::{DateRange, Recipe, ScheduleEntry};
use serde::{Deserialize, Serialize};

/// One ingredient requirement of one scheduled dish.
///
/// Fields are always populated: a missing name or unit is an empty string,
/// which groups with other empty-string items during aggregation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShoppingItem {
    pub ingredient_name: String,
    pub unit: String,
    pub quantity: f64,
}

impl ShoppingItem {
    pub fn new(ingredient_name: impl Into<String>, unit: impl Into<String>, quantity: f64) -> Self {
        Self {
            ingredient_name: ingredient_name.into(),
            unit: unit.into(),
            quantity,
        }
    }
}

/// Expands scheduled dishes into ingredient requirements.
///
/// Each entry contributes every ingredient of its recipe once, so a dish
/// scheduled twice counts twice. Entries outside `range` are skipped, as are
/// entries whose recipe is unknown. Negative or non-finite quantities become
/// zero.
pub fn items_for_schedule(
    entries: &[ScheduleEntry],
    recipes: &[Recipe],
    range: Option<DateRange>,
) -> Vec<ShoppingItem> {
    let recipes = recipes
        .iter()
        .map(|recipe| (recipe.id, recipe))
        .collect::<HashMap<_, _>>();

    let mut items = Vec::new();
    for entry in entries {
        if range.is_some_and(|range| !range.contains(entry.date)) {
            tracing::debug!(entry_id = entry.id, date = %entry.date, "entry outside shopping range");
            continue;
        }

        let Some(recipe) = recipes.get(&entry.recipe_id) else {
            tracing::warn!(
                entry_id = entry.id,
                recipe_id = entry.recipe_id,
                "scheduled recipe not found, skipping its ingredients"
            );
            continue;
        };

        for ingredient in &recipe.recipe_ingredients {
            let quantity = if ingredient.quantity.is_finite() && ingredient.quantity >= 0.0 {
                ingredient.quantity
            } else {
                tracing::warn!(
                    recipe_id = recipe.id,
                    ingredient_id = ingredient.ingredient_id,
                    quantity = ingredient.quantity,
                    "invalid ingredient quantity treated as zero"
                );
                0.0
            };

            items.push(ShoppingItem {
                ingredient_name: ingredient.ingredient_name().unwrap_or_default().to_owned(),
                unit: ingredient.unit.to_owned(),
                quantity,
            });
        }
    }

    items
}
