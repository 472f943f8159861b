use serde::{Deserialize, Serialize};

use crate::IngredientRef;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub instruction_link: Option<String>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub prep_time_min: Option<u32>,
    #[serde(default)]
    pub cook_time_min: Option<u32>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub recipe_ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    pub fn total_time_min(&self) -> Option<u32> {
        match (self.prep_time_min, self.cook_time_min) {
            (None, None) => None,
            (prep, cook) => Some(prep.unwrap_or(0).saturating_add(cook.unwrap_or(0))),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RecipeIngredient {
    pub id: i64,
    pub recipe_id: i64,
    pub ingredient_id: i64,
    #[serde(default, deserialize_with = "crate::de::null_as_zero")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "crate::de::null_as_empty")]
    pub unit: String,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub ingredient: Option<IngredientRef>,
}

impl RecipeIngredient {
    pub fn ingredient_name(&self) -> Option<&str> {
        self.ingredient.as_ref().map(|i| i.name.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NewRecipe {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub ingredients: Vec<NewRecipeIngredient>,
}

/// Ingredients are resolved by name on the backend when a recipe is written.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewRecipeIngredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}
