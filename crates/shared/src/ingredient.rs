use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub default_unit: Option<String>,
    #[serde(default)]
    pub calories_per_unit: Option<f64>,
    #[serde(default)]
    pub is_perishable: Option<bool>,
    #[serde(default)]
    pub shelf_life_days: Option<i64>,
}

impl Ingredient {
    /// Case-insensitive name match, the way users type ingredient names.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NewIngredient {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_per_unit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_perishable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shelf_life_days: Option<i64>,
}

/// Short ingredient form nested in recipe rows.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct IngredientRef {
    pub id: i64,
    #[serde(default, deserialize_with = "crate::de::null_as_empty")]
    pub name: String,
}
