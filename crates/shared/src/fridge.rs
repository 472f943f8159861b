use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FridgeItem {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub ingredient_id: i64,
    /// Ingredient name, joined in by the list endpoint.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::de::null_as_zero")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "crate::de::null_as_empty")]
    pub unit: String,
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
}

impl FridgeItem {
    /// Expired once the expiration day is strictly before `today`.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiration_date.is_some_and(|date| date < today)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewFridgeItem {
    pub ingredient_id: i64,
    pub quantity: f64,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,
}
