mod date;
mod de;
pub mod fridge;
pub mod ingredient;
pub mod mealplan;
pub mod recipe;

pub use date::*;
pub use fridge::{FridgeItem, NewFridgeItem};
pub use ingredient::{Ingredient, IngredientRef, NewIngredient};
pub use mealplan::{MealType, NewScheduleEntry, ScheduleEntry};
pub use recipe::{NewRecipe, NewRecipeIngredient, Recipe, RecipeIngredient};
