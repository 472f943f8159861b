#![allow(dead_code)]

use std::sync::{
    Mutex,
    atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use chrono::NaiveDate;
use cookapp::Planner;
use cookapp_client::{ClientError, DataSource, Mutations, Result, StatusCode};
use cookapp_shared::{
    DateRange, FridgeItem, Ingredient, IngredientRef, MealType, NewFridgeItem, NewIngredient,
    NewRecipe, NewScheduleEntry, Recipe, RecipeIngredient, ScheduleEntry,
};

/// Backend kept in memory, shaped like the REST resources.
#[derive(Default)]
pub struct InMemoryBackend {
    pub ingredients: Mutex<Vec<Ingredient>>,
    pub recipes: Mutex<Vec<Recipe>>,
    pub meal_types: Mutex<Vec<MealType>>,
    pub fridge: Mutex<Vec<FridgeItem>>,
    pub schedule: Mutex<Vec<ScheduleEntry>>,
    /// Return every entry regardless of the requested range.
    pub ignore_range: bool,
    next_id: AtomicI64,
}

fn not_found(what: &str) -> ClientError {
    ClientError::Status {
        status: StatusCode::NOT_FOUND,
        message: format!("{what} not found"),
    }
}

pub fn date(value: &str) -> NaiveDate {
    value.parse().unwrap()
}

impl InMemoryBackend {
    pub fn seeded() -> Self {
        let backend = Self {
            next_id: AtomicI64::new(100),
            ..Default::default()
        };

        *backend.meal_types.lock().unwrap() = vec![
            MealType {
                id: 1,
                name: "Breakfast".to_string(),
            },
            MealType {
                id: 2,
                name: "Lunch".to_string(),
            },
            MealType {
                id: 3,
                name: "Dinner".to_string(),
            },
        ];

        *backend.ingredients.lock().unwrap() = ["Flour", "Egg", "Milk", "Tomato"]
            .iter()
            .enumerate()
            .map(|(i, name)| Ingredient {
                id: i as i64 + 10,
                name: name.to_string(),
                category: None,
                default_unit: None,
                calories_per_unit: None,
                is_perishable: None,
                shelf_life_days: None,
            })
            .collect();

        *backend.recipes.lock().unwrap() = vec![
            recipe(1, "Pancakes", &[(10, "Flour", 200.0, "g"), (11, "Egg", 2.0, "pcs"), (12, "Milk", 0.3, "L")]),
            recipe(2, "Omelette", &[(11, "Egg", 3.0, "pcs"), (12, "Milk", 50.0, "ml")]),
            recipe(3, "Tomato soup", &[(13, "Tomato", 6.0, "pcs")]),
        ];

        *backend.schedule.lock().unwrap() = vec![
            entry(1, 1, "2025-01-20", 1),
            entry(2, 2, "2025-01-21", 2),
            entry(3, 3, "2025-01-21", 3),
            entry(4, 1, "2025-01-25", 1),
            entry(5, 3, "2025-01-27", 3),
        ];

        backend
    }

    pub fn ignoring_range(mut self) -> Self {
        self.ignore_range = true;
        self
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

pub fn recipe(id: i64, name: &str, ingredients: &[(i64, &str, f64, &str)]) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        description: None,
        instructions: None,
        instruction_link: None,
        servings: Some(2),
        prep_time_min: None,
        cook_time_min: None,
        difficulty: None,
        image_url: None,
        recipe_ingredients: ingredients
            .iter()
            .enumerate()
            .map(|(i, (ingredient_id, name, quantity, unit))| RecipeIngredient {
                id: id * 100 + i as i64,
                recipe_id: id,
                ingredient_id: *ingredient_id,
                quantity: *quantity,
                unit: unit.to_string(),
                optional: false,
                ingredient: Some(IngredientRef {
                    id: *ingredient_id,
                    name: name.to_string(),
                }),
            })
            .collect(),
    }
}

pub fn entry(id: i64, recipe_id: i64, day: &str, meal_type: i64) -> ScheduleEntry {
    ScheduleEntry {
        id,
        recipe_id,
        user_id: Some(1),
        date: date(day),
        meal_type,
        recipe_name: None,
    }
}

pub fn fridge_item(id: i64, name: &str, quantity: f64, unit: &str, expires: Option<&str>) -> FridgeItem {
    FridgeItem {
        id,
        user_id: Some(1),
        ingredient_id: id + 10,
        name: Some(name.to_string()),
        quantity,
        unit: unit.to_string(),
        expiration_date: expires.map(date),
    }
}

/// Planner over the seeded backend, with "today" fixed to Wednesday 2025-01-22.
pub fn planner(backend: InMemoryBackend) -> Planner<InMemoryBackend> {
    Planner::with_today(backend, || date("2025-01-22"))
}

#[async_trait]
impl DataSource for InMemoryBackend {
    async fn ingredients(&self) -> Result<Vec<Ingredient>> {
        Ok(self.ingredients.lock().unwrap().clone())
    }

    async fn recipes(&self) -> Result<Vec<Recipe>> {
        Ok(self.recipes.lock().unwrap().clone())
    }

    async fn meal_types(&self) -> Result<Vec<MealType>> {
        Ok(self.meal_types.lock().unwrap().clone())
    }

    async fn fridge_items(&self) -> Result<Vec<FridgeItem>> {
        Ok(self.fridge.lock().unwrap().clone())
    }

    async fn schedule(&self, range: Option<DateRange>) -> Result<Vec<ScheduleEntry>> {
        let entries = self.schedule.lock().unwrap().clone();

        Ok(match range {
            Some(range) if !self.ignore_range => entries
                .into_iter()
                .filter(|entry| range.contains(entry.date))
                .collect(),
            _ => entries,
        })
    }
}

#[async_trait]
impl Mutations for InMemoryBackend {
    async fn create_ingredient(&self, input: &NewIngredient) -> Result<Ingredient> {
        let ingredient = Ingredient {
            id: self.next_id(),
            name: input.name.clone(),
            category: input.category.clone(),
            default_unit: input.default_unit.clone(),
            calories_per_unit: input.calories_per_unit,
            is_perishable: input.is_perishable,
            shelf_life_days: input.shelf_life_days,
        };
        self.ingredients.lock().unwrap().push(ingredient.clone());
        Ok(ingredient)
    }

    async fn update_ingredient(&self, id: i64, input: &NewIngredient) -> Result<Ingredient> {
        let mut ingredients = self.ingredients.lock().unwrap();
        let ingredient = ingredients
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| not_found("Ingredient"))?;
        ingredient.name = input.name.clone();
        Ok(ingredient.clone())
    }

    async fn delete_ingredient(&self, id: i64) -> Result<()> {
        let mut ingredients = self.ingredients.lock().unwrap();
        let before = ingredients.len();
        ingredients.retain(|i| i.id != id);
        if ingredients.len() == before {
            return Err(not_found("Ingredient"));
        }
        Ok(())
    }

    async fn create_recipe(&self, input: &NewRecipe) -> Result<Recipe> {
        let recipe = recipe(self.next_id(), &input.name, &[]);
        self.recipes.lock().unwrap().push(recipe.clone());
        Ok(recipe)
    }

    async fn update_recipe(&self, id: i64, input: &NewRecipe) -> Result<Recipe> {
        let mut recipes = self.recipes.lock().unwrap();
        let recipe = recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found("Recipe"))?;
        recipe.name = input.name.clone();
        Ok(recipe.clone())
    }

    async fn delete_recipe(&self, id: i64) -> Result<()> {
        self.recipes.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }

    async fn create_fridge_item(&self, input: &NewFridgeItem) -> Result<FridgeItem> {
        let name = self
            .ingredients
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == input.ingredient_id)
            .map(|i| i.name.clone());
        let item = FridgeItem {
            id: self.next_id(),
            user_id: Some(1),
            ingredient_id: input.ingredient_id,
            name,
            quantity: input.quantity,
            unit: input.unit.clone(),
            expiration_date: input.expiration_date,
        };
        self.fridge.lock().unwrap().push(item.clone());
        Ok(item)
    }

    async fn update_fridge_item(&self, id: i64, input: &NewFridgeItem) -> Result<FridgeItem> {
        let mut fridge = self.fridge.lock().unwrap();
        let item = fridge
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| not_found("Fridge item"))?;
        item.quantity = input.quantity;
        item.unit = input.unit.clone();
        item.expiration_date = input.expiration_date;
        Ok(item.clone())
    }

    async fn delete_fridge_item(&self, id: i64) -> Result<()> {
        self.fridge.lock().unwrap().retain(|i| i.id != id);
        Ok(())
    }

    async fn create_schedule_entry(&self, input: &NewScheduleEntry) -> Result<ScheduleEntry> {
        let entry = ScheduleEntry {
            id: self.next_id(),
            recipe_id: input.recipe_id,
            user_id: Some(1),
            date: input.date,
            meal_type: input.meal_type,
            recipe_name: None,
        };
        self.schedule.lock().unwrap().push(entry.clone());
        Ok(entry)
    }

    async fn update_schedule_entry(
        &self,
        id: i64,
        input: &NewScheduleEntry,
    ) -> Result<ScheduleEntry> {
        let mut schedule = self.schedule.lock().unwrap();
        let entry = schedule
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| not_found("Schedule entry"))?;
        entry.recipe_id = input.recipe_id;
        entry.date = input.date;
        entry.meal_type = input.meal_type;
        Ok(entry.clone())
    }

    async fn delete_schedule_entry(&self, id: i64) -> Result<()> {
        let mut schedule = self.schedule.lock().unwrap();
        let before = schedule.len();
        schedule.retain(|e| e.id != id);
        if schedule.len() == before {
            return Err(not_found("Schedule entry"));
        }
        Ok(())
    }
}
