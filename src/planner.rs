//! Application flows tying the backend to the view-model builders.

use std::{collections::HashMap, sync::Arc};

use chrono::NaiveDate;
use cookapp_client::{DataSource, Mutations};
use cookapp_mealplan::{Grid, WeekRange, build_grid, week_range};
use cookapp_shared::{DateRange, FridgeItem, NewScheduleEntry, ScheduleEntry};
use cookapp_shopping::{ShoppingLine, aggregate, items_for_schedule, net_of_fridge};

use crate::error::{AppError, Result};

type Today = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

pub struct Planner<D> {
    source: D,
    today: Today,
}

impl<D> Clone for Planner<D>
where
    D: Clone,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            today: self.today.clone(),
        }
    }
}

impl<D> Planner<D>
where
    D: DataSource + Mutations,
{
    /// Planner whose "today" is the local calendar day.
    pub fn new(source: D) -> Self {
        Self::with_today(source, || chrono::Local::now().date_naive())
    }

    pub fn with_today(source: D, today: impl Fn() -> NaiveDate + Send + Sync + 'static) -> Self {
        Self {
            source,
            today: Arc::new(today),
        }
    }

    pub fn source(&self) -> &D {
        &self.source
    }

    pub fn today(&self) -> NaiveDate {
        (self.today)()
    }

    pub fn week(&self, offset: i64) -> Result<WeekRange> {
        week_range(self.today(), offset)
            .ok_or_else(|| AppError::ValidationError(format!("week offset {offset} is out of range")))
    }

    #[tracing::instrument(skip(self))]
    pub async fn schedule_grid(&self, offset: i64) -> Result<Grid> {
        let week = self.week(offset)?;

        let (meal_types, mut entries, recipes) = tokio::try_join!(
            self.source.meal_types(),
            self.source.schedule(Some(week.range())),
            self.source.recipes(),
        )?;

        let names: HashMap<i64, &str> = recipes
            .iter()
            .map(|recipe| (recipe.id, recipe.name.as_str()))
            .collect();
        for entry in entries.iter_mut().filter(|e| e.recipe_name.is_none()) {
            entry.recipe_name = names.get(&entry.recipe_id).map(|name| name.to_string());
        }

        let grid = build_grid(week, &meal_types, &entries);
        tracing::debug!(
            meal_types = meal_types.len(),
            entries = entries.len(),
            planned = grid.planned_dishes().count(),
            "built schedule grid"
        );

        Ok(grid)
    }

    /// Summed ingredient needs of every dish scheduled within `range`.
    ///
    /// With `subtract_fridge` set, stock still good after the first day of the
    /// range is subtracted.
    #[tracing::instrument(skip(self))]
    pub async fn shopping_list(
        &self,
        range: DateRange,
        subtract_fridge: bool,
    ) -> Result<Vec<ShoppingLine>> {
        if range.is_empty() {
            return Err(AppError::ValidationError(format!(
                "shopping range ends ({}) before it starts ({})",
                range.end, range.start
            )));
        }

        let (entries, recipes) = tokio::try_join!(
            self.source.schedule(Some(range)),
            self.source.recipes(),
        )?;

        let lines = aggregate(items_for_schedule(&entries, &recipes, Some(range)));
        if !subtract_fridge {
            return Ok(lines);
        }

        let fridge = self.source.fridge_items().await?;
        Ok(net_of_fridge(lines, &fridge, range.start))
    }

    #[tracing::instrument(skip(self))]
    pub async fn schedule_dish(
        &self,
        date: NaiveDate,
        meal_type: i64,
        recipe_id: i64,
    ) -> Result<ScheduleEntry> {
        let meal_types = self.source.meal_types().await?;
        if !meal_types.iter().any(|m| m.id == meal_type) {
            return Err(AppError::ValidationError(format!(
                "unknown meal type {meal_type}"
            )));
        }

        let entry = self
            .source
            .create_schedule_entry(&NewScheduleEntry {
                recipe_id,
                date,
                meal_type,
            })
            .await?;

        tracing::info!(entry_id = entry.id, %date, meal_type, recipe_id, "dish scheduled");

        Ok(entry)
    }

    #[tracing::instrument(skip(self))]
    pub async fn unschedule(&self, entry_id: i64) -> Result<()> {
        match self.source.delete_schedule_entry(entry_id).await {
            Ok(()) => {
                tracing::info!(entry_id, "dish unscheduled");
                Ok(())
            }
            Err(err) if err.is_not_found() => {
                Err(AppError::NotFound(format!("schedule entry {entry_id}")))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Fridge contents, each paired with whether it expired before `today`.
    pub async fn fridge(&self, today: NaiveDate) -> Result<Vec<(FridgeItem, bool)>> {
        let mut items = self.source.fridge_items().await?;
        items.sort_by(|a, b| {
            a.expiration_date
                .is_none()
                .cmp(&b.expiration_date.is_none())
                .then(a.expiration_date.cmp(&b.expiration_date))
                .then(a.id.cmp(&b.id))
        });

        Ok(items
            .into_iter()
            .map(|item| {
                let expired = item.is_expired(today);
                (item, expired)
            })
            .collect())
    }

    /// Records a bought shopping line as fridge stock.
    #[tracing::instrument(skip(self, line), fields(ingredient = %line.ingredient_name))]
    pub async fn stock_fridge(
        &self,
        line: &ShoppingLine,
        expiration_date: Option<NaiveDate>,
    ) -> Result<FridgeItem> {
        let ingredients = self.source.ingredients().await?;
        let Some(ingredient) = ingredients
            .iter()
            .find(|i| i.matches_name(&line.ingredient_name))
        else {
            return Err(AppError::NotFound(format!(
                "ingredient {:?}",
                line.ingredient_name
            )));
        };

        let item = self
            .source
            .create_fridge_item(&line.to_fridge_item(ingredient.id, expiration_date))
            .await?;

        tracing::info!(fridge_item_id = item.id, quantity = item.quantity, "fridge stocked");

        Ok(item)
    }
}
