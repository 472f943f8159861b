use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use cookapp_shared::{MealType, ScheduleEntry};
use serde::{Deserialize, Serialize};

use crate::{DAYS_PER_WEEK, WeekRange};

/// Dish placed in a grid cell.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlannedDish {
    pub entry_id: i64,
    pub recipe_id: i64,
    pub recipe_name: Option<String>,
}

impl PlannedDish {
    pub fn display_name(&self) -> String {
        match &self.recipe_name {
            Some(name) if !name.trim().is_empty() => name.to_owned(),
            _ => format!("Recipe #{}", self.recipe_id),
        }
    }
}

impl From<&ScheduleEntry> for PlannedDish {
    fn from(entry: &ScheduleEntry) -> Self {
        Self {
            entry_id: entry.id,
            recipe_id: entry.recipe_id,
            recipe_name: entry.recipe_name.to_owned(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GridCell {
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub dish: Option<PlannedDish>,
}

impl GridCell {
    pub fn is_empty(&self) -> bool {
        self.dish.is_none()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GridDay {
    pub date: NaiveDate,
    /// One cell per meal type, in the order the meal types were supplied.
    pub cells: Vec<GridCell>,
}

/// Schedule data that could not be represented one-to-one in the grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum GridAnomaly {
    /// Several entries share one (date, meal type) slot; the lowest id is shown.
    DuplicateEntries {
        date: NaiveDate,
        meal_type: i64,
        kept: i64,
        dropped: Vec<i64>,
    },
    /// The same meal type id was supplied more than once; every column for it
    /// shows the same dishes.
    DuplicateMealType { meal_type: i64 },
    /// Entry outside the week or for a meal type that was not supplied.
    Unplaced {
        entry_id: i64,
        date: NaiveDate,
        meal_type: i64,
    },
}

/// Dense week x meal-type matrix with explicit empty cells.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Grid {
    pub week: WeekRange,
    pub meal_types: Vec<MealType>,
    pub days: Vec<GridDay>,
    pub anomalies: Vec<GridAnomaly>,
}

impl Grid {
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.days.iter().flat_map(|day| day.cells.iter())
    }

    /// Always `7 * meal_types.len()`.
    pub fn len(&self) -> usize {
        self.days.iter().map(|day| day.cells.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell for `day_index` (Monday = 0) and a meal type id.
    pub fn cell(&self, day_index: usize, meal_type: i64) -> Option<&GridCell> {
        self.days
            .get(day_index)?
            .cells
            .iter()
            .find(|cell| cell.meal_type.id == meal_type)
    }

    pub fn cell_at(&self, date: NaiveDate, meal_type: i64) -> Option<&GridCell> {
        let index = (date - self.week.monday).num_days();
        if !(0..DAYS_PER_WEEK as i64).contains(&index) {
            return None;
        }

        self.cell(index as usize, meal_type)
    }

    pub fn planned_dishes(&self) -> impl Iterator<Item = &PlannedDish> {
        self.cells().filter_map(|cell| cell.dish.as_ref())
    }

    pub fn has_anomalies(&self) -> bool {
        !self.anomalies.is_empty()
    }
}

/// Builds the grid for the week starting at `week.monday`.
///
/// Every (day, meal type) pair gets a cell. When several entries share a slot
/// the one with the lowest id wins and the rest are reported as
/// [`GridAnomaly::DuplicateEntries`]; entries that fit no slot are reported as
/// [`GridAnomaly::Unplaced`]. A meal type listed twice gets two columns
/// showing the same dishes.
pub fn build_grid(week: WeekRange, meal_types: &[MealType], entries: &[ScheduleEntry]) -> Grid {
    let mut slots: BTreeMap<(NaiveDate, i64), Vec<&ScheduleEntry>> = BTreeMap::new();
    for entry in entries {
        slots
            .entry((entry.date, entry.meal_type))
            .or_default()
            .push(entry);
    }
    for matches in slots.values_mut() {
        matches.sort_by_key(|entry| entry.id);
    }

    let mut anomalies = Vec::new();
    let mut seen_meal_types = BTreeSet::new();
    for meal_type in meal_types {
        if !seen_meal_types.insert(meal_type.id) {
            tracing::warn!(meal_type = meal_type.id, "meal type supplied more than once");
            anomalies.push(GridAnomaly::DuplicateMealType {
                meal_type: meal_type.id,
            });
        }
    }

    let mut placed = BTreeSet::new();
    let days = week
        .days()
        .into_iter()
        .map(|date| {
            let cells = meal_types
                .iter()
                .map(|meal_type| {
                    let key = (date, meal_type.id);
                    let matches = slots.get(&key).map(Vec::as_slice).unwrap_or_default();

                    if matches.len() > 1 && !placed.contains(&key) {
                        let kept = matches[0].id;
                        let dropped = matches[1..].iter().map(|entry| entry.id).collect();
                        tracing::warn!(
                            %date,
                            meal_type = meal_type.id,
                            kept,
                            ?dropped,
                            "multiple schedule entries share one slot"
                        );
                        anomalies.push(GridAnomaly::DuplicateEntries {
                            date,
                            meal_type: meal_type.id,
                            kept,
                            dropped,
                        });
                    }
                    placed.insert(key);

                    GridCell {
                        date,
                        meal_type: meal_type.clone(),
                        dish: matches.first().map(|entry| PlannedDish::from(*entry)),
                    }
                })
                .collect();

            GridDay { date, cells }
        })
        .collect();

    slots.retain(|key, _| !placed.contains(key));

    let mut leftovers = slots.into_values().flatten().collect::<Vec<_>>();
    leftovers.sort_by_key(|entry| entry.id);
    for entry in leftovers {
        tracing::warn!(
            entry_id = entry.id,
            date = %entry.date,
            meal_type = entry.meal_type,
            "schedule entry does not fit the week grid"
        );
        anomalies.push(GridAnomaly::Unplaced {
            entry_id: entry.id,
            date: entry.date,
            meal_type: entry.meal_type,
        });
    }

    Grid {
        week,
        meal_types: meal_types.to_vec(),
        days,
        anomalies,
    }
}
