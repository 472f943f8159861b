use std::collections::HashMap;

use chrono::NaiveDate;
use cookapp_shared::NewFridgeItem;
use serde::{Deserialize, Serialize};

use crate::ShoppingItem;

/// Summed requirement for one (ingredient name, unit) pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShoppingLine {
    pub ingredient_name: String,
    pub unit: String,
    pub quantity: f64,
}

impl ShoppingLine {
    /// Stable ordering key; unique within one aggregation result.
    pub fn sort_key(&self) -> (&str, &str) {
        (&self.ingredient_name, &self.unit)
    }

    /// Fridge entry stocking exactly this line.
    pub fn to_fridge_item(
        &self,
        ingredient_id: i64,
        expiration_date: Option<NaiveDate>,
    ) -> NewFridgeItem {
        NewFridgeItem {
            ingredient_id,
            quantity: self.quantity,
            unit: self.unit.to_owned(),
            expiration_date,
        }
    }
}

/// Compensated running sum, so long runs of fractional quantities stay
/// within double precision of the exact total.
#[derive(Default, Clone, Copy)]
struct Sum {
    total: f64,
    compensation: f64,
}

impl Sum {
    fn add(&mut self, value: f64) {
        let total = self.total + value;
        if self.total.abs() >= value.abs() {
            self.compensation += (self.total - total) + value;
        } else {
            self.compensation += (value - total) + self.total;
        }
        self.total = total;
    }

    fn value(self) -> f64 {
        self.total + self.compensation
    }
}

/// Collapses items into one line per (ingredient name, unit).
///
/// Names and units are compared exactly: the same ingredient in two units
/// stays on two lines and no conversion is attempted. Zero quantities still
/// produce a line. Lines come back ordered by [`ShoppingLine::sort_key`].
pub fn aggregate<I>(items: I) -> Vec<ShoppingLine>
where
    I: IntoIterator<Item = ShoppingItem>,
{
    let mut groups: HashMap<(String, String), Sum> = HashMap::new();

    for item in items {
        // NaN and negatives never reach the sum
        let quantity = item.quantity.max(0.0);
        groups
            .entry((item.ingredient_name, item.unit))
            .or_default()
            .add(quantity);
    }

    let mut lines = groups
        .into_iter()
        .map(|((ingredient_name, unit), sum)| ShoppingLine {
            ingredient_name,
            unit,
            quantity: sum.value(),
        })
        .collect::<Vec<_>>();

    lines.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    lines
}
