use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::ShoppingLine;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Name,
    Quantity,
    Unit,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Sorts lines for display.
///
/// Text columns compare case-insensitively. Ties fall back to the exact
/// `(name, unit)` key, so equal inputs always produce the same order.
pub fn sort_lines(lines: &mut [ShoppingLine], by: SortBy, order: SortOrder) {
    lines.sort_by(|a, b| {
        let primary = match by {
            SortBy::Name => compare_text(&a.ingredient_name, &b.ingredient_name),
            SortBy::Quantity => a.quantity.total_cmp(&b.quantity),
            SortBy::Unit => compare_text(&a.unit, &b.unit),
        };
        let ordering = primary.then_with(|| a.sort_key().cmp(&b.sort_key()));

        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
