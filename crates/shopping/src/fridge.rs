use std::collections::HashMap;

use chrono::NaiveDate;
use cookapp_shared::FridgeItem;

use crate::ShoppingLine;

/// Subtracts usable fridge stock from shopping lines.
///
/// Stock counts when it matches a line's ingredient name and unit exactly and
/// is still good after `as_of`. Stock without an expiration date also counts,
/// unlike the backend's own shopping query, whose `expiration_date > start`
/// filter drops undated rows. Quantities never drop below zero and fully
/// covered lines are kept at zero.
pub fn net_of_fridge(
    lines: Vec<ShoppingLine>,
    fridge: &[FridgeItem],
    as_of: NaiveDate,
) -> Vec<ShoppingLine> {
    let mut stock: HashMap<(&str, &str), f64> = HashMap::new();
    for item in fridge {
        let Some(name) = item.name.as_deref() else {
            continue;
        };

        if item.expiration_date.is_some_and(|date| date <= as_of) {
            continue;
        }

        *stock.entry((name, item.unit.as_str())).or_default() += item.quantity.max(0.0);
    }

    lines
        .into_iter()
        .map(|mut line| {
            let available = stock.get(&line.sort_key()).copied();
            if let Some(available) = available {
                line.quantity = (line.quantity - available).max(0.0);
            }
            line
        })
        .collect()
}
