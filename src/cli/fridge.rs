use chrono::NaiveDate;
use cookapp::error::Result;
use cookapp_shared::FridgeItem;
use cookapp_shopping::ShoppingLine;

use super::{App, shopping::format_quantity};

pub async fn fridge(app: &App) -> Result<()> {
    let items = app.fridge(app.today()).await?;
    print!("{}", render_fridge(&items));

    Ok(())
}

pub async fn stock(
    app: &App,
    name: String,
    quantity: f64,
    unit: String,
    expires: Option<NaiveDate>,
) -> Result<()> {
    let line = ShoppingLine {
        ingredient_name: name,
        unit,
        quantity,
    };
    let item = app.stock_fridge(&line, expires).await?;

    println!(
        "Stocked {} {} of {}",
        format_quantity(item.quantity),
        item.unit,
        line.ingredient_name
    );

    Ok(())
}

fn render_fridge(items: &[(FridgeItem, bool)]) -> String {
    if items.is_empty() {
        return "The fridge is empty.\n".to_string();
    }

    items
        .iter()
        .map(|(item, expired)| {
            let name = item
                .name
                .clone()
                .unwrap_or_else(|| format!("Ingredient #{}", item.ingredient_id));
            let expiry = match (item.expiration_date, expired) {
                (Some(date), true) => format!("expired {date}"),
                (Some(date), false) => format!("until {date}"),
                (None, _) => "no expiry".to_string(),
            };

            format!(
                "  {name}  {} {}  ({expiry})\n",
                format_quantity(item.quantity),
                item.unit
            )
        })
        .collect()
}
