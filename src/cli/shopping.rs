use clap::ValueEnum;
use cookapp::error::Result;
use cookapp_shopping::{ShoppingLine, SortBy, SortOrder, sort_lines};

use super::App;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum SortColumn {
    Name,
    Quantity,
    Unit,
}

impl From<SortColumn> for SortBy {
    fn from(column: SortColumn) -> Self {
        match column {
            SortColumn::Name => SortBy::Name,
            SortColumn::Quantity => SortBy::Quantity,
            SortColumn::Unit => SortBy::Unit,
        }
    }
}

pub async fn shopping(
    app: &App,
    offset: i64,
    sort: SortColumn,
    descending: bool,
    net: bool,
) -> Result<()> {
    let week = app.week(offset)?;
    let mut lines = app.shopping_list(week.range(), net).await?;

    let order = if descending {
        SortOrder::Desc
    } else {
        SortOrder::Asc
    };
    sort_lines(&mut lines, sort.into(), order);

    println!("Shopping list for {}", week.label());
    print!("{}", render_lines(&lines));

    Ok(())
}

fn render_lines(lines: &[ShoppingLine]) -> String {
    if lines.is_empty() {
        return "Nothing to buy.\n".to_string();
    }

    let width = lines
        .iter()
        .map(|line| line.ingredient_name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    lines
        .iter()
        .map(|line| {
            let name = if line.ingredient_name.is_empty() {
                "?"
            } else {
                &line.ingredient_name
            };
            format!(
                "  {name:<width$}  {} {}\n",
                format_quantity(line.quantity),
                line.unit
            )
        })
        .collect()
}

/// Up to two decimals, trailing zeros dropped.
pub(crate) fn format_quantity(quantity: f64) -> String {
    let formatted = format!("{quantity:.2}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
