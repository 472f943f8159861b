use chrono::NaiveDate;
use cookapp::error::Result;
use cookapp_mealplan::{Grid, GridAnomaly, WeekRange};

use super::App;

pub fn week(app: &App, offset: i64) -> Result<()> {
    print!("{}", render_week(&app.week(offset)?));

    Ok(())
}

pub async fn grid(app: &App, offset: i64) -> Result<()> {
    let grid = app.schedule_grid(offset).await?;
    print!("{}", render_grid(&grid));

    Ok(())
}

pub async fn schedule(app: &App, date: NaiveDate, meal_type: i64, recipe_id: i64) -> Result<()> {
    let entry = app.schedule_dish(date, meal_type, recipe_id).await?;
    println!("Scheduled entry #{} on {}", entry.id, entry.date);

    Ok(())
}

pub async fn unschedule(app: &App, entry_id: i64) -> Result<()> {
    app.unschedule(entry_id).await?;
    println!("Removed entry #{entry_id}");

    Ok(())
}

fn render_week(week: &WeekRange) -> String {
    let mut out = format!("{}\n", week.label());
    for day in week.days() {
        out.push_str(&format!("  {}\n", day.format("%a %Y-%m-%d")));
    }

    out
}

fn render_grid(grid: &Grid) -> String {
    let mut out = format!("Week of {}\n", grid.week.label());

    if grid.meal_types.is_empty() {
        out.push_str("No meal types defined.\n");
        return out;
    }

    for day in &grid.days {
        out.push_str(&format!("\n{}\n", day.date.format("%A %b %-d")));
        for cell in &day.cells {
            let dish = cell
                .dish
                .as_ref()
                .map(|dish| dish.display_name())
                .unwrap_or_else(|| "-".to_string());
            out.push_str(&format!("  {:<12} {}\n", cell.meal_type.name, dish));
        }
    }

    for anomaly in &grid.anomalies {
        out.push_str(&format!("\nwarning: {}\n", describe(anomaly)));
    }

    out
}

fn describe(anomaly: &GridAnomaly) -> String {
    match anomaly {
        GridAnomaly::DuplicateEntries {
            date,
            meal_type,
            kept,
            dropped,
        } => format!(
            "{} entries share {date} meal type {meal_type}; showing #{kept}, hiding {:?}",
            dropped.len() + 1,
            dropped
        ),
        GridAnomaly::DuplicateMealType { meal_type } => {
            format!("meal type {meal_type} is listed more than once")
        }
        GridAnomaly::Unplaced {
            entry_id,
            date,
            meal_type,
        } => format!("entry #{entry_id} ({date}, meal type {meal_type}) does not fit this week"),
    }
}
