use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Named slot within a day (breakfast, lunch, dinner).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MealType {
    pub id: i64,
    pub name: String,
}

/// One planned dish on a calendar day for a meal type.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScheduleEntry {
    pub id: i64,
    pub recipe_id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub date: NaiveDate,
    pub meal_type: i64,
    #[serde(default)]
    pub recipe_name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewScheduleEntry {
    pub recipe_id: i64,
    pub date: NaiveDate,
    pub meal_type: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_entry_dates_are_calendar_days() {
        let entry: ScheduleEntry = serde_json::from_str(
            r#"{"id": 3, "recipe_id": 7, "user_id": 1, "date": "2025-10-22", "meal_type": 2}"#,
        )
        .unwrap();

        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2025, 10, 22).unwrap());
        assert_eq!(entry.recipe_name, None);

        let body = serde_json::to_value(NewScheduleEntry {
            recipe_id: 7,
            date: entry.date,
            meal_type: 2,
        })
        .unwrap();
        assert_eq!(body["date"], "2025-10-22");
    }
}
