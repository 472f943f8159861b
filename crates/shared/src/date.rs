use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// ISO calendar-day format used on the wire (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
}

/// Inclusive range of calendar days.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days covered, zero when `end` precedes `start`.
    pub fn len(&self) -> u64 {
        let days = (self.end - self.start).num_days() + 1;
        days.max(0) as u64
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..self.len()).filter_map(|offset| self.start.checked_add_days(Days::new(offset)))
    }

    /// Query pairs understood by the backend's range filters.
    pub fn to_query(&self) -> Vec<(String, String)> {
        vec![
            ("start_date".to_owned(), format_date(self.start)),
            ("end_date".to_owned(), format_date(self.end)),
        ]
    }
}
