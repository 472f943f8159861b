use chrono::{Datelike, Days, NaiveDate, Weekday};
use cookapp_shared::DateRange;
use serde::{Deserialize, Serialize};

pub const DAYS_PER_WEEK: usize = 7;

/// Monday-to-Sunday span of seven consecutive calendar days.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekRange {
    pub monday: NaiveDate,
    pub sunday: NaiveDate,
}

impl WeekRange {
    /// Week starting on `monday`, or `None` when the date is not a Monday
    /// or the week runs past the supported calendar.
    pub fn starting(monday: NaiveDate) -> Option<Self> {
        if monday.weekday() != Weekday::Mon {
            return None;
        }

        let sunday = monday.checked_add_days(Days::new(6))?;

        Some(Self { monday, sunday })
    }

    pub fn days(&self) -> [NaiveDate; DAYS_PER_WEEK] {
        let mut days = [self.monday; DAYS_PER_WEEK];
        for (day, date) in days.iter_mut().zip(self.monday.iter_days()) {
            *day = date;
        }

        days
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.monday <= date && date <= self.sunday
    }

    pub fn next(&self) -> Option<Self> {
        self.shift(1)
    }

    pub fn previous(&self) -> Option<Self> {
        self.shift(-1)
    }

    pub fn shift(&self, weeks: i64) -> Option<Self> {
        Self::starting(add_days(self.monday, weeks.checked_mul(7)?)?)
    }

    pub fn range(&self) -> DateRange {
        DateRange::new(self.monday, self.sunday)
    }

    /// Human readable heading, e.g. `Jan 20, 2025 – Jan 26, 2025`.
    pub fn label(&self) -> String {
        format!(
            "{} – {}",
            self.monday.format("%b %-d, %Y"),
            self.sunday.format("%b %-d, %Y")
        )
    }
}

impl From<WeekRange> for DateRange {
    fn from(week: WeekRange) -> Self {
        week.range()
    }
}

/// Week `week_offset` weeks away from the one containing `reference`.
///
/// Days are numbered Sunday = 0 through Saturday = 6 and a Sunday belongs to
/// the week that started six days earlier. Any offset is accepted; `None`
/// means the resulting week falls outside the calendar supported by
/// [`NaiveDate`].
pub fn week_range(reference: NaiveDate, week_offset: i64) -> Option<WeekRange> {
    let day_of_week = i64::from(reference.weekday().num_days_from_sunday());
    let diff_to_monday = if day_of_week == 0 { -6 } else { 1 } - day_of_week;
    let days = week_offset.checked_mul(7)?.checked_add(diff_to_monday)?;

    WeekRange::starting(add_days(reference, days)?)
}

/// Current week and the `count - 1` weeks after it.
pub fn upcoming_weeks(reference: NaiveDate, count: usize) -> Vec<WeekRange> {
    (0..count as i64)
        .map_while(|offset| week_range(reference, offset))
        .collect()
}

fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}
