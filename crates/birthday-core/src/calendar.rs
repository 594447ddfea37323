//! The special-date card: date facts and a month calendar grid.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Weekday column headers, Sunday first.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialDate {
    pub date: NaiveDate,
    pub caption: String,
    pub note: String,
}

impl Default for SpecialDate {
    fn default() -> Self {
        Self {
            // Always valid; from_ymd_opt only fails for out-of-range values
            date: NaiveDate::from_ymd_opt(2004, 3, 28).unwrap_or_default(),
            caption: "The day you were born".to_string(),
            note: "A Wonderful Day!".to_string(),
        }
    }
}

impl SpecialDate {
    /// e.g. "March 28, 2004"
    pub fn long_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }

    /// e.g. "Sunday"
    pub fn weekday_name(&self) -> String {
        self.date.format("%A").to_string()
    }

    /// e.g. "March 2004"
    pub fn month_title(&self) -> String {
        self.date.format("%B %Y").to_string()
    }

    /// Whole years elapsed as of `today`; zero if `today` is earlier.
    pub fn years_since(&self, today: NaiveDate) -> u32 {
        today.years_since(self.date).unwrap_or(0)
    }

    pub fn grid(&self) -> MonthGrid {
        MonthGrid::for_date(self.date)
    }
}

/// Sunday-first weeks of one month, padded with `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub weeks: Vec<[Option<u32>; 7]>,
    pub highlight: u32,
}

impl MonthGrid {
    pub fn for_date(date: NaiveDate) -> Self {
        let first = date.with_day(1).unwrap_or(date);
        let next_month = if first.month() == 12 {
            NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
        };
        let days_in_month = next_month
            .map(|next| (next - first).num_days() as u32)
            .unwrap_or(31);

        let offset = first.weekday().num_days_from_sunday() as usize;
        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut column = offset;

        for day in 1..=days_in_month {
            week[column] = Some(day);
            column += 1;
            if column == 7 {
                weeks.push(week);
                week = [None; 7];
                column = 0;
            }
        }
        if column > 0 {
            weeks.push(week);
        }

        Self {
            weeks,
            highlight: date.day(),
        }
    }

    pub fn is_highlight(&self, day: u32) -> bool {
        self.highlight == day
    }
}
