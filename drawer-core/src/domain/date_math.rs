//! Month and week boundary arithmetic used by the calendar grid.
//!
//! Everything here is pure. Functions that could leave chrono's supported
//! date range fall back to their input instead of panicking, which only
//! matters hundreds of thousands of years away from today.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use shared::YearMonth;

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Get the number of days in a given month
pub fn days_in_month(month: YearMonth) -> u32 {
    match month.month() {
        2 => if is_leap_year(month.year()) { 29 } else { 28 },
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub fn first_day_of_month(month: YearMonth) -> NaiveDate {
    month.first_day()
}

pub fn last_day_of_month(month: YearMonth) -> NaiveDate {
    let first = month.first_day();
    first
        .checked_add_days(Days::new(u64::from(days_in_month(month) - 1)))
        .unwrap_or(first)
}

/// Number of days to step back from `day` to reach `target`
fn days_back(day: Weekday, target: Weekday) -> u64 {
    u64::from((7 + day.num_days_from_monday() - target.num_days_from_monday()) % 7)
}

/// Most recent `week_start` on or before `date`
pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    date.checked_sub_days(Days::new(days_back(date.weekday(), week_start)))
        .unwrap_or(date)
}

/// Soonest day preceding `week_start` on or after `date`
pub fn end_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let week_end = week_start.pred();
    date.checked_add_days(Days::new(days_back(week_end, date.weekday())))
        .unwrap_or(date)
}

/// Shift a month by `delta` months, rolling the year over as needed
pub fn add_months(month: YearMonth, delta: i32) -> YearMonth {
    let index = i64::from(month.year()) * 12 + i64::from(month.month()) - 1 + i64::from(delta);
    let year = index.div_euclid(12);
    let month_number = index.rem_euclid(12) as u32 + 1;

    i32::try_from(year)
        .ok()
        .and_then(|year| YearMonth::new(year, month_number))
        .unwrap_or(month)
}

pub fn next_month(month: YearMonth) -> YearMonth {
    add_months(month, 1)
}

pub fn previous_month(month: YearMonth) -> YearMonth {
    add_months(month, -1)
}
