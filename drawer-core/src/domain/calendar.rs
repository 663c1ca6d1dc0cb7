//! Calendar grid generation for the date picker.
//!
//! Turns a month into whole weeks of [`DateCell`]s, including the padding
//! days borrowed from the neighbouring months. The UI only paints what this
//! module returns; it never does date math of its own.

use chrono::{Days, NaiveDate, Weekday};
use shared::{CalendarGrid, DateCell, Week, YearMonth};

use super::date_math::{end_of_week, first_day_of_month, last_day_of_month, start_of_week};

/// First and last visible date of the grid for `month`
fn grid_bounds(month: YearMonth, week_start: Weekday) -> (NaiveDate, NaiveDate) {
    let month_start = first_day_of_month(month);
    let month_end = last_day_of_month(month);
    (
        start_of_week(month_start, week_start),
        end_of_week(month_end, week_start),
    )
}

/// Lay out `month` as rows of seven days starting on `week_start`.
///
/// `today` and `selected_date` only affect the cell flags. A month that
/// already starts on `week_start` gets no leading padding, and one that ends
/// on the day before it gets no trailing padding.
pub fn compute_grid(
    month: YearMonth,
    today: NaiveDate,
    selected_date: NaiveDate,
    week_start: Weekday,
) -> CalendarGrid {
    let (grid_start, grid_end) = grid_bounds(month, week_start);

    let mut rows: Vec<Week> = Vec::with_capacity(6);
    let mut week_first = grid_start;

    while week_first <= grid_end {
        let week: Week = std::array::from_fn(|offset| {
            let date = week_first
                .checked_add_days(Days::new(offset as u64))
                .unwrap_or(week_first);
            DateCell {
                date,
                is_today: date == today,
                is_selected: date == selected_date,
                in_current_month: month.contains(date),
            }
        });
        rows.push(week);

        match week_first.checked_add_days(Days::new(7)) {
            Some(next) => week_first = next,
            None => break,
        }
    }

    log::debug!(
        "🗓️ Grid for {}: {} weeks from {} to {}",
        month,
        rows.len(),
        grid_start,
        grid_end
    );

    CalendarGrid {
        month,
        week_start,
        rows,
    }
}

/// Number of week rows the grid for `month` needs (4, 5 or 6)
pub fn weeks_in_month(month: YearMonth, week_start: Weekday) -> usize {
    let (grid_start, grid_end) = grid_bounds(month, week_start);
    ((grid_end - grid_start).num_days() as usize + 1) / 7
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::date_math::{days_in_month, next_month};
    use chrono::Datelike;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn all_months() -> impl Iterator<Item = YearMonth> {
        (2000..=2030).flat_map(|year| (1..=12).map(move |month| ym(year, month)))
    }

    #[test]
    fn test_april_2024_monday_start() {
        let today = date(2024, 4, 10);
        let grid = compute_grid(ym(2024, 4), today, today, Weekday::Mon);

        assert_eq!(grid.rows.len(), 5);
        assert_eq!(grid.day_count(), 35);
        assert_eq!(grid.first_cell().unwrap().date, date(2024, 4, 1));
        assert_eq!(grid.last_cell().unwrap().date, date(2024, 5, 5));

        // No leading padding since April 1st is a Monday
        assert!(grid.rows[0].iter().all(|cell| cell.in_current_month));
        // Trailing padding from May
        let last_week = &grid.rows[4];
        assert!(last_week[0].in_current_month); // April 29
        assert!(last_week[1].in_current_month); // April 30
        assert!(last_week[2..].iter().all(|cell| !cell.in_current_month));
    }

    #[test]
    fn test_four_week_month() {
        // February 2021 starts on a Monday and ends on a Sunday
        let today = date(2021, 2, 1);
        let grid = compute_grid(ym(2021, 2), today, today, Weekday::Mon);

        assert_eq!(grid.rows.len(), 4);
        assert!(grid.cells().all(|cell| cell.in_current_month));
    }

    #[test]
    fn test_six_week_month() {
        // September 2024 starts on a Sunday and ends on a Monday
        let today = date(2024, 9, 15);
        let grid = compute_grid(ym(2024, 9), today, today, Weekday::Mon);

        assert_eq!(grid.rows.len(), 6);
        assert_eq!(grid.first_cell().unwrap().date, date(2024, 8, 26));
        assert_eq!(grid.last_cell().unwrap().date, date(2024, 10, 6));
        assert_eq!(weeks_in_month(ym(2024, 9), Weekday::Mon), 6);
    }

    #[test]
    fn test_row_count_and_width_for_all_months() {
        let today = date(2024, 4, 10);
        for week_start in [Weekday::Mon, Weekday::Sun] {
            for month in all_months() {
                let grid = compute_grid(month, today, today, week_start);
                let rows = grid.rows.len();
                assert!((4..=6).contains(&rows), "{} has {} rows", month, rows);
                assert_eq!(grid.cells().count(), rows * 7);
                assert_eq!(weeks_in_month(month, week_start), rows);
            }
        }
    }

    #[test]
    fn test_every_month_day_appears_exactly_once() {
        let today = date(2024, 4, 10);
        for month in all_months() {
            let grid = compute_grid(month, today, today, Weekday::Mon);
            for day in 1..=days_in_month(month) {
                let d = date(month.year(), month.month(), day);
                let matches = grid
                    .cells()
                    .filter(|cell| cell.date == d && cell.in_current_month)
                    .count();
                assert_eq!(matches, 1, "{} in {}", d, month);
            }
            let in_month = grid.cells().filter(|cell| cell.in_current_month).count();
            assert_eq!(in_month as u32, days_in_month(month));
        }
    }

    #[test]
    fn test_first_and_last_weekday_follow_week_start() {
        let today = date(2024, 4, 10);
        for week_start in [Weekday::Mon, Weekday::Sun, Weekday::Sat] {
            for month in all_months() {
                let grid = compute_grid(month, today, today, week_start);
                assert_eq!(grid.first_cell().unwrap().date.weekday(), week_start);
                assert_eq!(grid.last_cell().unwrap().date.weekday(), week_start.pred());
            }
        }
    }

    #[test]
    fn test_cells_are_consecutive_days() {
        let today = date(2024, 4, 10);
        let grid = compute_grid(ym(2024, 12), today, today, Weekday::Mon);
        let dates: Vec<NaiveDate> = grid.cells().map(|cell| cell.date).collect();
        for pair in dates.windows(2) {
            assert_eq!(pair[0].succ_opt().unwrap(), pair[1]);
        }
    }

    #[test]
    fn test_today_and_selected_flags() {
        let today = date(2024, 4, 10);
        let selected = date(2024, 4, 3);
        let grid = compute_grid(ym(2024, 4), today, selected, Weekday::Mon);

        let today_cells: Vec<&DateCell> = grid.cells().filter(|cell| cell.is_today).collect();
        assert_eq!(today_cells.len(), 1);
        assert_eq!(today_cells[0].date, today);

        assert_eq!(grid.selected_cell().unwrap().date, selected);
        assert_eq!(grid.cells().filter(|cell| cell.is_selected).count(), 1);
    }

    #[test]
    fn test_selected_padding_day_is_flagged() {
        // May 2nd is visible as padding in the April grid
        let today = date(2024, 4, 10);
        let selected = date(2024, 5, 2);
        let grid = compute_grid(ym(2024, 4), today, selected, Weekday::Mon);

        let cell = grid.selected_cell().unwrap();
        assert_eq!(cell.date, selected);
        assert!(!cell.in_current_month);
    }

    #[test]
    fn test_selected_outside_grid() {
        let today = date(2024, 4, 10);
        let grid = compute_grid(ym(2024, 6), today, today, Weekday::Mon);

        assert!(grid.selected_cell().is_none());
        assert!(grid.cells().all(|cell| !cell.is_today));
    }

    #[test]
    fn test_grid_is_deterministic() {
        let today = date(2024, 4, 10);
        let selected = date(2024, 4, 20);
        let first = compute_grid(ym(2024, 4), today, selected, Weekday::Mon);
        let second = compute_grid(ym(2024, 4), today, selected, Weekday::Mon);
        assert_eq!(first, second);
    }

    #[test]
    fn test_paging_grid_keeps_month_metadata() {
        let today = date(2024, 12, 31);
        let grid = compute_grid(next_month(ym(2024, 12)), today, today, Weekday::Mon);

        assert_eq!(grid.month, ym(2025, 1));
        assert_eq!(grid.week_start, Weekday::Mon);
        // Today shows up as padding at the start of January
        let today_cell = grid.cells().find(|cell| cell.is_today).unwrap();
        assert!(!today_cell.in_current_month);
    }
}
