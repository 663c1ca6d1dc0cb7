//! Domain logic for the entry drawer.
//!
//! Pure date math, the calendar grid and the locale label tables. Nothing in
//! here reads the clock; "today" is always passed in.

pub mod calendar;
pub mod date_labels;
pub mod date_math;

pub use calendar::{compute_grid, weeks_in_month};
pub use date_labels::{LocaleTable, RelativeDayLabels, FALLBACK_LOCALE};
