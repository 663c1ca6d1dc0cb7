//! drawer-core
//!
//! Calendar grid generation and the panel state machine behind the quick
//! expense entry drawer. No rendering: a UI layer paints the snapshots and
//! grids produced here and forwards user intents to [`EntryController`].

pub mod config;
pub mod domain;
pub mod error;
pub mod sink;
pub mod state;

pub use config::{DrawerConfig, SnapPoints};
pub use domain::{compute_grid, weeks_in_month, LocaleTable, RelativeDayLabels};
pub use error::ConfigError;
pub use sink::{LoggingSink, TransactionSink};
pub use state::{keypad_keys, EntryController};

pub use shared::{
    CalendarGrid, DateCell, EntryState, PanelState, SavedEntry, SnapPoint, SnapPosition,
    TransactionSeed, Week, YearMonth,
};

/// Today's date on the local clock, for hosts opening a drawer
pub fn today_local() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
