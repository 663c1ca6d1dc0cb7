use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use chrono::{Datelike, NaiveDate, Weekday};

/// A calendar month, always backed by a valid first day.
///
/// Serialized as `"YYYY-MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct YearMonth {
    first_day: NaiveDate,
}

impl YearMonth {
    /// Create a month from a year and a 1-based month number
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| Self { first_day })
    }

    /// The month a given date falls in
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// 1-based month number
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Whether `date` falls inside this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = YearMonthParseError;

    /// Parse a `YYYY-MM` string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .trim()
            .rsplit_once('-')
            .ok_or(YearMonthParseError::InvalidFormat)?;

        let year = year
            .parse::<i32>()
            .map_err(|_| YearMonthParseError::InvalidFormat)?;
        let month = month
            .parse::<u32>()
            .map_err(|_| YearMonthParseError::InvalidFormat)?;

        YearMonth::new(year, month).ok_or(YearMonthParseError::OutOfRange)
    }
}

impl From<YearMonth> for String {
    fn from(month: YearMonth) -> Self {
        month.to_string()
    }
}

impl TryFrom<String> for YearMonth {
    type Error = YearMonthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum YearMonthParseError {
    InvalidFormat,
    OutOfRange,
}

impl fmt::Display for YearMonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearMonthParseError::InvalidFormat => write!(f, "Invalid month format, expected YYYY-MM"),
            YearMonthParseError::OutOfRange => write!(f, "Month is out of range"),
        }
    }
}

impl std::error::Error for YearMonthParseError {}

/// A single day in the calendar grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateCell {
    pub date: NaiveDate,
    /// Equal to the "today" the grid was computed with
    pub is_today: bool,
    /// Equal to the drawer's selected date
    pub is_selected: bool,
    /// False for padding days borrowed from the neighbouring months
    pub in_current_month: bool,
}

/// One week row of the calendar grid
pub type Week = [DateCell; 7];

/// A month laid out in whole weeks, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarGrid {
    pub month: YearMonth,
    pub week_start: Weekday,
    pub rows: Vec<Week>,
}

impl CalendarGrid {
    /// All cells in display order
    pub fn cells(&self) -> impl Iterator<Item = &DateCell> + '_ {
        self.rows.iter().flat_map(|week| week.iter())
    }

    pub fn first_cell(&self) -> Option<&DateCell> {
        self.rows.first().map(|week| &week[0])
    }

    pub fn last_cell(&self) -> Option<&DateCell> {
        self.rows.last().map(|week| &week[6])
    }

    /// Total number of cells, padding included
    pub fn day_count(&self) -> usize {
        self.rows.len() * 7
    }

    /// The selected cell, if the selected date is visible in this grid
    pub fn selected_cell(&self) -> Option<&DateCell> {
        self.cells().find(|cell| cell.is_selected)
    }
}

/// Which input panel of the drawer is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PanelState {
    /// Idle sheet, nothing open
    None,
    /// Numeric keypad for the amount
    #[default]
    Keypad,
    /// Month calendar for the date
    Calendar,
    /// Free-text description input
    Description,
}

/// Height class of the bottom sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SnapPosition {
    /// Keypad height, also used for the idle sheet
    #[default]
    Collapsed,
    /// Tall enough for the calendar
    Half,
    /// Whole screen, used while typing a description
    Full,
}

impl SnapPosition {
    /// The sheet height each panel is shown at
    pub const fn for_panel(panel: PanelState) -> Self {
        match panel {
            PanelState::None | PanelState::Keypad => SnapPosition::Collapsed,
            PanelState::Calendar => SnapPosition::Half,
            PanelState::Description => SnapPosition::Full,
        }
    }
}

/// Concrete sheet height for a snap position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapPoint {
    /// Fixed height in logical pixels
    Pixels(u32),
    /// Share of the screen height, in `(0, 1]`
    Fraction(f32),
}

impl fmt::Display for SnapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapPoint::Pixels(px) => write!(f, "{}px", px),
            SnapPoint::Fraction(fraction) => write!(f, "{}", fraction),
        }
    }
}

/// Snapshot of an open drawer session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryState {
    /// Month shown by the calendar, pages independently of `selected_date`
    pub reference_month: YearMonth,
    /// Date the transaction is booked on
    pub selected_date: NaiveDate,
    /// Raw keypad input, digits and decimal separators, never parsed here
    pub amount_text: String,
    pub panel: PanelState,
    pub snap: SnapPosition,
}

impl EntryState {
    /// State of a freshly opened drawer for a new transaction
    pub fn fresh(today: NaiveDate) -> Self {
        Self {
            reference_month: YearMonth::containing(today),
            selected_date: today,
            amount_text: String::new(),
            panel: PanelState::default(),
            snap: SnapPosition::for_panel(PanelState::default()),
        }
    }
}

/// Existing transaction handed in by the host when editing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSeed {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
}

/// Payload handed to the persistence side when the user saves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedEntry {
    /// Id of the edited transaction, `None` for a new one
    pub transaction_id: Option<String>,
    pub date: NaiveDate,
    /// Unvalidated amount exactly as typed
    pub amount_text: String,
    pub description: String,
}
