//! # Entry State Module
//!
//! This module owns the state of one open entry drawer and the transitions
//! between its panels.
//!
//! ## Responsibilities:
//! - Which single input panel is open (keypad, calendar, description)
//! - Sheet snap position, always derived from the open panel
//! - Selected date and calendar paging
//! - Raw amount accumulation from the keypad
//! - Handing the finished entry to a [`TransactionSink`] on save
//!
//! ## Purpose:
//! Every user intent is a single `&mut self` call that updates all affected
//! fields together. No intent can fail: input that makes no sense for the
//! open panel is ignored.

use chrono::NaiveDate;
use log::{debug, info};
use shared::{
    CalendarGrid, EntryState, PanelState, SavedEntry, SnapPoint, SnapPosition, TransactionSeed,
    YearMonth,
};

use crate::config::DrawerConfig;
use crate::domain::calendar::compute_grid;
use crate::domain::date_labels::LocaleTable;
use crate::domain::date_math;
use crate::sink::TransactionSink;

/// Keys on the amount keypad, in display order (three per row)
pub fn keypad_keys(decimal_separator: char) -> [char; 11] {
    ['1', '2', '3', '4', '5', '6', '7', '8', '9', decimal_separator, '0']
}

/// Render a stored amount the way the keypad would have typed it.
///
/// Uses the shortest `f64` display form, so an amount the host stored with
/// float noise (`0.1 + 0.2`) comes back with every digit of that noise.
fn amount_text_from(amount: f64, decimal_separator: char) -> String {
    amount.to_string().replace('.', &decimal_separator.to_string())
}

/// Controller for one drawer session
#[derive(Debug, Clone)]
pub struct EntryController {
    state: EntryState,
    /// Text of the description input, owned by that panel
    description: String,
    /// Id of the transaction being edited, `None` for a new one
    transaction_id: Option<String>,
    today: NaiveDate,
    config: DrawerConfig,
    labels: LocaleTable,
}

impl EntryController {
    /// Open the drawer, either blank or pre-filled from an existing transaction
    pub fn open(seed: Option<TransactionSeed>, today: NaiveDate, config: DrawerConfig) -> Self {
        let mut controller = Self {
            state: EntryState::fresh(today),
            description: String::new(),
            transaction_id: None,
            today,
            config,
            labels: LocaleTable::builtin(),
        };

        match seed {
            Some(seed) => {
                info!("📝 Opening drawer for transaction {}", seed.id);
                controller.state.selected_date = seed.date;
                controller.state.reference_month = YearMonth::containing(seed.date);
                controller.state.amount_text =
                    amount_text_from(seed.amount, controller.config.decimal_separator);
                controller.description = seed.description;
                controller.transaction_id = Some(seed.id);
            }
            None => info!("📝 Opening drawer for a new transaction"),
        }

        controller
    }

    /// Open a blank drawer
    pub fn new_entry(today: NaiveDate, config: DrawerConfig) -> Self {
        Self::open(None, today, config)
    }

    /// Replace the built-in label tables
    pub fn with_labels(mut self, labels: LocaleTable) -> Self {
        self.labels = labels;
        self
    }

    pub fn state(&self) -> &EntryState {
        &self.state
    }

    /// Owned copy of the current state for a renderer
    pub fn snapshot(&self) -> EntryState {
        self.state.clone()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    pub fn labels(&self) -> &LocaleTable {
        &self.labels
    }

    /// Open `panel`, closing whatever was open, and move the sheet to match
    fn show_panel(&mut self, panel: PanelState) {
        let previous = self.state.panel;
        self.state.panel = panel;
        self.state.snap = SnapPosition::for_panel(panel);
        debug!(
            "Panel {:?} -> {:?}, sheet at {:?}",
            previous, panel, self.state.snap
        );
    }

    /// Show the calendar. The month it shows is left as it was, so paging
    /// survives closing and reopening the panel.
    pub fn open_calendar(&mut self) {
        self.show_panel(PanelState::Calendar);
    }

    pub fn open_description(&mut self) {
        self.show_panel(PanelState::Description);
    }

    /// Back to the keypad, used when the calendar picks a date or the
    /// description loses focus
    pub fn close_to_keypad(&mut self) {
        self.show_panel(PanelState::Keypad);
    }

    /// Collapse the sheet with nothing open
    pub fn collapse(&mut self) {
        self.show_panel(PanelState::None);
    }

    /// Append a keypad key to the amount. Ignored unless the keypad is open.
    ///
    /// The text is not validated; repeated separators are kept as typed.
    pub fn type_key(&mut self, key: char) {
        if self.state.panel != PanelState::Keypad {
            debug!("Ignoring key {:?} while {:?} is open", key, self.state.panel);
            return;
        }
        self.state.amount_text.push(key);
    }

    /// Remove the last typed character, if any
    pub fn backspace(&mut self) {
        self.state.amount_text.pop();
    }

    /// Pick a date and return to the keypad
    pub fn select_date(&mut self, date: NaiveDate) {
        debug!("📅 Selected {}", date);
        self.state.selected_date = date;
        self.close_to_keypad();
    }

    pub fn next_month(&mut self) {
        self.state.reference_month = date_math::next_month(self.state.reference_month);
        debug!("📅 Navigated to next month: {}", self.state.reference_month);
    }

    pub fn previous_month(&mut self) {
        self.state.reference_month = date_math::previous_month(self.state.reference_month);
        debug!("📅 Navigated to previous month: {}", self.state.reference_month);
    }

    /// Show today's month, select today and return to the keypad, all at once
    pub fn jump_to_today(&mut self) {
        self.state.reference_month = YearMonth::containing(self.today);
        self.state.selected_date = self.today;
        debug!("📅 Jumped to today: {}", self.today);
        self.close_to_keypad();
    }

    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = text.into();
    }

    /// Hand the entry to `sink` and reset to a freshly opened blank drawer.
    ///
    /// Returns the entry that was handed over.
    pub fn save<S>(&mut self, sink: &mut S) -> SavedEntry
    where
        S: TransactionSink + ?Sized,
    {
        let entry = SavedEntry {
            transaction_id: self.transaction_id.take(),
            date: self.state.selected_date,
            amount_text: std::mem::take(&mut self.state.amount_text),
            description: std::mem::take(&mut self.description),
        };

        info!(
            "💾 Saving entry for {} with amount {:?}",
            entry.date, entry.amount_text
        );
        sink.submit(entry.clone());

        self.state = EntryState::fresh(self.today);
        entry
    }

    /// Close the drawer without saving
    pub fn dismiss(self) {
        info!("Drawer dismissed without saving");
    }

    /// Grid for the month the calendar is showing
    pub fn calendar_grid(&self) -> CalendarGrid {
        compute_grid(
            self.state.reference_month,
            self.today,
            self.state.selected_date,
            self.config.week_start,
        )
    }

    /// Grid to paint, only while the calendar panel is open
    pub fn visible_grid(&self) -> Option<CalendarGrid> {
        (self.state.panel == PanelState::Calendar).then(|| self.calendar_grid())
    }

    /// Height the sheet should be rendered at
    pub fn snap_point(&self) -> SnapPoint {
        self.config.snap_point(self.state.snap)
    }

    /// Label for the date button
    pub fn date_label(&self) -> String {
        self.labels
            .relative_date_label(self.state.selected_date, self.today, &self.config.locale)
    }

    /// Calendar header for the month being shown
    pub fn month_title(&self) -> String {
        self.labels
            .month_title(self.state.reference_month, &self.config.locale)
    }

    pub fn weekday_labels(&self) -> [&str; 7] {
        self.labels
            .weekday_labels(&self.config.locale, self.config.week_start)
    }

    /// Amount as typed, or the placeholder while nothing is typed
    pub fn amount_display(&self) -> &str {
        if self.state.amount_text.is_empty() {
            self.labels.amount_placeholder(&self.config.locale)
        } else {
            &self.state.amount_text
        }
    }

    pub fn keypad_keys(&self) -> [char; 11] {
        keypad_keys(self.config.decimal_separator)
    }
}
