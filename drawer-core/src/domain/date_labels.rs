//! Locale lookups for the labels around the drawer: the relative date on the
//! date button, the weekday header and month title of the calendar, and the
//! amount placeholder.
//!
//! Tables are plain data keyed by locale code, so a host can add or replace
//! a locale without touching any control logic. Unknown codes fall back to
//! English.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use shared::YearMonth;
use std::collections::HashMap;

/// Locale code used when a requested locale is unknown
pub const FALLBACK_LOCALE: &str = "eng";

const DEFAULT_WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

const DEFAULT_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const DEFAULT_AMOUNT_PLACEHOLDER: &str = "Transaction amount";

/// Labels for dates one day around today
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeDayLabels {
    pub today: String,
    pub tomorrow: String,
    pub yesterday: String,
}

impl RelativeDayLabels {
    pub fn new(today: &str, tomorrow: &str, yesterday: &str) -> Self {
        Self {
            today: today.to_string(),
            tomorrow: tomorrow.to_string(),
            yesterday: yesterday.to_string(),
        }
    }
}

/// Per-locale label tables
#[derive(Debug, Clone)]
pub struct LocaleTable {
    relative: HashMap<String, RelativeDayLabels>,
    fallback_relative: RelativeDayLabels,
    /// Short weekday names, Monday first
    weekdays: HashMap<String, [String; 7]>,
    /// Standalone month names, January first
    months: HashMap<String, [String; 12]>,
    amount_placeholders: HashMap<String, String>,
}

fn normalize(code: &str) -> String {
    code.trim().to_ascii_lowercase()
}

fn owned<const N: usize>(labels: [&str; N]) -> [String; N] {
    labels.map(str::to_string)
}

impl LocaleTable {
    /// Empty table that answers everything in English
    pub fn english_only() -> Self {
        let fallback_relative = RelativeDayLabels::new("Today", "Tomorrow", "Yesterday");
        let mut relative = HashMap::new();
        relative.insert(FALLBACK_LOCALE.to_string(), fallback_relative.clone());

        Self {
            relative,
            fallback_relative,
            weekdays: HashMap::new(),
            months: HashMap::new(),
            amount_placeholders: HashMap::new(),
        }
    }

    /// Table with the locales the drawer ships with: `ru`, `pl`, `ua` and `eng`
    pub fn builtin() -> Self {
        let mut table = Self::english_only();

        table.insert_relative_labels("ru", RelativeDayLabels::new("Сегодня", "Завтра", "Вчера"));
        table.insert_relative_labels("pl", RelativeDayLabels::new("Dzisiaj", "Jutro", "Wczoraj"));
        table.insert_relative_labels("ua", RelativeDayLabels::new("Сьогодні", "Завтра", "Вчора"));

        table.insert_weekday_labels("ru", ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"]);
        table.insert_month_names(
            "ru",
            [
                "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь",
                "Июль", "Август", "Сентябрь", "Октябрь", "Ноябрь", "Декабрь",
            ],
        );
        table.insert_amount_placeholder("ru", "Сумма транзакции");

        table
    }

    pub fn insert_relative_labels(&mut self, code: &str, labels: RelativeDayLabels) {
        self.relative.insert(normalize(code), labels);
    }

    /// Register short weekday names, given Monday first
    pub fn insert_weekday_labels(&mut self, code: &str, monday_first: [&str; 7]) {
        self.weekdays.insert(normalize(code), owned(monday_first));
    }

    /// Register standalone month names, given January first
    pub fn insert_month_names(&mut self, code: &str, january_first: [&str; 12]) {
        self.months.insert(normalize(code), owned(january_first));
    }

    pub fn insert_amount_placeholder(&mut self, code: &str, placeholder: &str) {
        self.amount_placeholders
            .insert(normalize(code), placeholder.to_string());
    }

    /// Whether `code` has its own relative day labels
    pub fn knows_locale(&self, code: &str) -> bool {
        self.relative.contains_key(&normalize(code))
    }

    pub fn relative_labels(&self, code: &str) -> &RelativeDayLabels {
        self.relative
            .get(&normalize(code))
            .unwrap_or(&self.fallback_relative)
    }

    /// Label for the date button: today, tomorrow or yesterday in the given
    /// locale, otherwise `dd.mm.yy`.
    pub fn relative_date_label(&self, date: NaiveDate, today: NaiveDate, code: &str) -> String {
        let labels = self.relative_labels(code);
        match (date - today).num_days() {
            0 => labels.today.clone(),
            1 => labels.tomorrow.clone(),
            -1 => labels.yesterday.clone(),
            _ => date.format("%d.%m.%y").to_string(),
        }
    }

    /// Seven short weekday names, starting at `week_start`
    pub fn weekday_labels(&self, code: &str, week_start: Weekday) -> [&str; 7] {
        let start = week_start.num_days_from_monday() as usize;
        match self.weekdays.get(&normalize(code)) {
            Some(names) => std::array::from_fn(|i| names[(start + i) % 7].as_str()),
            None => std::array::from_fn(|i| DEFAULT_WEEKDAYS[(start + i) % 7]),
        }
    }

    pub fn month_name(&self, month: YearMonth, code: &str) -> &str {
        let index = month.month() as usize - 1;
        match self.months.get(&normalize(code)) {
            Some(names) => names[index].as_str(),
            None => DEFAULT_MONTHS[index],
        }
    }

    /// Calendar header, e.g. "Апрель 2024"
    pub fn month_title(&self, month: YearMonth, code: &str) -> String {
        format!("{} {}", self.month_name(month, code), month.year())
    }

    /// Text shown in the amount field while nothing has been typed
    pub fn amount_placeholder(&self, code: &str) -> &str {
        self.amount_placeholders
            .get(&normalize(code))
            .map(String::as_str)
            .unwrap_or(DEFAULT_AMOUNT_PLACEHOLDER)
    }
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self::builtin()
    }
}
