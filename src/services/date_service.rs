// Date helpers for the quiz page
// Derives compact "MM-DD" day keys from date-input values and keeps the
// page's date input seeded with the current local date.

use chrono::Local;

use crate::types::page::FormState;

/// Format of a date-input value.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Trait defining the date helper operations.
pub trait DateServiceTrait {
    fn to_compact_day_key(&self, date_value: &str) -> Option<String>;
    fn today_value(&self) -> String;
    fn apply_today(&self, form: &mut FormState, selector: &str) -> bool;
}

/// Date helper implementation.
#[derive(Debug, Default)]
pub struct DateService;

impl DateService {
    pub fn new() -> Self {
        Self
    }
}

impl DateServiceTrait for DateService {
    /// Converts a "YYYY-MM-DD" date-input value to its "MM-DD" day key.
    ///
    /// Month and day are left-padded with zeros to width 2, so "2024-3-7"
    /// yields "03-07". Returns `None` for empty input or anything that does
    /// not split into at least three '-'-separated parts.
    fn to_compact_day_key(&self, date_value: &str) -> Option<String> {
        if date_value.is_empty() {
            return None;
        }
        let parts: Vec<&str> = date_value.split('-').collect();
        if parts.len() < 3 {
            return None;
        }
        Some(format!("{:0>2}-{:0>2}", parts[1], parts[2]))
    }

    /// The current local date as a date-input value.
    fn today_value(&self) -> String {
        Local::now().format(DATE_INPUT_FORMAT).to_string()
    }

    /// Sets the field under `selector` to today's date. Silent no-op
    /// returning false when the selector is not registered.
    fn apply_today(&self, form: &mut FormState, selector: &str) -> bool {
        form.set_value(selector, &self.today_value())
    }
}
