//! Filter selection types and validation

use crate::error::{FilterError, FilterResult};

/// The months covered by the datasets, in index order
pub const MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

/// Weekday names accepted by the day filter
pub const DAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Wildcard answer that disables a filter
pub const ALL: &str = "all";

/// A city/month/day selection, created once per session iteration
///
/// The month and day are kept as the raw answers; the loader maps them to
/// derived-column values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    pub city: String,
    pub month: String,
    pub day: String,
}

impl Filters {
    /// Create a filter selection from raw answers
    pub fn new(city: &str, month: &str, day: &str) -> Self {
        Filters {
            city: city.trim().to_string(),
            month: month.trim().to_string(),
            day: day.trim().to_string(),
        }
    }
}

/// Map a month name to its 1-based index within the tracked months
pub fn month_index(month: &str) -> FilterResult<u32> {
    MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(month.trim()))
        .map(|i| i as u32 + 1)
        .ok_or_else(|| FilterError::InvalidMonth(month.trim().to_string()))
}

/// Check that a month answer is a tracked month name or "all"
pub fn validate_month(month: &str) -> FilterResult<()> {
    if month.trim().eq_ignore_ascii_case(ALL) {
        return Ok(());
    }
    month_index(month).map(|_| ())
}

/// Check that a day answer is a weekday name or "all"
pub fn validate_day(day: &str) -> FilterResult<()> {
    let trimmed = day.trim();
    if trimmed.eq_ignore_ascii_case(ALL) {
        return Ok(());
    }
    if DAYS.iter().any(|d| d.eq_ignore_ascii_case(trimmed)) {
        Ok(())
    } else {
        Err(FilterError::InvalidDay(trimmed.to_string()))
    }
}

/// Title-case a name: first letter uppercase, the rest lowercase
pub fn title_case(s: &str) -> String {
    let mut chars = s.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
