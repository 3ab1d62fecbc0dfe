//! Trip record types and timestamp-derived values

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Deserializer};

/// Timestamp format used by the city CSV files
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single trip row as it appears in the city CSV files
///
/// Gender and birth year columns exist only in some cities; absent columns
/// and empty cells both deserialize to `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct Trip {
    #[serde(rename = "Start Time", deserialize_with = "de_timestamp")]
    pub start_time: NaiveDateTime,

    #[serde(rename = "End Time", default, deserialize_with = "de_opt_timestamp")]
    pub end_time: Option<NaiveDateTime>,

    /// Trip duration in seconds
    #[serde(rename = "Trip Duration")]
    pub duration_secs: f64,

    #[serde(rename = "Start Station")]
    pub start_station: String,

    #[serde(rename = "End Station")]
    pub end_station: String,

    #[serde(rename = "User Type", default, deserialize_with = "de_opt_string")]
    pub user_type: Option<String>,

    #[serde(rename = "Gender", default, deserialize_with = "de_opt_string")]
    pub gender: Option<String>,

    /// Stored as a float in the source files ("1992.0")
    #[serde(rename = "Birth Year", default, deserialize_with = "de_opt_year")]
    pub birth_year: Option<i32>,
}

impl Trip {
    /// Numeric month (1-12) of the start timestamp
    pub fn month(&self) -> u32 {
        self.start_time.month()
    }

    /// Weekday of the start timestamp
    pub fn weekday(&self) -> Weekday {
        self.start_time.weekday()
    }

    /// Title-cased weekday name of the start timestamp
    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.start_time.weekday())
    }

    /// Hour (0-23) of the start timestamp
    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }
}

/// Title-cased name of a weekday
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Full month name (1-12)
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

fn parse_timestamp<E: serde::de::Error>(raw: &str) -> Result<NaiveDateTime, E> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT)
        .map_err(|e| E::custom(format!("invalid timestamp '{}': {}", raw, e)))
}

fn de_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
}

fn de_opt_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => parse_timestamp(&raw).map(Some),
        _ => Ok(None),
    }
}

fn de_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        None => Ok(None),
    }
}

fn de_opt_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => {
            let year: f64 = raw.trim().parse().map_err(|_| {
                serde::de::Error::custom(format!("invalid birth year '{}'", raw))
            })?;
            Ok(Some(year as i32))
        }
        _ => Ok(None),
    }
}
