//! Display formatting for air dates and times
//!
//! The listings API reports dates as `YYYY-MM-DD` and times as 24-hour `HH:MM`.
//! Views show dates as `DD/MM/YYYY` and times on a 12-hour clock.

use chrono::{NaiveDate, NaiveTime, Timelike};
use thiserror::Error;

/// Errors that can occur while formatting API values for display
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// The value is not a `YYYY-MM-DD` date
    #[error("Invalid air date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The value is not a 24-hour `HH:MM` time
    #[error("Invalid air time '{0}', expected HH:MM")]
    InvalidTime(String),
}

/// Formats an API date for display
///
/// # Arguments
///
/// * `date` - A date in `YYYY-MM-DD` form
///
/// # Returns
///
/// The same date as `DD/MM/YYYY`
///
/// # Examples
///
/// ```
/// use tv_listings::format_air_date;
///
/// assert_eq!(format_air_date("2024-03-05").unwrap(), "05/03/2024");
/// ```
pub fn format_air_date(date: &str) -> Result<String, FormatError> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| FormatError::InvalidDate(date.to_string()))?;
    Ok(parsed.format("%d/%m/%Y").to_string())
}

/// Formats an API time of day on a 12-hour clock
///
/// Midnight and noon display as 12, hours from 12 onwards are PM, and the
/// hour carries no leading zero. Minutes are kept as given.
///
/// # Arguments
///
/// * `time` - A 24-hour time in `HH:MM` form
///
/// # Returns
///
/// The time as `H:MM AM` or `H:MM PM`
///
/// # Examples
///
/// ```
/// use tv_listings::format_air_time;
///
/// assert_eq!(format_air_time("00:00").unwrap(), "12:00 AM");
/// assert_eq!(format_air_time("13:30").unwrap(), "1:30 PM");
/// ```
pub fn format_air_time(time: &str) -> Result<String, FormatError> {
    let parsed = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| FormatError::InvalidTime(time.to_string()))?;

    let meridiem = if parsed.hour() >= 12 { "PM" } else { "AM" };
    let hour = match parsed.hour() % 12 {
        0 => 12,
        h => h,
    };

    Ok(format!("{}:{:02} {}", hour, parsed.minute(), meridiem))
}

/// Formats a date/time pair for a schedule card
///
/// Falls back to the raw values when either one is malformed, so a bad value
/// from the API still shows up instead of disappearing.
pub(crate) fn format_airing(date: &str, time: &str) -> String {
    match (format_air_date(date), format_air_time(time)) {
        (Ok(date), Ok(time)) => format!("{} - {}", date, time),
        (date_result, time_result) => {
            for error in [date_result.err(), time_result.err()].into_iter().flatten() {
                tracing::warn!(error = %error, "Showing raw airing value");
            }
            format!("{} - {}", date, time)
        }
    }
}
