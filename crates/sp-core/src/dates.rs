//! Calendar-date helpers.
//!
//! The planner works in whole local days: deadlines and task dates are
//! `NaiveDate`s stored as `YYYY-MM-DD`.

use chrono::NaiveDate;

use crate::errors::CoreError;

/// Storage and input format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the string is not a valid date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|e| CoreError::Validation(format!("invalid date '{raw}' (expected YYYY-MM-DD): {e}")))
}

/// Signed number of days from `start` to `end`.
#[must_use]
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Human-relative label: `Today`, `Yesterday`, `Tomorrow`, `In N days`,
/// `N days ago`, or `Never` when there is no date.
#[must_use]
pub fn relative_label(date: Option<NaiveDate>, today: NaiveDate) -> String {
    let Some(date) = date else {
        return "Never".to_string();
    };
    match days_between(today, date) {
        0 => "Today".to_string(),
        -1 => "Yesterday".to_string(),
        1 => "Tomorrow".to_string(),
        n if n > 0 => format!("In {n} days"),
        n => format!("{} days ago", n.unsigned_abs()),
    }
}
