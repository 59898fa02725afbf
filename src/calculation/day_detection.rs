//! Day detection logic.
//!
//! This module classifies calendar dates as weekdays or weekend days for
//! charge-flag lookup.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Represents the type of day for charge-flag lookup.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::DayType;
///
/// let day_type = DayType::Weekend;
/// assert_eq!(format!("{:?}", day_type), "Weekend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday or Sunday.
    Weekend,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Weekend => write!(f, "Weekend"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2020-07-04 is a Saturday
/// assert_eq!(get_day_type(NaiveDate::from_ymd_opt(2020, 7, 4).unwrap()), DayType::Weekend);
///
/// // 2020-07-02 is a Thursday
/// assert_eq!(get_day_type(NaiveDate::from_ymd_opt(2020, 7, 2).unwrap()), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayType::Weekend,
        _ => DayType::Weekday,
    }
}
