//! Observed holiday detection.
//!
//! Only two holidays affect billing: Independence Day, observed on the
//! nearest weekday when July 4th falls on a weekend, and Labor Day, the
//! first Monday in September.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A holiday recognised for billing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Holiday {
    /// July 4th, or the Friday/Monday it is observed on.
    IndependenceDay,
    /// First Monday in September.
    LaborDay,
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Holiday::IndependenceDay => write!(f, "Independence Day"),
            Holiday::LaborDay => write!(f, "Labor Day"),
        }
    }
}

/// Returns true if `date` is the observed Independence Day.
///
/// July 4th counts only on a weekday. A Saturday holiday is observed on
/// Friday July 3rd, a Sunday holiday on Monday July 5th.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::is_observed_independence_day;
/// use chrono::NaiveDate;
///
/// // 2020-07-04 is a Saturday, observed Friday 2020-07-03
/// assert!(is_observed_independence_day(NaiveDate::from_ymd_opt(2020, 7, 3).unwrap()));
/// assert!(!is_observed_independence_day(NaiveDate::from_ymd_opt(2020, 7, 4).unwrap()));
///
/// // 2021-07-04 is a Sunday, observed Monday 2021-07-05
/// assert!(is_observed_independence_day(NaiveDate::from_ymd_opt(2021, 7, 5).unwrap()));
/// ```
pub fn is_observed_independence_day(date: NaiveDate) -> bool {
    if date.month() != 7 {
        return false;
    }

    match (date.day(), date.weekday()) {
        (4, weekday) => !matches!(weekday, Weekday::Sat | Weekday::Sun),
        (3, Weekday::Fri) => true,
        (5, Weekday::Mon) => true,
        _ => false,
    }
}

/// Returns true if `date` is Labor Day, the first Monday of September.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::is_observed_labor_day;
/// use chrono::NaiveDate;
///
/// assert!(is_observed_labor_day(NaiveDate::from_ymd_opt(2015, 9, 7).unwrap()));
/// assert!(!is_observed_labor_day(NaiveDate::from_ymd_opt(2015, 9, 14).unwrap()));
/// ```
pub fn is_observed_labor_day(date: NaiveDate) -> bool {
    date.month() == 9 && date.weekday() == Weekday::Mon && date.day() <= 7
}

/// Returns the holiday observed on `date`, if any.
pub fn observed_holiday(date: NaiveDate) -> Option<Holiday> {
    if is_observed_independence_day(date) {
        Some(Holiday::IndependenceDay)
    } else if is_observed_labor_day(date) {
        Some(Holiday::LaborDay)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_weekday_july_fourth_is_holiday() {
        // 2023-07-04 is a Tuesday
        assert!(is_observed_independence_day(make_date("2023-07-04")));
    }

    #[test]
    fn test_monday_july_fifth_is_holiday() {
        // 2021-07-04 is a Sunday
        assert!(is_observed_independence_day(make_date("2021-07-05")));
    }

    #[test]
    fn test_friday_july_third_is_holiday() {
        // 2020-07-04 is a Saturday
        assert!(is_observed_independence_day(make_date("2020-07-03")));
    }

    #[test]
    fn test_weekend_july_fourth_is_not_observed() {
        assert!(!is_observed_independence_day(make_date("2020-07-04")));
        assert!(!is_observed_independence_day(make_date("2021-07-04")));
    }

    #[test]
    fn test_monday_july_third_is_not_holiday() {
        assert!(!is_observed_independence_day(make_date("2023-07-03")));
    }

    #[test]
    fn test_wednesday_july_fifth_is_not_holiday() {
        assert!(!is_observed_independence_day(make_date("2023-07-05")));
    }

    #[test]
    fn test_fourth_of_other_month_is_not_holiday() {
        // 2023-08-04 is a Friday
        assert!(!is_observed_independence_day(make_date("2023-08-04")));
        // 2023-06-05 is a Monday
        assert!(!is_observed_independence_day(make_date("2023-06-05")));
    }

    #[test]
    fn test_labor_days_across_years() {
        for date_str in [
            "2015-09-07",
            "2016-09-05",
            "2017-09-04",
            "2018-09-03",
            "2019-09-02",
            "2020-09-07",
            "2021-09-06",
            "2022-09-05",
            "2023-09-04",
        ] {
            assert!(
                is_observed_labor_day(make_date(date_str)),
                "{} should be Labor Day",
                date_str
            );
        }
    }

    #[test]
    fn test_days_around_labor_day_are_not_holiday() {
        assert!(!is_observed_labor_day(make_date("2023-09-05")));
        assert!(!is_observed_labor_day(make_date("2022-09-06")));
        assert!(!is_observed_labor_day(make_date("2023-09-03")));
        assert!(!is_observed_labor_day(make_date("2022-09-03")));
    }

    #[test]
    fn test_second_monday_of_september_is_not_labor_day() {
        assert!(!is_observed_labor_day(make_date("2023-09-11")));
    }

    #[test]
    fn test_first_monday_of_other_month_is_not_labor_day() {
        // 2023-10-02 is a Monday
        assert!(!is_observed_labor_day(make_date("2023-10-02")));
    }

    #[test]
    fn test_observed_holiday() {
        assert_eq!(
            observed_holiday(make_date("2015-07-03")),
            Some(Holiday::IndependenceDay)
        );
        assert_eq!(
            observed_holiday(make_date("2015-09-07")),
            Some(Holiday::LaborDay)
        );
        assert_eq!(observed_holiday(make_date("2015-09-08")), None);
    }

    #[test]
    fn test_holiday_display() {
        assert_eq!(format!("{}", Holiday::IndependenceDay), "Independence Day");
        assert_eq!(format!("{}", Holiday::LaborDay), "Labor Day");
    }

    #[test]
    fn test_holiday_serialization() {
        let json = serde_json::to_string(&Holiday::LaborDay).unwrap();
        assert_eq!(json, "\"labor_day\"");

        let deserialized: Holiday = serde_json::from_str("\"independence_day\"").unwrap();
        assert_eq!(deserialized, Holiday::IndependenceDay);
    }
}
