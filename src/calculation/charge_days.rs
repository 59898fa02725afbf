//! Charge-day counting.
//!
//! Walks every date of a rental and decides whether the tool's daily charge
//! applies. An observed holiday on a tool that does not bill holidays is
//! vetoed outright; every other day is judged by the weekday/weekend flag
//! alone, so a day is billed at most once.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::ToolPolicy;

use super::day_detection::{DayType, get_day_type};
use super::holidays::{Holiday, observed_holiday};

/// The billing decision for one date of a rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalDay {
    /// The calendar date.
    pub date: NaiveDate,
    /// Weekday or weekend.
    pub day_type: DayType,
    /// The holiday observed on this date, if any.
    pub holiday: Option<Holiday>,
    /// Whether the daily charge applies.
    pub charged: bool,
}

/// Classifies a single date against a tool's charge policy.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::{classify_rental_day, DayType, Holiday};
/// use tool_rental::models::ToolPolicy;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let jackhammer = ToolPolicy {
///     code: "JAKD".to_string(),
///     tool_type: "Jackhammer".to_string(),
///     brand: "DeWalt".to_string(),
///     daily_charge: Decimal::new(299, 2),
///     weekday_charge: true,
///     weekend_charge: false,
///     holiday_charge: false,
/// };
///
/// // Labor Day 2015 is a Monday, but holidays are not billed for this tool
/// let day = classify_rental_day(&jackhammer, NaiveDate::from_ymd_opt(2015, 9, 7).unwrap());
/// assert_eq!(day.day_type, DayType::Weekday);
/// assert_eq!(day.holiday, Some(Holiday::LaborDay));
/// assert!(!day.charged);
/// ```
pub fn classify_rental_day(policy: &ToolPolicy, date: NaiveDate) -> RentalDay {
    let day_type = get_day_type(date);
    let holiday = observed_holiday(date);

    let charged = if holiday.is_some() && !policy.charges_holidays() {
        false
    } else {
        match day_type {
            DayType::Weekday => policy.charges_weekdays(),
            DayType::Weekend => policy.charges_weekends(),
        }
    };

    RentalDay {
        date,
        day_type,
        holiday,
        charged,
    }
}

/// Classifies every date in the half-open range `[checkout_date, due_date)`.
///
/// Returns an empty vector when `due_date` is not after `checkout_date`.
pub fn rental_day_breakdown(
    policy: &ToolPolicy,
    checkout_date: NaiveDate,
    due_date: NaiveDate,
) -> Vec<RentalDay> {
    checkout_date
        .iter_days()
        .take_while(|date| *date < due_date)
        .map(|date| classify_rental_day(policy, date))
        .collect()
}

/// Counts the billable days in `[checkout_date, due_date)`.
///
/// The checkout date is eligible for billing; the due date is not. Equal
/// dates, or a due date before the checkout date, yield zero.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::count_charge_days;
/// use tool_rental::models::ToolPolicy;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let ladder = ToolPolicy {
///     code: "LADW".to_string(),
///     tool_type: "Ladder".to_string(),
///     brand: "Werner".to_string(),
///     daily_charge: Decimal::new(199, 2),
///     weekday_charge: true,
///     weekend_charge: true,
///     holiday_charge: false,
/// };
///
/// // Thu 07/02 billed, Fri 07/03 observed holiday, Sat 07/04 billed
/// let checkout = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
/// let due = NaiveDate::from_ymd_opt(2020, 7, 5).unwrap();
/// assert_eq!(count_charge_days(&ladder, checkout, due), 2);
/// ```
pub fn count_charge_days(
    policy: &ToolPolicy,
    checkout_date: NaiveDate,
    due_date: NaiveDate,
) -> u32 {
    let mut charge_days = 0;
    for date in checkout_date.iter_days().take_while(|date| *date < due_date) {
        if classify_rental_day(policy, date).charged {
            charge_days += 1;
        }
    }
    charge_days
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_tool(code: &str, weekday: bool, weekend: bool, holiday: bool) -> ToolPolicy {
        ToolPolicy {
            code: code.to_string(),
            tool_type: "Test".to_string(),
            brand: "Test".to_string(),
            daily_charge: Decimal::new(100, 2),
            weekday_charge: weekday,
            weekend_charge: weekend,
            holiday_charge: holiday,
        }
    }

    fn chainsaw() -> ToolPolicy {
        make_tool("CHNS", true, false, true)
    }

    fn jackhammer() -> ToolPolicy {
        make_tool("JAKD", true, false, false)
    }

    fn ladder() -> ToolPolicy {
        make_tool("LADW", true, true, false)
    }

    #[test]
    fn test_empty_range_is_zero() {
        let date = make_date("2020-07-03");
        assert_eq!(count_charge_days(&ladder(), date, date), 0);
        assert!(rental_day_breakdown(&ladder(), date, date).is_empty());
    }

    #[test]
    fn test_reversed_range_is_zero() {
        let checkout = make_date("2020-07-10");
        let due = make_date("2020-07-01");
        assert_eq!(count_charge_days(&ladder(), checkout, due), 0);
    }

    #[test]
    fn test_due_date_is_not_billed() {
        // Tue 2020-07-07 billed, Wed 2020-07-08 is the due date
        let checkout = make_date("2020-07-07");
        let due = make_date("2020-07-08");
        assert_eq!(count_charge_days(&jackhammer(), checkout, due), 1);
    }

    #[test]
    fn test_chainsaw_bills_independence_day() {
        // Thu 07/02, Fri 07/03 (observed)
        let checkout = make_date("2020-07-02");
        let due = make_date("2020-07-04");
        assert_eq!(count_charge_days(&chainsaw(), checkout, due), 2);
    }

    #[test]
    fn test_jackhammer_skips_independence_day() {
        let checkout = make_date("2020-07-02");
        let due = make_date("2020-07-04");
        assert_eq!(count_charge_days(&jackhammer(), checkout, due), 1);
    }

    #[test]
    fn test_chainsaw_bills_labor_day() {
        // Mon 2023-09-04 through Thu 2023-09-07
        let checkout = make_date("2023-09-04");
        let due = make_date("2023-09-08");
        assert_eq!(count_charge_days(&chainsaw(), checkout, due), 4);
    }

    #[test]
    fn test_jackhammer_skips_labor_day() {
        let checkout = make_date("2023-09-04");
        let due = make_date("2023-09-08");
        assert_eq!(count_charge_days(&jackhammer(), checkout, due), 3);
    }

    #[test]
    fn test_holiday_veto_applies_to_weekend_billing_tool() {
        // Ladder bills weekdays and weekends, but observed Mon 2021-07-05 is vetoed
        let day = classify_rental_day(&ladder(), make_date("2021-07-05"));
        assert_eq!(day.holiday, Some(Holiday::IndependenceDay));
        assert!(!day.charged);
    }

    #[test]
    fn test_billed_holiday_still_needs_day_type_flag() {
        // Bills holidays and weekends only: weekday holiday is not a charge source
        let tool = make_tool("HOLI", false, true, true);
        let day = classify_rental_day(&tool, make_date("2023-07-04"));
        assert_eq!(day.holiday, Some(Holiday::IndependenceDay));
        assert_eq!(day.day_type, DayType::Weekday);
        assert!(!day.charged);
    }

    #[test]
    fn test_weekend_july_fourth_is_plain_weekend() {
        // Sat 2020-07-04 is not observed, so the weekend flag decides
        let day = classify_rental_day(&ladder(), make_date("2020-07-04"));
        assert_eq!(day.holiday, None);
        assert_eq!(day.day_type, DayType::Weekend);
        assert!(day.charged);
    }

    #[test]
    fn test_free_weekend_for_chainsaw() {
        // Sat 2023-08-05, Sun 2023-08-06
        let checkout = make_date("2023-08-05");
        let due = make_date("2023-08-07");
        assert_eq!(count_charge_days(&chainsaw(), checkout, due), 0);
    }

    #[test]
    fn test_no_flags_never_bills() {
        let tool = make_tool("NONE", false, false, false);
        let checkout = make_date("2020-01-01");
        let due = make_date("2021-01-01");
        assert_eq!(count_charge_days(&tool, checkout, due), 0);
    }

    #[test]
    fn test_all_flags_bill_every_day() {
        let tool = make_tool("ALL", true, true, true);
        let checkout = make_date("2020-01-01");
        let due = make_date("2021-01-01");
        // 2020 is a leap year
        assert_eq!(count_charge_days(&tool, checkout, due), 366);
    }

    #[test]
    fn test_multi_year_ladder_rental() {
        // Holidays in range: 2020-07-03, 2020-09-07, 2021-07-05, 2021-09-06
        let checkout = make_date("2020-07-02");
        let due = make_date("2022-07-02");
        assert_eq!(count_charge_days(&ladder(), checkout, due), 726);
    }

    #[test]
    fn test_breakdown_matches_count() {
        let checkout = make_date("2015-07-02");
        let due = make_date("2015-07-11");
        let breakdown = rental_day_breakdown(&jackhammer(), checkout, due);

        assert_eq!(breakdown.len(), 9);
        assert_eq!(breakdown[0].date, checkout);
        assert_eq!(breakdown[8].date, make_date("2015-07-10"));
        let charged = breakdown.iter().filter(|day| day.charged).count() as u32;
        assert_eq!(charged, count_charge_days(&jackhammer(), checkout, due));
        assert_eq!(charged, 6);
    }

    #[test]
    fn test_rental_day_serialization() {
        let day = classify_rental_day(&jackhammer(), make_date("2015-09-07"));
        let json = serde_json::to_string(&day).unwrap();
        assert!(json.contains("\"date\":\"2015-09-07\""));
        assert!(json.contains("\"day_type\":\"weekday\""));
        assert!(json.contains("\"holiday\":\"labor_day\""));
        assert!(json.contains("\"charged\":false"));
    }
}
