//! Tool policy model.
//!
//! A [`ToolPolicy`] describes a rentable tool and how it is billed: its daily
//! charge plus three independent flags for weekdays, weekends and holidays.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A rentable tool together with its charge policy.
///
/// The three charge flags are independent. A holiday that falls on a weekend
/// is governed by the holiday flag first: when `holiday_charge` is false the
/// day is never billed.
///
/// # Example
///
/// ```
/// use tool_rental::models::ToolPolicy;
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
/// assert!(ladder.charges_weekends());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolPolicy {
    /// Unique tool code (e.g., "LADW").
    pub code: String,
    /// Tool category (e.g., "Ladder").
    pub tool_type: String,
    /// Manufacturer brand (e.g., "Werner").
    pub brand: String,
    /// Charge per billable day. Never negative.
    pub daily_charge: Decimal,
    /// Whether Monday through Friday are billed.
    pub weekday_charge: bool,
    /// Whether Saturday and Sunday are billed.
    pub weekend_charge: bool,
    /// Whether observed holidays are billed.
    pub holiday_charge: bool,
}

impl ToolPolicy {
    /// Returns true if the tool bills weekdays.
    pub fn charges_weekdays(&self) -> bool {
        self.weekday_charge
    }

    /// Returns true if the tool bills weekends.
    pub fn charges_weekends(&self) -> bool {
        self.weekend_charge
    }

    /// Returns true if the tool bills observed holidays.
    pub fn charges_holidays(&self) -> bool {
        self.holiday_charge
    }
}
