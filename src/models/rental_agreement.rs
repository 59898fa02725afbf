//! Rental agreement model.
//!
//! This module contains the [`RentalAgreement`] type: the finished, priced
//! result of a checkout.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The priced outcome of a checkout.
///
/// Built once by [`checkout`](crate::calculation::checkout) and never
/// mutated afterwards. Every monetary field carries exactly two decimal
/// places, rounded half-up.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::checkout;
/// use tool_rental::models::ToolPolicy;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let chainsaw = ToolPolicy {
///     code: "CHNS".to_string(),
///     tool_type: "Chainsaw".to_string(),
///     brand: "Stihl".to_string(),
///     daily_charge: Decimal::new(149, 2),
///     weekday_charge: true,
///     weekend_charge: false,
///     holiday_charge: true,
/// };
///
/// let agreement = checkout(&chainsaw, 5, 25, NaiveDate::from_ymd_opt(2015, 7, 2).unwrap()).unwrap();
/// assert_eq!(agreement.due_date, NaiveDate::from_ymd_opt(2015, 7, 7).unwrap());
/// assert_eq!(agreement.charge_days, 3);
/// assert_eq!(agreement.pre_discount_charge, Decimal::new(447, 2));
/// assert_eq!(agreement.discount_amount, Decimal::new(112, 2));
/// assert_eq!(agreement.final_charge, Decimal::new(335, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalAgreement {
    /// Code of the rented tool.
    pub tool_code: String,
    /// Category of the rented tool.
    pub tool_type: String,
    /// Brand of the rented tool.
    pub brand: String,
    /// Number of calendar days rented.
    pub rental_days: u32,
    /// The day the tool was checked out.
    pub checkout_date: NaiveDate,
    /// Checkout date plus rental days. Not itself billable.
    pub due_date: NaiveDate,
    /// Number of billable days in `[checkout_date, due_date)`. May be zero.
    pub charge_days: u32,
    /// Charge per billable day.
    pub daily_charge: Decimal,
    /// `daily_charge * charge_days`.
    pub pre_discount_charge: Decimal,
    /// Whole-number discount percentage.
    pub discount_percent: u32,
    /// `pre_discount_charge * discount_percent / 100`.
    pub discount_amount: Decimal,
    /// `pre_discount_charge - discount_amount`.
    pub final_charge: Decimal,
}
