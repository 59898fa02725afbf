//! Rental agreement construction.
//!
//! This module validates checkout inputs, derives the due date, counts
//! charge days and prices the rental. Each monetary quantity is rounded to
//! two decimal places half-up as soon as it is derived; the pre-discount
//! charge is derived from the unrounded daily charge.

use chrono::{Days, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::error::{RentalError, RentalResult};
use crate::models::{RentalAgreement, ToolPolicy};

use super::charge_days::count_charge_days;

/// Largest accepted discount percentage.
pub const MAX_DISCOUNT_PERCENT: i32 = 100;

/// Rounds a currency amount to two decimal places, half away from zero.
///
/// The result always carries a scale of two, so `3` becomes `3.00`.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("1.495").unwrap()).to_string(), "1.50");
/// assert_eq!(round_currency(Decimal::from_str("1.1175").unwrap()).to_string(), "1.12");
/// assert_eq!(round_currency(Decimal::ZERO).to_string(), "0.00");
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Builds the rental agreement for a checkout.
///
/// Rental days are validated before the discount, and the first failing
/// check is returned.
///
/// # Errors
///
/// - [`RentalError::InvalidRentalDays`] when `rental_days < 1`
/// - [`RentalError::InvalidDiscountPercent`] when `discount_percent` is outside `0..=100`
/// - [`RentalError::CalculationError`] when the due date is past the end of the calendar,
///   or a charge does not fit in a [`Decimal`]
///
/// # Example
///
/// ```
/// use tool_rental::calculation::checkout;
/// use tool_rental::error::RentalError;
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
/// let date = NaiveDate::from_ymd_opt(2015, 9, 3).unwrap();
///
/// let agreement = checkout(&jackhammer, 6, 0, date).unwrap();
/// assert_eq!(agreement.charge_days, 3);
/// assert_eq!(agreement.final_charge, Decimal::new(897, 2));
///
/// let error = checkout(&jackhammer, 5, 101, date).unwrap_err();
/// assert!(matches!(error, RentalError::InvalidDiscountPercent { .. }));
/// ```
pub fn checkout(
    tool: &ToolPolicy,
    rental_days: i32,
    discount_percent: i32,
    checkout_date: NaiveDate,
) -> RentalResult<RentalAgreement> {
    let rental_days = u32::try_from(rental_days)
        .ok()
        .filter(|days| *days >= 1)
        .ok_or(RentalError::InvalidRentalDays { rental_days })?;

    if !(0..=MAX_DISCOUNT_PERCENT).contains(&discount_percent) {
        return Err(RentalError::InvalidDiscountPercent { discount_percent });
    }
    let discount_percent = discount_percent as u32;

    let due_date = checkout_date
        .checked_add_days(Days::new(u64::from(rental_days)))
        .ok_or_else(|| RentalError::CalculationError {
            message: format!(
                "due date {} days after {} is out of range",
                rental_days, checkout_date
            ),
        })?;

    let charge_days = count_charge_days(tool, checkout_date, due_date);

    let daily_charge = round_currency(tool.daily_charge);
    let pre_discount_charge = tool
        .daily_charge
        .checked_mul(Decimal::from(charge_days))
        .map(round_currency)
        .ok_or_else(|| overflow("pre-discount charge", &tool.code))?;
    let discount_amount = pre_discount_charge
        .checked_mul(Decimal::from(discount_percent))
        .and_then(|amount| amount.checked_div(Decimal::ONE_HUNDRED))
        .map(round_currency)
        .ok_or_else(|| overflow("discount amount", &tool.code))?;
    let final_charge = pre_discount_charge
        .checked_sub(discount_amount)
        .map(round_currency)
        .ok_or_else(|| overflow("final charge", &tool.code))?;

    debug!(
        tool_code = %tool.code,
        rental_days,
        charge_days,
        final_charge = %final_charge,
        "Rental agreement built"
    );

    Ok(RentalAgreement {
        tool_code: tool.code.clone(),
        tool_type: tool.tool_type.clone(),
        brand: tool.brand.clone(),
        rental_days,
        checkout_date,
        due_date,
        charge_days,
        daily_charge,
        pre_discount_charge,
        discount_percent,
        discount_amount,
        final_charge,
    })
}

fn overflow(field: &str, tool_code: &str) -> RentalError {
    RentalError::CalculationError {
        message: format!("{} for tool {} is out of range", field, tool_code),
    }
}
