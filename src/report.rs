//! Rental agreement receipt rendering.
//!
//! Renders a finished [`RentalAgreement`] as a fixed-format, line-per-field
//! text receipt between two dashed rules. Dates print as `MM/DD/YY` and money as `$#,##0.00`.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calculation::round_currency;
use crate::models::RentalAgreement;

/// Formats a date as `MM/DD/YY`.
///
/// # Example
///
/// ```
/// use tool_rental::report::format_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(format_date(NaiveDate::from_ymd_opt(2015, 9, 3).unwrap()), "09/03/15");
/// ```
pub fn format_date(date: NaiveDate) -> String {
    date.format("%m/%d/%y").to_string()
}

/// Formats an amount as `$#,##0.00`, rounding half-up to cents.
///
/// # Example
///
/// ```
/// use tool_rental::report::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Decimal::from_str("1234567.5").unwrap()), "$1,234,567.50");
/// assert_eq!(format_currency(Decimal::from_str("0.4").unwrap()), "$0.40");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_currency(amount);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let text = rounded.abs().to_string();
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}${}.{}", sign, grouped, cents)
}

/// Border printed above and below the receipt body.
pub const RECEIPT_RULE: &str = "----------------------------------------------------";

/// Renders the agreement as a receipt, one `Label: value` line per field,
/// framed by [`RECEIPT_RULE`].
///
/// # Example
///
/// ```
/// use tool_rental::calculation::checkout;
/// use tool_rental::models::ToolPolicy;
/// use tool_rental::report::render_agreement;
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
/// let agreement = checkout(&ladder, 3, 10, NaiveDate::from_ymd_opt(2020, 7, 2).unwrap()).unwrap();
///
/// let receipt = render_agreement(&agreement);
/// assert!(receipt.contains("Due Date: 07/05/20\n"));
/// assert!(receipt.contains("Final Charge: $3.58\n"));
/// ```
pub fn render_agreement(agreement: &RentalAgreement) -> String {
    let lines = [
        RECEIPT_RULE.to_string(),
        format!("Tool code: {}", agreement.tool_code),
        format!("Tool type: {}", agreement.tool_type),
        format!("Brand: {}", agreement.brand),
        format!("Rental Days: {}", agreement.rental_days),
        format!("Charge Days: {}", agreement.charge_days),
        format!("Checkout Date: {}", format_date(agreement.checkout_date)),
        format!("Due Date: {}", format_date(agreement.due_date)),
        format!(
            "Daily Rental Charge: {}",
            format_currency(agreement.daily_charge)
        ),
        format!(
            "Pre-Discount Charge: {}",
            format_currency(agreement.pre_discount_charge)
        ),
        format!("Discount Percent: {}%", agreement.discount_percent),
        format!(
            "Discount Amount: {}",
            format_currency(agreement.discount_amount)
        ),
        format!("Final Charge: {}", format_currency(agreement.final_charge)),
        RECEIPT_RULE.to_string(),
    ];

    let mut receipt = lines.join("\n");
    receipt.push('\n');
    receipt
}
