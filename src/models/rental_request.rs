//! Rental request model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::checkout;
use crate::error::RentalResult;

use super::{RentalAgreement, ToolPolicy};

/// The inputs of a single checkout.
///
/// Counts are signed so that out-of-range values reach validation instead of
/// being rejected by the type system; see [`checkout`].
///
/// # Example
///
/// ```
/// use tool_rental::models::{RentalRequest, ToolPolicy};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let request = RentalRequest {
///     tool: ToolPolicy {
///         code: "JAKR".to_string(),
///         tool_type: "Jackhammer".to_string(),
///         brand: "Ridgid".to_string(),
///         daily_charge: Decimal::new(299, 2),
///         weekday_charge: true,
///         weekend_charge: false,
///         holiday_charge: false,
///     },
///     rental_days: 9,
///     discount_percent: 0,
///     checkout_date: NaiveDate::from_ymd_opt(2015, 7, 2).unwrap(),
/// };
///
/// let agreement = request.checkout().unwrap();
/// assert_eq!(agreement.charge_days, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRequest {
    /// The tool being rented.
    pub tool: ToolPolicy,
    /// Number of calendar days rented. Must be at least 1.
    pub rental_days: i32,
    /// Whole-number discount percentage, 0 to 100 inclusive.
    pub discount_percent: i32,
    /// The day the tool leaves the store.
    pub checkout_date: NaiveDate,
}

impl RentalRequest {
    /// Validates the request and builds its rental agreement.
    pub fn checkout(&self) -> RentalResult<RentalAgreement> {
        checkout(
            &self.tool,
            self.rental_days,
            self.discount_percent,
            self.checkout_date,
        )
    }
}
