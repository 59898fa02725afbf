//! Calculation logic for the tool rental engine.
//!
//! This module contains observed holiday detection, day-type detection,
//! charge-day counting across a rental period, and construction of the
//! priced rental agreement.

mod agreement;
mod charge_days;
mod day_detection;
mod holidays;

pub use agreement::{MAX_DISCOUNT_PERCENT, checkout, round_currency};
pub use charge_days::{RentalDay, classify_rental_day, count_charge_days, rental_day_breakdown};
pub use day_detection::{DayType, get_day_type};
pub use holidays::{
    Holiday, is_observed_independence_day, is_observed_labor_day, observed_holiday,
};
