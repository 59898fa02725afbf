//! Request types for the tool rental API.
//!
//! This module defines the JSON request structure shared by the
//! `/checkout` and `/checkout/receipt` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{RentalRequest, ToolPolicy};

/// Request body for the checkout endpoints.
///
/// The tool is referenced by code and resolved against the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Code of the tool to rent (e.g., "LADW").
    pub tool_code: String,
    /// Number of calendar days rented.
    pub rental_days: i32,
    /// Whole-number discount percentage.
    #[serde(default)]
    pub discount_percent: i32,
    /// The day the tool leaves the store.
    pub checkout_date: NaiveDate,
}

impl CheckoutRequest {
    /// Pairs the request with its resolved tool.
    pub fn into_rental_request(self, tool: ToolPolicy) -> RentalRequest {
        RentalRequest {
            tool,
            rental_days: self.rental_days,
            discount_percent: self.discount_percent,
            checkout_date: self.checkout_date,
        }
    }
}
