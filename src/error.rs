//! Error types for the tool rental engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during checkout.

use thiserror::Error;

/// The main error type for the tool rental engine.
///
/// The two validation variants carry fixed, user-facing messages. Callers
/// are expected to correct the input and retry the whole checkout.
///
/// # Example
///
/// ```
/// use tool_rental::error::RentalError;
///
/// let error = RentalError::InvalidRentalDays { rental_days: 0 };
/// assert_eq!(
///     error.to_string(),
///     "Please enter a valid rental day count. The rental day count must be 1 or greater."
/// );
/// ```
#[derive(Debug, Error)]
pub enum RentalError {
    /// The rental day count was less than one.
    #[error("Please enter a valid rental day count. The rental day count must be 1 or greater.")]
    InvalidRentalDays {
        /// The rejected rental day count.
        rental_days: i32,
    },

    /// The discount percentage was outside 0..=100.
    #[error(
        "Please enter a valid discount percentage. The discount percentage must be between 0% and 100%."
    )]
    InvalidDiscountPercent {
        /// The rejected discount percentage.
        discount_percent: i32,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Tool code was not found in the catalog.
    #[error("Tool not found: {code}")]
    ToolNotFound {
        /// The tool code that was not found.
        code: String,
    },

    /// A catalog entry was inconsistent.
    #[error("Invalid tool '{code}': {message}")]
    InvalidTool {
        /// The code of the offending tool.
        code: String,
        /// A description of what made the tool invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl RentalError {
    /// Returns true for the two input validation failures of a checkout.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RentalError::InvalidRentalDays { .. } | RentalError::InvalidDiscountPercent { .. }
        )
    }
}

/// A type alias for Results that return RentalError.
pub type RentalResult<T> = Result<T, RentalError>;
