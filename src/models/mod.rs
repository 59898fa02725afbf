//! Core data models for the tool rental engine.
//!
//! This module contains the domain values that flow through a checkout:
//! the tool's charge policy, the rental request and the priced agreement.

mod rental_agreement;
mod rental_request;
mod tool;

pub use rental_agreement::RentalAgreement;
pub use rental_request::RentalRequest;
pub use tool::ToolPolicy;
