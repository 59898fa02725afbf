//! Tool rental checkout engine.
//!
//! This crate counts the billable days of a tool rental, honouring each
//! tool's weekday, weekend and holiday charge flags along with the observed
//! Independence Day and Labor Day holidays, then prices the resulting
//! rental agreement.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
