//! Configuration types for the tool catalog.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the joined
//! [`ToolCatalog`] built from them.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use crate::error::{RentalError, RentalResult};
use crate::models::ToolPolicy;

/// Billing terms shared by every tool of one type.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCharge {
    /// Charge per billable day.
    pub daily_charge: Decimal,
    /// Whether weekdays are billed.
    pub weekday_charge: bool,
    /// Whether weekends are billed.
    pub weekend_charge: bool,
    /// Whether observed holidays are billed.
    pub holiday_charge: bool,
}

/// Charges configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ChargesConfig {
    /// Map of tool type to its billing terms.
    pub charges: HashMap<String, ToolCharge>,
}

/// A single tool in `tools.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolEntry {
    /// Unique tool code.
    pub code: String,
    /// Tool type; must name an entry in the charges configuration.
    pub tool_type: String,
    /// Manufacturer brand.
    pub brand: String,
}

/// Tools configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolsConfig {
    /// The rentable tools.
    pub tools: Vec<ToolEntry>,
}

/// The rentable tools, keyed by code, with their charge policies resolved.
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    tools: BTreeMap<String, ToolPolicy>,
}

impl ToolCatalog {
    /// Joins tool entries with their type's charges.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::InvalidTool`] if a tool names an unknown type,
    /// its type has a negative daily charge, or its code is duplicated.
    pub fn build(
        charges: &HashMap<String, ToolCharge>,
        tools: Vec<ToolEntry>,
    ) -> RentalResult<Self> {
        let mut catalog = BTreeMap::new();

        for entry in tools {
            let charge = charges
                .get(&entry.tool_type)
                .ok_or_else(|| RentalError::InvalidTool {
                    code: entry.code.clone(),
                    message: format!("unknown tool type '{}'", entry.tool_type),
                })?;

            if charge.daily_charge < Decimal::ZERO {
                return Err(RentalError::InvalidTool {
                    code: entry.code,
                    message: format!(
                        "daily charge {} must not be negative",
                        charge.daily_charge
                    ),
                });
            }

            if catalog.contains_key(&entry.code) {
                return Err(RentalError::InvalidTool {
                    code: entry.code,
                    message: "duplicate tool code".to_string(),
                });
            }

            let policy = ToolPolicy {
                code: entry.code.clone(),
                tool_type: entry.tool_type,
                brand: entry.brand,
                daily_charge: charge.daily_charge,
                weekday_charge: charge.weekday_charge,
                weekend_charge: charge.weekend_charge,
                holiday_charge: charge.holiday_charge,
            };
            catalog.insert(entry.code, policy);
        }

        Ok(Self { tools: catalog })
    }

    /// Returns the tool with the given code, if present.
    pub fn get(&self, code: &str) -> Option<&ToolPolicy> {
        self.tools.get(code)
    }

    /// Returns all tools ordered by code.
    pub fn tools(&self) -> impl Iterator<Item = &ToolPolicy> {
        self.tools.values()
    }

    /// Returns the number of tools in the catalog.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if the catalog has no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
