//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the tool
//! catalog from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{RentalError, RentalResult};
use crate::models::ToolPolicy;

use super::types::{ChargesConfig, ToolCatalog, ToolsConfig};

/// Loads and provides access to the tool catalog.
///
/// # Directory Structure
///
/// ```text
/// config/catalog/
/// ├── charges.yaml   # Daily charge and billing flags per tool type
/// └── tools.yaml     # Tool codes, types and brands
/// ```
///
/// # Example
///
/// ```no_run
/// use tool_rental::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/catalog").unwrap();
///
/// let ladder = loader.get_tool("LADW").unwrap();
/// println!("{} {} at ${}/day", ladder.brand, ladder.tool_type, ladder.daily_charge);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    catalog: ToolCatalog,
}

impl ConfigLoader {
    /// Loads the catalog from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`RentalError::ConfigNotFound`] if a file is missing
    /// - [`RentalError::ConfigParseError`] if a file contains invalid YAML
    /// - [`RentalError::InvalidTool`] if the files are inconsistent
    pub fn load<P: AsRef<Path>>(path: P) -> RentalResult<Self> {
        let path = path.as_ref();

        let charges = Self::load_yaml::<ChargesConfig>(&path.join("charges.yaml"))?;
        let tools = Self::load_yaml::<ToolsConfig>(&path.join("tools.yaml"))?;

        let catalog = ToolCatalog::build(&charges.charges, tools.tools)?;

        Ok(Self { catalog })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> RentalResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RentalError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| RentalError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying catalog.
    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Gets a tool by its code.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tool_rental::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/catalog")?;
    /// let chainsaw = loader.get_tool("CHNS")?;
    /// assert!(chainsaw.holiday_charge);
    /// # Ok::<(), tool_rental::error::RentalError>(())
    /// ```
    pub fn get_tool(&self, code: &str) -> RentalResult<&ToolPolicy> {
        self.catalog
            .get(code)
            .ok_or_else(|| RentalError::ToolNotFound {
                code: code.to_string(),
            })
    }

    /// Returns all tools ordered by code.
    pub fn tools(&self) -> Vec<&ToolPolicy> {
        self.catalog.tools().collect()
    }
}
