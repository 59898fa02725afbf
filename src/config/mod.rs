//! Configuration loading and management for the tool rental engine.
//!
//! This module loads the tool catalog from YAML files: per-type charges and
//! the list of rentable tools.
//!
//! # Example
//!
//! ```no_run
//! use tool_rental::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/catalog").unwrap();
//! println!("Loaded {} tools", config.catalog().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ChargesConfig, ToolCatalog, ToolCharge, ToolEntry, ToolsConfig};
