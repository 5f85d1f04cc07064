//! Configuration loading and management for the HRMS calculation engine.
//!
//! This module loads engine configuration from a directory of YAML files:
//! deployment metadata, the holiday calendar, and the payroll policy.
//!
//! # Example
//!
//! ```no_run
//! use hrms_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/hrms").unwrap();
//! println!("Loaded engine: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalendarConfig, EngineConfig, EngineMetadata, PayrollConfig, PayrollPolicy};
