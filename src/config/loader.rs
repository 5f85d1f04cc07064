//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::calculation::HolidayCalendar;
use crate::error::{EngineError, EngineResult};
use crate::models::{DateRange, Holiday};

use super::types::{CalendarConfig, EngineConfig, EngineMetadata, PayrollConfig, PayrollPolicy};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/hrms/
/// ├── engine.yaml     # Engine metadata
/// ├── calendar.yaml   # Holiday dates (may be empty)
/// └── payroll.yaml    # Payroll policy
/// ```
///
/// # Example
///
/// ```no_run
/// use hrms_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/hrms")?;
/// println!("Loaded: {}", loader.metadata().name);
/// let calendar = loader.calendar();
/// # Ok::<(), hrms_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if any file is missing and
    /// [`EngineError::ConfigParseError`] if any file contains invalid YAML
    /// or is missing a required field.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<EngineMetadata>(&path.join("engine.yaml"))?;
        let calendar = Self::load_yaml::<CalendarConfig>(&path.join("calendar.yaml"))?;
        let payroll = Self::load_yaml::<PayrollConfig>(&path.join("payroll.yaml"))?;

        let config = EngineConfig::new(metadata, calendar, payroll);

        info!(
            path = %path.display(),
            name = %config.metadata().name,
            organisation = %config.metadata().organisation,
            holidays = config.holidays().len(),
            cap_attendance_ratio = config.payroll_policy().cap_attendance_ratio,
            "Loaded engine configuration"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the engine metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        self.config.metadata()
    }

    /// Builds the working-day calendar from the configured holidays.
    pub fn calendar(&self) -> HolidayCalendar {
        HolidayCalendar::new(self.config.holidays())
    }

    /// Returns the configured holidays falling within `range`.
    pub fn holidays_in(&self, range: &DateRange) -> Vec<&Holiday> {
        self.config
            .holidays()
            .iter()
            .filter(|h| range.contains_date(h.date))
            .collect()
    }

    /// Returns the payroll policy.
    pub fn payroll_policy(&self) -> PayrollPolicy {
        self.config.payroll_policy()
    }
}
