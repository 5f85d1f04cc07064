//! Configuration types for the HRMS calculation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::Holiday;

/// Metadata identifying the deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// Human-readable name of the engine deployment.
    pub name: String,
    /// Version or effective date of this configuration.
    pub version: String,
    /// The organisation the configuration belongs to.
    pub organisation: String,
}

/// Calendar configuration file structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarConfig {
    /// Dates treated as non-working in addition to weekends.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

/// Policy decisions applied during payroll calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PayrollPolicy {
    /// Clamp the attendance ratio to 1 when present days exceed working days.
    #[serde(default)]
    pub cap_attendance_ratio: bool,
}

/// Payroll configuration file structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayrollConfig {
    /// The payroll policy.
    #[serde(default)]
    pub policy: PayrollPolicy,
}

/// The complete engine configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the various
/// YAML files in a configuration directory.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    metadata: EngineMetadata,
    /// Holidays sorted by date.
    holidays: Vec<Holiday>,
    payroll: PayrollConfig,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(metadata: EngineMetadata, calendar: CalendarConfig, payroll: PayrollConfig) -> Self {
        let mut holidays = calendar.holidays;
        holidays.sort_by(|a, b| a.date.cmp(&b.date));
        Self {
            metadata,
            holidays,
            payroll,
        }
    }

    /// Returns the engine metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the configured holidays, oldest first.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Returns the payroll policy.
    pub fn payroll_policy(&self) -> PayrollPolicy {
        self.payroll.policy
    }
}
