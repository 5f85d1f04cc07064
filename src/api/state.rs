//! Application state for the HRMS calculation engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::HolidayCalendar;
use crate::config::{ConfigLoader, PayrollPolicy};

/// Shared application state.
///
/// Holds the loaded configuration and the working-day calendar built from
/// it once at start-up. Both are read-only.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    calendar: Arc<HolidayCalendar>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        let calendar = config.calendar();
        Self {
            config: Arc::new(config),
            calendar: Arc::new(calendar),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the working-day calendar every leave calculation uses.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Returns the payroll policy.
    pub fn payroll_policy(&self) -> PayrollPolicy {
        self.config.payroll_policy()
    }
}
