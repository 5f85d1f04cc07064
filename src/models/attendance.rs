//! Attendance summary model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Attendance counters for one employee over one pay month.
///
/// Supplied read-only by the attendance subsystem. Only `working_days` and
/// `present_days` drive pro-ration; the remaining counters are carried so the
/// payroll record can be reconciled against the attendance sheet.
///
/// # Example
///
/// ```
/// use hrms_engine::models::AttendanceSummary;
///
/// let json = r#"{"working_days": 22, "present_days": 20}"#;
/// let attendance: AttendanceSummary = serde_json::from_str(json).unwrap();
/// assert_eq!(attendance.half_days, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Scheduled working days in the period.
    pub working_days: u32,
    /// Days the employee was present.
    pub present_days: u32,
    /// Days recorded as half days.
    #[serde(default)]
    pub half_days: u32,
    /// Number of late arrivals.
    #[serde(default)]
    pub late_arrivals: u32,
    /// Number of early departures.
    #[serde(default)]
    pub early_departures: u32,
    /// Overtime hours logged by the attendance system.
    #[serde(default)]
    pub overtime_hours: Decimal,
}

impl AttendanceSummary {
    /// Returns true when more days were attended than were scheduled.
    pub fn present_exceeds_working(&self) -> bool {
        self.present_days > self.working_days
    }
}
