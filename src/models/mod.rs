//! Core data models for the HRMS calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod calculation_result;
mod date_range;
mod leave;
mod payroll;

pub use attendance::AttendanceSummary;
pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, PayrollCalculation};
pub use date_range::{DateRange, Holiday};
pub use leave::{LeaveRequest, LeaveStatus, LeaveSubmission, LeaveType};
pub use payroll::{Allowances, Deductions, Overtime, PayrollInput, PayrollRecord};
