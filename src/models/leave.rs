//! Leave request models.
//!
//! This module defines the [`LeaveRequest`] record together with the
//! [`LeaveSubmission`] an employee files and the enums describing leave
//! type and approval status.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineResult;

use super::DateRange;

/// The category of leave being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Paid annual leave.
    Annual,
    /// Sick leave.
    Sick,
    /// Personal or carer's leave.
    Personal,
    /// Maternity leave.
    Maternity,
    /// Paternity leave.
    Paternity,
    /// Leave without pay.
    Unpaid,
    /// Any other leave category.
    Other,
}

/// Where a leave request sits in its approval lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Submitted and awaiting a decision.
    #[default]
    Pending,
    /// Approved by HR or a manager.
    Approved,
    /// Rejected by HR or a manager.
    Rejected,
    /// Withdrawn by the employee.
    Cancelled,
}

/// A leave application as filed by an employee, before its duration is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveSubmission {
    /// The employee requesting leave.
    pub employee_id: String,
    /// The category of leave.
    pub leave_type: LeaveType,
    /// The first day of leave.
    pub start_date: NaiveDate,
    /// The last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Whether each day is taken as a half day.
    #[serde(default)]
    pub half_day: bool,
    /// Free-text reason supplied by the employee.
    #[serde(default)]
    pub reason: String,
}

impl LeaveSubmission {
    /// Returns the validated date range covered by this submission.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidRange`] when the start date
    /// falls after the end date.
    pub fn range(&self) -> EngineResult<DateRange> {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// A stamped leave request.
///
/// `number_of_days` is computed once, when the submission is stamped, and is
/// read back unchanged by every later view (approval, dashboards, payroll).
///
/// # Example
///
/// ```
/// use hrms_engine::models::{LeaveRequest, LeaveStatus, LeaveType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let request = LeaveRequest {
///     id: Uuid::new_v4(),
///     employee_id: "emp_001".to_string(),
///     leave_type: LeaveType::Annual,
///     start_date: NaiveDate::from_ymd_opt(2025, 9, 9).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 9, 14).unwrap(),
///     half_day: false,
///     number_of_days: Decimal::from(4),
///     reason: String::new(),
///     status: LeaveStatus::Pending,
/// };
/// assert_eq!(request.status, LeaveStatus::Pending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier for the leave request.
    pub id: Uuid,
    /// The employee requesting leave.
    pub employee_id: String,
    /// The category of leave.
    pub leave_type: LeaveType,
    /// The first day of leave.
    pub start_date: NaiveDate,
    /// The last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Whether each day is taken as a half day.
    pub half_day: bool,
    /// Countable leave days, fixed at submission time.
    pub number_of_days: Decimal,
    /// Free-text reason supplied by the employee.
    pub reason: String,
    /// Approval status.
    pub status: LeaveStatus,
}
