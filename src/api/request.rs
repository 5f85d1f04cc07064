//! Request types for the HRMS calculation engine API.
//!
//! This module defines the JSON request structures for each endpoint and
//! their conversions into domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    Allowances, AttendanceSummary, Deductions, LeaveSubmission, LeaveType, Overtime, PayrollInput,
};

/// Request body for the `/leave/duration` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveDurationRequest {
    /// The first day of leave.
    pub start_date: NaiveDate,
    /// The last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Whether each day is taken as a half day.
    #[serde(default)]
    pub half_day: bool,
}

/// Request body for the `/leave/submit` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveSubmissionRequest {
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
    /// Free-text reason.
    #[serde(default)]
    pub reason: String,
}

/// Request body for the `/attendance/proration` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProrationRequest {
    /// Attendance counters for the month.
    pub attendance: AttendanceSummary,
    /// Full monthly basic salary.
    pub basic_salary: Decimal,
}

/// Request body for the `/payroll/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The employee being paid.
    pub employee_id: String,
    /// Pay month (1-12).
    pub month: u32,
    /// Pay year.
    pub year: i32,
    /// Full monthly basic salary.
    pub basic_salary: Decimal,
    /// Allowances for the month.
    #[serde(default)]
    pub allowances: Allowances,
    /// Deductions for the month.
    #[serde(default)]
    pub deductions: Deductions,
    /// Overtime for the month.
    #[serde(default)]
    pub overtime: Overtime,
    /// Attendance counters for the month.
    #[serde(default)]
    pub attendance: AttendanceSummary,
}

impl From<LeaveSubmissionRequest> for LeaveSubmission {
    fn from(req: LeaveSubmissionRequest) -> Self {
        LeaveSubmission {
            employee_id: req.employee_id,
            leave_type: req.leave_type,
            start_date: req.start_date,
            end_date: req.end_date,
            half_day: req.half_day,
            reason: req.reason,
        }
    }
}

impl From<PayrollRequest> for PayrollInput {
    fn from(req: PayrollRequest) -> Self {
        PayrollInput {
            employee_id: req.employee_id,
            month: req.month,
            year: req.year,
            basic_salary: req.basic_salary,
            allowances: req.allowances,
            deductions: req.deductions,
            overtime: req.overtime,
            attendance: req.attendance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_leave_duration_request() {
        let json = r#"{"start_date": "2025-09-09", "end_date": "2025-09-14"}"#;
        let request: LeaveDurationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.start_date,
            NaiveDate::from_ymd_opt(2025, 9, 9).unwrap()
        );
        assert!(!request.half_day);
    }

    #[test]
    fn test_leave_submission_conversion() {
        let json = r#"{
            "employee_id": "emp_001",
            "leave_type": "sick",
            "start_date": "2025-09-09",
            "end_date": "2025-09-10",
            "half_day": true
        }"#;
        let request: LeaveSubmissionRequest = serde_json::from_str(json).unwrap();
        let submission: LeaveSubmission = request.into();
        assert_eq!(submission.leave_type, LeaveType::Sick);
        assert!(submission.half_day);
        assert!(submission.reason.is_empty());
    }

    #[test]
    fn test_payroll_request_conversion() {
        let json = r#"{
            "employee_id": "emp_001",
            "month": 9,
            "year": 2025,
            "basic_salary": 60000,
            "overtime": {"hours": 4, "rate": "250.50"},
            "attendance": {"working_days": 22, "present_days": 20}
        }"#;
        let request: PayrollRequest = serde_json::from_str(json).unwrap();
        let input: PayrollInput = request.into();
        assert_eq!(input.basic_salary, Decimal::from(60000));
        assert_eq!(input.overtime.rate, Decimal::new(25050, 2));
        assert_eq!(input.attendance.present_days, 20);
        assert_eq!(input.allowances, Allowances::default());
    }
}
