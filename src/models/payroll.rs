//! Payroll input and record models.
//!
//! [`PayrollInput`] is the form data the payroll handler receives;
//! [`PayrollRecord`] is what the engine hands back for persistence, with every
//! derived monetary field filled in.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AttendanceSummary;

/// Monthly allowances paid on top of basic salary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Allowances {
    /// Housing allowance.
    pub housing: Decimal,
    /// Transport allowance.
    pub transport: Decimal,
    /// Medical allowance.
    pub medical: Decimal,
    /// Any other allowance.
    pub other: Decimal,
}

/// Monthly deductions withheld from gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Deductions {
    /// Income tax withheld.
    pub tax: Decimal,
    /// Insurance premium.
    pub insurance: Decimal,
    /// Provident fund contribution.
    pub provident_fund: Decimal,
    /// Any other deduction.
    pub other: Decimal,
}

/// Overtime worked and the rate paid per hour.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Overtime {
    /// Overtime hours worked.
    pub hours: Decimal,
    /// Rate paid per overtime hour.
    pub rate: Decimal,
}

/// Payroll form data for one employee and one month.
///
/// Figures are assumed to be non-negative; the caller validates them.
///
/// # Example
///
/// ```
/// use hrms_engine::models::PayrollInput;
///
/// let json = r#"{
///     "employee_id": "emp_001",
///     "month": 9,
///     "year": 2025,
///     "basic_salary": "60000",
///     "attendance": {"working_days": 22, "present_days": 20}
/// }"#;
/// let input: PayrollInput = serde_json::from_str(json).unwrap();
/// assert_eq!(input.month, 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// The employee being paid.
    pub employee_id: String,
    /// Pay month (1-12).
    pub month: u32,
    /// Pay year.
    pub year: i32,
    /// Full monthly basic salary before pro-ration.
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

/// A computed payroll record.
///
/// Satisfies `gross_salary = pro_rated_basic_salary + total_allowances +
/// overtime_pay` and `net_salary = gross_salary - total_deductions`. No
/// currency rounding is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// The employee being paid.
    pub employee_id: String,
    /// Pay month (1-12).
    pub month: u32,
    /// Pay year.
    pub year: i32,
    /// Full monthly basic salary before pro-ration.
    pub basic_salary: Decimal,
    /// Allowances as submitted.
    pub allowances: Allowances,
    /// Deductions as submitted.
    pub deductions: Deductions,
    /// Overtime as submitted.
    pub overtime: Overtime,
    /// Fraction of scheduled days attended.
    pub attendance_ratio: Decimal,
    /// Basic salary scaled by the attendance ratio.
    pub pro_rated_basic_salary: Decimal,
    /// Overtime hours multiplied by the overtime rate.
    pub overtime_pay: Decimal,
    /// Sum of all allowances.
    pub total_allowances: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// Pro-rated basic salary plus allowances plus overtime pay.
    pub gross_salary: Decimal,
    /// Gross salary minus deductions.
    pub net_salary: Decimal,
}
