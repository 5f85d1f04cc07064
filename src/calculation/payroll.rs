//! Payroll calculation.
//!
//! Combines attendance pro-ration with overtime, allowances and deductions to
//! produce a [`PayrollRecord`]. The arithmetic is exact decimal arithmetic and
//! no currency rounding is applied.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::config::PayrollPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Allowances, AuditStep, AuditTrace, Deductions, Overtime, PayrollCalculation, PayrollInput,
    PayrollRecord,
};

use super::proration::{calculate_proration, compute_proration};

/// Returns overtime hours multiplied by the overtime rate.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPayroll`] when the product does not fit in a
/// `Decimal`.
///
/// # Example
///
/// ```
/// use hrms_engine::calculation::calculate_overtime_pay;
/// use hrms_engine::models::Overtime;
/// use rust_decimal::Decimal;
///
/// let overtime = Overtime { hours: Decimal::from(10), rate: Decimal::from(300) };
/// assert_eq!(calculate_overtime_pay(&overtime).unwrap(), Decimal::from(3000));
/// ```
pub fn calculate_overtime_pay(overtime: &Overtime) -> EngineResult<Decimal> {
    overtime
        .hours
        .checked_mul(overtime.rate)
        .ok_or_else(|| EngineError::amount_overflow("overtime"))
}

fn checked_sum(field: &str, amounts: &[Decimal]) -> EngineResult<Decimal> {
    amounts.iter().try_fold(Decimal::ZERO, |total, amount| {
        total
            .checked_add(*amount)
            .ok_or_else(|| EngineError::amount_overflow(field))
    })
}

/// Returns the sum of every allowance.
pub fn total_allowances(allowances: &Allowances) -> EngineResult<Decimal> {
    checked_sum(
        "allowances",
        &[
            allowances.housing,
            allowances.transport,
            allowances.medical,
            allowances.other,
        ],
    )
}

/// Returns the sum of every deduction.
pub fn total_deductions(deductions: &Deductions) -> EngineResult<Decimal> {
    checked_sum(
        "deductions",
        &[
            deductions.tax,
            deductions.insurance,
            deductions.provident_fund,
            deductions.other,
        ],
    )
}

fn build_record(
    input: &PayrollInput,
    attendance_ratio: Decimal,
    pro_rated: Decimal,
) -> EngineResult<PayrollRecord> {
    let overtime_pay = calculate_overtime_pay(&input.overtime)?;
    let total_allowances = total_allowances(&input.allowances)?;
    let total_deductions = total_deductions(&input.deductions)?;
    let gross_salary = checked_sum("gross_salary", &[pro_rated, total_allowances, overtime_pay])?;
    let net_salary = gross_salary
        .checked_sub(total_deductions)
        .ok_or_else(|| EngineError::amount_overflow("net_salary"))?;

    Ok(PayrollRecord {
        employee_id: input.employee_id.clone(),
        month: input.month,
        year: input.year,
        basic_salary: input.basic_salary,
        allowances: input.allowances.clone(),
        deductions: input.deductions.clone(),
        overtime: input.overtime.clone(),
        attendance_ratio,
        pro_rated_basic_salary: pro_rated,
        overtime_pay,
        total_allowances,
        total_deductions,
        gross_salary,
        net_salary,
    })
}

/// Computes a payroll record from form data with the uncapped pro-ration rule.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPayroll`] when any intermediate amount does
/// not fit in a `Decimal`.
///
/// # Example
///
/// ```
/// use hrms_engine::calculation::compute_payroll;
/// use hrms_engine::models::{AttendanceSummary, PayrollInput};
/// use rust_decimal::Decimal;
///
/// let input = PayrollInput {
///     employee_id: "emp_001".to_string(),
///     month: 9,
///     year: 2025,
///     basic_salary: Decimal::from(60000),
///     allowances: Default::default(),
///     deductions: Default::default(),
///     overtime: Default::default(),
///     attendance: AttendanceSummary::default(),
/// };
///
/// let record = compute_payroll(&input).unwrap();
/// assert_eq!(record.gross_salary, Decimal::from(60000));
/// assert_eq!(record.net_salary, Decimal::from(60000));
/// ```
pub fn compute_payroll(input: &PayrollInput) -> EngineResult<PayrollRecord> {
    let proration = compute_proration(&input.attendance, input.basic_salary)?;
    build_record(
        input,
        proration.attendance_ratio,
        proration.pro_rated_basic_salary,
    )
}

/// Checks the fields the engine cannot interpret when out of range.
fn validate_period(input: &PayrollInput) -> EngineResult<()> {
    if !(1..=12).contains(&input.month) {
        return Err(EngineError::InvalidPayroll {
            field: "month".to_string(),
            message: format!("must be between 1 and 12, got {}", input.month),
        });
    }
    Ok(())
}

/// Runs a full payroll calculation with audit trail under a payroll policy.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPayroll`] when the month is outside 1-12 or
/// when an amount does not fit in a `Decimal`.
pub fn calculate_payroll(
    input: &PayrollInput,
    policy: &PayrollPolicy,
) -> EngineResult<PayrollCalculation> {
    let start_time = Instant::now();
    validate_period(input)?;

    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings = Vec::new();

    let proration_result = calculate_proration(&input.attendance, input.basic_salary, policy, 1)?;
    steps.push(proration_result.audit_step);
    warnings.extend(proration_result.warning);

    let proration = proration_result.proration;
    let payroll = build_record(
        input,
        proration.attendance_ratio,
        proration.pro_rated_basic_salary,
    )?;

    steps.push(AuditStep {
        step_number: 2,
        rule_id: "overtime_pay".to_string(),
        rule_name: "Overtime Pay".to_string(),
        input: serde_json::json!({
            "hours": input.overtime.hours.normalize().to_string(),
            "rate": input.overtime.rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "overtime_pay": payroll.overtime_pay.normalize().to_string()
        }),
        reasoning: format!(
            "{}h x ${} = ${}",
            input.overtime.hours.normalize(),
            input.overtime.rate.normalize(),
            payroll.overtime_pay.normalize()
        ),
    });

    steps.push(AuditStep {
        step_number: 3,
        rule_id: "allowances".to_string(),
        rule_name: "Allowances".to_string(),
        input: serde_json::to_value(&input.allowances).unwrap_or_default(),
        output: serde_json::json!({
            "total_allowances": payroll.total_allowances.normalize().to_string()
        }),
        reasoning: format!(
            "housing + transport + medical + other = ${}",
            payroll.total_allowances.normalize()
        ),
    });

    steps.push(AuditStep {
        step_number: 4,
        rule_id: "gross_salary".to_string(),
        rule_name: "Gross Salary".to_string(),
        input: serde_json::json!({
            "pro_rated_basic_salary": payroll.pro_rated_basic_salary.normalize().to_string(),
            "total_allowances": payroll.total_allowances.normalize().to_string(),
            "overtime_pay": payroll.overtime_pay.normalize().to_string()
        }),
        output: serde_json::json!({
            "gross_salary": payroll.gross_salary.normalize().to_string()
        }),
        reasoning: format!(
            "${} + ${} + ${} = ${}",
            payroll.pro_rated_basic_salary.normalize(),
            payroll.total_allowances.normalize(),
            payroll.overtime_pay.normalize(),
            payroll.gross_salary.normalize()
        ),
    });

    steps.push(AuditStep {
        step_number: 5,
        rule_id: "net_salary".to_string(),
        rule_name: "Net Salary".to_string(),
        input: serde_json::json!({
            "gross_salary": payroll.gross_salary.normalize().to_string(),
            "deductions": serde_json::to_value(&input.deductions).unwrap_or_default()
        }),
        output: serde_json::json!({
            "total_deductions": payroll.total_deductions.normalize().to_string(),
            "net_salary": payroll.net_salary.normalize().to_string()
        }),
        reasoning: format!(
            "${} - ${} = ${}",
            payroll.gross_salary.normalize(),
            payroll.total_deductions.normalize(),
            payroll.net_salary.normalize()
        ),
    });

    let duration_us = start_time.elapsed().as_micros() as u64;
    debug!(
        employee_id = %payroll.employee_id,
        month = payroll.month,
        year = payroll.year,
        net_salary = %payroll.net_salary,
        duration_us,
        "Payroll calculated"
    );

    Ok(PayrollCalculation {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        payroll,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}
