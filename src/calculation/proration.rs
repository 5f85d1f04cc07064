//! Attendance pro-ration.
//!
//! Scales a basic salary by the fraction of scheduled working days the
//! employee actually attended.

use rust_decimal::Decimal;

use crate::config::PayrollPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceSummary, AuditStep, AuditWarning};

/// Warning code raised when attendance exceeds the scheduled working days.
pub const PRESENT_EXCEEDS_WORKING: &str = "PRESENT_EXCEEDS_WORKING";

/// The pro-ration ratio and the pro-rated basic salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proration {
    /// `present_days / working_days`, or 1 when no working days are recorded.
    pub attendance_ratio: Decimal,
    /// `basic_salary * attendance_ratio`.
    pub pro_rated_basic_salary: Decimal,
}

/// The result of applying a payroll policy to attendance, with its audit trail.
#[derive(Debug, Clone)]
pub struct ProrationResult {
    /// The computed pro-ration.
    pub proration: Proration,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
    /// Set when `present_days > working_days`.
    pub warning: Option<AuditWarning>,
}

/// Computes the attendance ratio and pro-rated basic salary.
///
/// When `working_days` is zero there is nothing to pro-rate against, and the
/// full basic salary is paid (ratio 1). The ratio is not capped.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPayroll`] when the pro-rated salary does not
/// fit in a `Decimal`.
///
/// # Example
///
/// ```
/// use hrms_engine::calculation::compute_proration;
/// use hrms_engine::models::AttendanceSummary;
/// use rust_decimal::Decimal;
///
/// let attendance = AttendanceSummary {
///     working_days: 0,
///     present_days: 0,
///     ..Default::default()
/// };
///
/// let proration = compute_proration(&attendance, Decimal::from(60000)).unwrap();
/// assert_eq!(proration.attendance_ratio, Decimal::ONE);
/// assert_eq!(proration.pro_rated_basic_salary, Decimal::from(60000));
/// ```
pub fn compute_proration(
    attendance: &AttendanceSummary,
    basic_salary: Decimal,
) -> EngineResult<Proration> {
    prorate(basic_salary, attendance_ratio(attendance))
}

fn attendance_ratio(attendance: &AttendanceSummary) -> Decimal {
    if attendance.working_days > 0 {
        Decimal::from(attendance.present_days) / Decimal::from(attendance.working_days)
    } else {
        Decimal::ONE
    }
}

fn prorate(basic_salary: Decimal, attendance_ratio: Decimal) -> EngineResult<Proration> {
    let pro_rated_basic_salary = basic_salary
        .checked_mul(attendance_ratio)
        .ok_or_else(|| EngineError::amount_overflow("basic_salary"))?;

    Ok(Proration {
        attendance_ratio,
        pro_rated_basic_salary,
    })
}

/// Applies the payroll policy to attendance and records an audit step.
///
/// When the policy caps the ratio, any ratio above 1 is clamped to 1. A
/// [`PRESENT_EXCEEDS_WORKING`] warning is raised whenever attendance exceeds
/// the scheduled days, capped or not.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPayroll`] when the pro-rated salary does not
/// fit in a `Decimal`.
///
/// # Arguments
///
/// * `attendance` - Attendance counters for the month
/// * `basic_salary` - Full monthly basic salary
/// * `policy` - Payroll policy from configuration
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_proration(
    attendance: &AttendanceSummary,
    basic_salary: Decimal,
    policy: &PayrollPolicy,
    step_number: u32,
) -> EngineResult<ProrationResult> {
    let ratio = attendance_ratio(attendance);
    let capped = policy.cap_attendance_ratio && ratio > Decimal::ONE;
    let proration = prorate(basic_salary, if capped { Decimal::ONE } else { ratio })?;

    let warning = attendance.present_exceeds_working().then(|| AuditWarning {
        code: PRESENT_EXCEEDS_WORKING.to_string(),
        message: format!(
            "Present days ({}) exceed working days ({}); ratio {}",
            attendance.present_days,
            attendance.working_days,
            if capped { "capped at 1" } else { "left uncapped" }
        ),
        severity: "medium".to_string(),
    });

    let reasoning = if attendance.working_days == 0 {
        format!(
            "No working days recorded - full basic salary ${} paid",
            basic_salary.normalize()
        )
    } else {
        format!(
            "${} x {}/{} days = ${}",
            basic_salary.normalize(),
            attendance.present_days,
            attendance.working_days,
            proration.pro_rated_basic_salary.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "attendance_proration".to_string(),
        rule_name: "Attendance Pro-ration".to_string(),
        input: serde_json::json!({
            "basic_salary": basic_salary.normalize().to_string(),
            "working_days": attendance.working_days,
            "present_days": attendance.present_days,
            "cap_attendance_ratio": policy.cap_attendance_ratio
        }),
        output: serde_json::json!({
            "attendance_ratio": proration.attendance_ratio.normalize().to_string(),
            "pro_rated_basic_salary": proration.pro_rated_basic_salary.normalize().to_string(),
            "capped": capped
        }),
        reasoning,
    };

    Ok(ProrationResult {
        proration,
        audit_step,
        warning,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn attendance(working_days: u32, present_days: u32) -> AttendanceSummary {
        AttendanceSummary {
            working_days,
            present_days,
            ..Default::default()
        }
    }

    #[test]
    fn test_partial_attendance_prorates_salary() {
        let proration = compute_proration(&attendance(22, 20), dec("60000")).unwrap();

        assert_eq!(proration.attendance_ratio.round_dp(3), dec("0.909"));
        assert_eq!(proration.pro_rated_basic_salary.round_dp(2), dec("54545.45"));
    }

    #[test]
    fn test_zero_working_days_pays_in_full() {
        let proration = compute_proration(&attendance(0, 0), dec("60000")).unwrap();

        assert_eq!(proration.attendance_ratio, Decimal::ONE);
        assert_eq!(proration.pro_rated_basic_salary, dec("60000"));
    }

    #[test]
    fn test_full_attendance_is_ratio_one() {
        let proration = compute_proration(&attendance(21, 21), dec("45000")).unwrap();

        assert_eq!(proration.attendance_ratio, Decimal::ONE);
        assert_eq!(proration.pro_rated_basic_salary, dec("45000"));
    }

    #[test]
    fn test_no_attendance_is_zero_pay() {
        let proration = compute_proration(&attendance(22, 0), dec("60000")).unwrap();

        assert_eq!(proration.attendance_ratio, Decimal::ZERO);
        assert_eq!(proration.pro_rated_basic_salary, Decimal::ZERO);
    }

    #[test]
    fn test_compute_proration_does_not_cap() {
        let proration = compute_proration(&attendance(20, 22), dec("1000")).unwrap();

        assert_eq!(proration.attendance_ratio, dec("1.1"));
        assert_eq!(proration.pro_rated_basic_salary, dec("1100"));
    }

    #[test]
    fn test_uncapped_policy_warns_but_keeps_ratio() {
        let policy = PayrollPolicy {
            cap_attendance_ratio: false,
        };
        let result = calculate_proration(&attendance(20, 22), dec("1000"), &policy, 1).unwrap();

        assert_eq!(result.proration.attendance_ratio, dec("1.1"));
        let warning = result.warning.unwrap();
        assert_eq!(warning.code, PRESENT_EXCEEDS_WORKING);
        assert!(warning.message.contains("left uncapped"));
        assert_eq!(result.audit_step.output["capped"], false);
    }

    #[test]
    fn test_capped_policy_clamps_ratio() {
        let policy = PayrollPolicy {
            cap_attendance_ratio: true,
        };
        let result = calculate_proration(&attendance(20, 22), dec("1000"), &policy, 1).unwrap();

        assert_eq!(result.proration.attendance_ratio, Decimal::ONE);
        assert_eq!(result.proration.pro_rated_basic_salary, dec("1000"));
        assert!(result.warning.unwrap().message.contains("capped at 1"));
        assert_eq!(result.audit_step.output["capped"], true);
    }

    #[test]
    fn test_capped_policy_leaves_normal_ratio_alone() {
        let policy = PayrollPolicy {
            cap_attendance_ratio: true,
        };
        let result = calculate_proration(&attendance(22, 20), dec("60000"), &policy, 2).unwrap();

        assert_eq!(
            result.proration,
            compute_proration(&attendance(22, 20), dec("60000")).unwrap()
        );
        assert!(result.warning.is_none());
        assert_eq!(result.audit_step.step_number, 2);
    }

    #[test]
    fn test_zero_working_days_reasoning() {
        let result = calculate_proration(
            &attendance(0, 0),
            dec("60000"),
            &PayrollPolicy::default(),
            1,
        )
        .unwrap();
        assert!(result.audit_step.reasoning.contains("No working days recorded"));
        assert!(result.warning.is_none());
    }

    #[test]
    fn test_overflowing_salary_is_rejected() {
        match compute_proration(&attendance(1, 2), Decimal::MAX) {
            Err(EngineError::InvalidPayroll { field, .. }) => assert_eq!(field, "basic_salary"),
            other => panic!("Expected InvalidPayroll error, got {:?}", other),
        }
    }

    #[test]
    fn test_capped_policy_avoids_overflow_at_max_salary() {
        let policy = PayrollPolicy {
            cap_attendance_ratio: true,
        };
        let result =
            calculate_proration(&attendance(1, 2), Decimal::MAX, &policy, 1).unwrap();
        assert_eq!(result.proration.attendance_ratio, Decimal::ONE);
        assert_eq!(result.proration.pro_rated_basic_salary, Decimal::MAX);

        let uncapped = calculate_proration(
            &attendance(1, 2),
            Decimal::MAX,
            &PayrollPolicy::default(),
            1,
        );
        assert!(matches!(uncapped, Err(EngineError::InvalidPayroll { .. })));
    }
}
