//! Leave duration calculation.
//!
//! Every place that needs the day count of a leave (submission, approval,
//! dashboards, payroll) goes through this module. Every working-day count is
//! taken by [`count_working_days`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{AuditStep, DateRange, LeaveRequest, LeaveStatus, LeaveSubmission};

use super::day_classification::{WeekendCalendar, WorkingDayCalendar};

/// The result of a leave duration calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct LeaveDurationResult {
    /// Working days inside the range, before any half-day adjustment.
    pub working_days: u32,
    /// Countable leave days (half of `working_days` for half-day leave).
    pub number_of_days: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Counts the working days in `range` according to `calendar`.
pub fn count_working_days<C>(calendar: &C, range: &DateRange) -> u32
where
    C: WorkingDayCalendar + ?Sized,
{
    calendar.working_days_in(range)
}

fn countable_days(working_days: u32, half_day: bool) -> Decimal {
    let days = Decimal::from(working_days);
    if half_day { days / Decimal::TWO } else { days }
}

/// Computes the countable days of a leave using the weekend-only calendar.
///
/// # Arguments
///
/// * `start` - The first day of leave
/// * `end` - The last day of leave (inclusive)
/// * `half_day` - Whether each day is taken as a half day
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidRange`] when `start > end`.
///
/// # Example
///
/// ```
/// use hrms_engine::calculation::compute_duration;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // Tuesday 2025-09-09 through Sunday 2025-09-14
/// let start = NaiveDate::from_ymd_opt(2025, 9, 9).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 9, 14).unwrap();
///
/// assert_eq!(compute_duration(start, end, false).unwrap(), Decimal::from(4));
/// assert_eq!(compute_duration(start, end, true).unwrap(), Decimal::from(2));
/// ```
pub fn compute_duration(start: NaiveDate, end: NaiveDate, half_day: bool) -> EngineResult<Decimal> {
    compute_duration_with(&WeekendCalendar, start, end, half_day)
}

/// Computes the countable days of a leave against an injected calendar.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidRange`] when `start > end`.
pub fn compute_duration_with<C>(
    calendar: &C,
    start: NaiveDate,
    end: NaiveDate,
    half_day: bool,
) -> EngineResult<Decimal>
where
    C: WorkingDayCalendar + ?Sized,
{
    let range = DateRange::new(start, end)?;
    Ok(countable_days(count_working_days(calendar, &range), half_day))
}

/// Calculates a leave duration and records the decision as an audit step.
///
/// # Arguments
///
/// * `calendar` - The working-day calendar to classify dates with
/// * `range` - The validated leave range
/// * `half_day` - Whether each day is taken as a half day
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_leave_duration<C>(
    calendar: &C,
    range: &DateRange,
    half_day: bool,
    step_number: u32,
) -> LeaveDurationResult
where
    C: WorkingDayCalendar + ?Sized,
{
    let calendar_days = range.calendar_days();
    let working_days = count_working_days(calendar, range);
    let number_of_days = countable_days(working_days, half_day);

    let reasoning = if half_day {
        format!(
            "{} working of {} calendar days, halved for half-day leave = {}",
            working_days,
            calendar_days,
            number_of_days.normalize()
        )
    } else {
        format!(
            "{} working of {} calendar days = {}",
            working_days,
            calendar_days,
            number_of_days.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "leave_duration".to_string(),
        rule_name: "Leave Duration".to_string(),
        input: serde_json::json!({
            "start_date": range.start().to_string(),
            "end_date": range.end().to_string(),
            "half_day": half_day
        }),
        output: serde_json::json!({
            "calendar_days": calendar_days,
            "working_days": working_days,
            "number_of_days": number_of_days.normalize().to_string()
        }),
        reasoning,
    };

    LeaveDurationResult {
        working_days,
        number_of_days,
        audit_step,
    }
}

/// Turns a submission into a pending [`LeaveRequest`] with its day count stamped.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidRange`] when the submission's
/// start date falls after its end date.
pub fn stamp_leave_request<C>(calendar: &C, submission: LeaveSubmission) -> EngineResult<LeaveRequest>
where
    C: WorkingDayCalendar + ?Sized,
{
    let range = submission.range()?;
    let number_of_days = countable_days(count_working_days(calendar, &range), submission.half_day);

    debug!(
        employee_id = %submission.employee_id,
        start_date = %submission.start_date,
        end_date = %submission.end_date,
        number_of_days = %number_of_days,
        "Stamped leave request"
    );

    Ok(LeaveRequest {
        id: Uuid::new_v4(),
        employee_id: submission.employee_id,
        leave_type: submission.leave_type,
        start_date: submission.start_date,
        end_date: submission.end_date,
        half_day: submission.half_day,
        number_of_days,
        reason: submission.reason,
        status: LeaveStatus::Pending,
    })
}
