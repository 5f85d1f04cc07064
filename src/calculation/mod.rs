//! Calculation logic for the HRMS calculation engine.
//!
//! This module contains the working-day classifier, the leave duration
//! calculator that every leave day count goes through, attendance
//! pro-ration, and the payroll arithmetic built on top of it.

mod day_classification;
mod leave_duration;
mod payroll;
mod proration;

pub use day_classification::{
    DayKind, HolidayCalendar, WeekendCalendar, WorkingDayCalendar, classify_date, count_weekdays,
};
pub use leave_duration::{
    LeaveDurationResult, calculate_leave_duration, compute_duration, compute_duration_with,
    count_working_days, stamp_leave_request,
};
pub use payroll::{
    calculate_overtime_pay, calculate_payroll, compute_payroll, total_allowances,
    total_deductions,
};
pub use proration::{
    PRESENT_EXCEEDS_WORKING, Proration, ProrationResult, calculate_proration, compute_proration,
};
