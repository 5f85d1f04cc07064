//! Working-day classification.
//!
//! This module decides whether a calendar date counts as a working day. The
//! rule sits behind the [`WorkingDayCalendar`] trait so a holiday calendar can
//! be injected without touching any caller.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::{DateRange, Holiday};

/// Whether a calendar date is countable for leave and attendance.
///
/// # Example
///
/// ```
/// use hrms_engine::calculation::DayKind;
///
/// let kind = DayKind::NonWorking;
/// assert_eq!(format!("{}", kind), "non-working");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// A day employees are scheduled to work.
    Working,
    /// A weekend day or holiday.
    NonWorking,
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Working => write!(f, "working"),
            DayKind::NonWorking => write!(f, "non-working"),
        }
    }
}

/// A rule that classifies calendar dates as working or non-working.
///
/// Implementations must be pure: the same date always yields the same
/// [`DayKind`], independent of locale or time zone.
pub trait WorkingDayCalendar: Send + Sync {
    /// Classifies a single calendar date.
    fn classify(&self, date: NaiveDate) -> DayKind;

    /// Returns true if `date` is a working day.
    fn is_working_day(&self, date: NaiveDate) -> bool {
        self.classify(date) == DayKind::Working
    }

    /// Counts the working days in `range`.
    ///
    /// The default walks the range one day at a time. Calendars that can
    /// count in closed form override it.
    fn working_days_in(&self, range: &DateRange) -> u32 {
        range.days().filter(|day| self.is_working_day(*day)).count() as u32
    }
}

/// The default calendar: Saturday and Sunday are non-working, every other
/// weekday is working.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekendCalendar;

impl WorkingDayCalendar for WeekendCalendar {
    fn classify(&self, date: NaiveDate) -> DayKind {
        classify_date(date)
    }

    fn working_days_in(&self, range: &DateRange) -> u32 {
        count_weekdays(range)
    }
}

/// The weekend rule plus a fixed set of holiday dates.
///
/// With no holidays configured it behaves exactly like [`WeekendCalendar`].
///
/// # Example
///
/// ```
/// use hrms_engine::calculation::{DayKind, HolidayCalendar, WorkingDayCalendar};
/// use hrms_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let christmas = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap(); // Friday
/// let calendar = HolidayCalendar::new(&[Holiday {
///     date: christmas,
///     name: "Christmas Day".to_string(),
/// }]);
///
/// assert_eq!(calendar.classify(christmas), DayKind::NonWorking);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    holidays: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Builds a calendar from a list of holidays. Duplicate dates collapse.
    pub fn new(holidays: &[Holiday]) -> Self {
        Self {
            holidays: holidays.iter().map(|h| h.date).collect(),
        }
    }

    /// Returns true if `date` is one of the configured holidays.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// Returns the number of distinct holiday dates.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }
}

impl WorkingDayCalendar for HolidayCalendar {
    fn classify(&self, date: NaiveDate) -> DayKind {
        if self.is_holiday(date) {
            DayKind::NonWorking
        } else {
            classify_date(date)
        }
    }

    fn working_days_in(&self, range: &DateRange) -> u32 {
        // Holidays on a weekend are already excluded.
        let weekday_holidays = self
            .holidays
            .range(range.start()..=range.end())
            .filter(|date| classify_date(**date) == DayKind::Working)
            .count() as u32;
        count_weekdays(range) - weekday_holidays
    }
}

/// Classifies a date with the weekend-only rule.
///
/// # Returns
///
/// - [`DayKind::NonWorking`] for Saturday and Sunday
/// - [`DayKind::Working`] for Monday through Friday
///
/// # Example
///
/// ```
/// use hrms_engine::calculation::{classify_date, DayKind};
/// use chrono::NaiveDate;
///
/// // 2025-09-13 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2025, 9, 13).unwrap();
/// assert_eq!(classify_date(saturday), DayKind::NonWorking);
///
/// // 2025-09-09 is a Tuesday
/// let tuesday = NaiveDate::from_ymd_opt(2025, 9, 9).unwrap();
/// assert_eq!(classify_date(tuesday), DayKind::Working);
/// ```
pub fn classify_date(date: NaiveDate) -> DayKind {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayKind::NonWorking,
        _ => DayKind::Working,
    }
}

/// Counts Monday through Friday dates in `range` without visiting each day.
///
/// # Example
///
/// ```
/// use hrms_engine::calculation::count_weekdays;
/// use hrms_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// // Tuesday 2025-09-09 through Monday 2025-09-22
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 9, 9).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 9, 22).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(count_weekdays(&range), 10);
/// ```
pub fn count_weekdays(range: &DateRange) -> u32 {
    let calendar_days = range.calendar_days();
    let full_weeks = calendar_days / 7;
    let first = u64::from(range.start().weekday().num_days_from_monday());
    let partial_week = (0..calendar_days % 7)
        .filter(|offset| (first + offset) % 7 < 5)
        .count() as u64;
    (full_weeks * 5 + partial_week) as u32
}
