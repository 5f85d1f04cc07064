//! Date range and holiday models.
//!
//! This module contains the [`DateRange`] and [`Holiday`] types used to describe
//! the calendar span a leave or pay period covers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents a named non-working date such as a public holiday.
///
/// # Example
///
/// ```
/// use hrms_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2026, 12, 25).unwrap(),
///     name: "Christmas Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Christmas Day").
    pub name: String,
}

/// An inclusive span of calendar days.
///
/// Dates are timezone-naive, so no time-of-day component can move a date
/// across a weekday boundary. A range always satisfies `start <= end`; the
/// only way to build one is through [`DateRange::new`], which is also what
/// deserialization goes through.
///
/// # Example
///
/// ```
/// use hrms_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 9, 9).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 9, 14).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(range.days().count(), 6);
/// assert!(range.contains_date(NaiveDate::from_ymd_opt(2025, 9, 12).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateRangeFields")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct DateRangeFields {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<DateRangeFields> for DateRange {
    type Error = EngineError;

    fn try_from(fields: DateRangeFields) -> EngineResult<Self> {
        DateRange::new(fields.start, fields.end)
    }
}

impl DateRange {
    /// Creates a new range covering `start` through `end` inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRange`] when `start` falls after `end`.
    ///
    /// # Example
    ///
    /// ```
    /// use hrms_engine::models::DateRange;
    /// use hrms_engine::error::EngineError;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2025, 9, 9).unwrap();
    ///
    /// assert!(matches!(
    ///     DateRange::new(start, end),
    ///     Err(EngineError::InvalidRange { .. })
    /// ));
    /// ```
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if start > end {
            return Err(EngineError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the first day of the range.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the range (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Checks if a given date falls within this range, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns the number of calendar days in the range, both ends included.
    pub fn calendar_days(&self) -> u64 {
        self.end.signed_duration_since(self.start).num_days().unsigned_abs() + 1
    }

    /// Iterates every calendar day from `start` to `end` inclusive, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |day| *day <= self.end)
    }
}
