//! Scheduled lesson windows.
//!
//! A [`LessonWindow`] is a date plus a start/end time of day. Construction
//! checks the scheduling rules against a caller-supplied `now`, so the same
//! input always gives the same answer for the same clock reading.

use std::fmt;

use chrono::{Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduling rule broken by a lesson window.
///
/// Variants are listed in the order [`LessonWindow::new`] checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LessonRuleViolation {
    /// Date is a year or more after today.
    #[error("Lesson must be less than 1 year from now.")]
    TooFarAhead,
    /// Start and end are the same time of day.
    #[error("Start and end time cannot be the same.")]
    StartEqualsEnd,
    /// Start is after end.
    #[error("Start time must be before end time.")]
    StartAfterEnd,
    /// Date is before today, or today with a start time already passed.
    #[error("Lesson cannot be in the past.")]
    InPast,
}

/// A validated lesson: one date, start strictly before end.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use tutorbook_core::{LessonRuleViolation, LessonWindow};
///
/// let now = NaiveDate::from_ymd_opt(2025, 4, 1)
///     .unwrap()
///     .and_hms_opt(8, 0, 0)
///     .unwrap();
/// let date = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap();
/// let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let eleven = NaiveTime::from_hms_opt(11, 0, 0).unwrap();
///
/// let lesson = LessonWindow::new(date, nine, eleven, now).unwrap();
/// assert_eq!(lesson.to_string(), "15/4/2025 0900-1100");
///
/// assert_eq!(
///     LessonWindow::new(date, nine, nine, now),
///     Err(LessonRuleViolation::StartEqualsEnd)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StoredLesson")]
pub struct LessonWindow {
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
}

impl LessonWindow {
    /// Builds a lesson window, checking the scheduling rules in order:
    /// horizon, start/end equality, start/end ordering, then past-ness.
    pub fn new(
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        now: NaiveDateTime,
    ) -> Result<Self, LessonRuleViolation> {
        let today = now.date();
        let horizon = today
            .checked_add_months(Months::new(12))
            .unwrap_or(NaiveDate::MAX);

        if date >= horizon {
            return Err(LessonRuleViolation::TooFarAhead);
        }
        if start == end {
            return Err(LessonRuleViolation::StartEqualsEnd);
        }
        if start > end {
            return Err(LessonRuleViolation::StartAfterEnd);
        }
        if date == today && start < now.time() {
            return Err(LessonRuleViolation::InPast);
        }
        if date < today {
            return Err(LessonRuleViolation::InPast);
        }

        Ok(Self { date, start, end })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }
}

/// Renders in the same `D/M/YYYY HHMM-HHMM` form users type.
impl fmt::Display for LessonWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.date.format("%-d/%-m/%Y"),
            self.start.format("%H%M"),
            self.end.format("%H%M")
        )
    }
}

/// Serialized form of a lesson read back from a contact file. Stored lessons
/// age, so only the start/end ordering is re-checked on load.
#[derive(Deserialize)]
struct StoredLesson {
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
}

impl TryFrom<StoredLesson> for LessonWindow {
    type Error = LessonRuleViolation;

    fn try_from(stored: StoredLesson) -> Result<Self, Self::Error> {
        if stored.start == stored.end {
            return Err(LessonRuleViolation::StartEqualsEnd);
        }
        if stored.start > stored.end {
            return Err(LessonRuleViolation::StartAfterEnd);
        }
        Ok(Self {
            date: stored.date,
            start: stored.start,
            end: stored.end,
        })
    }
}

/// A contact's next lesson, or the explicit "no lesson" state.
///
/// Serialized as `null` or a lesson window object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<LessonWindow>", into = "Option<LessonWindow>")]
pub enum NextLesson {
    #[default]
    None,
    Scheduled(LessonWindow),
}

impl NextLesson {
    pub fn window(&self) -> Option<&LessonWindow> {
        match self {
            NextLesson::None => None,
            NextLesson::Scheduled(window) => Some(window),
        }
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self, NextLesson::Scheduled(_))
    }
}

impl From<Option<LessonWindow>> for NextLesson {
    fn from(value: Option<LessonWindow>) -> Self {
        value.map_or(NextLesson::None, NextLesson::Scheduled)
    }
}

impl From<NextLesson> for Option<LessonWindow> {
    fn from(value: NextLesson) -> Self {
        value.window().copied()
    }
}

impl fmt::Display for NextLesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextLesson::None => Ok(()),
            NextLesson::Scheduled(window) => fmt::Display::fmt(window, f),
        }
    }
}
