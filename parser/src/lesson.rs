//! Lesson window parsing.
//!
//! Text of the form `D/M/YYYY HHMM-HHMM` goes through four ordered stages,
//! and the first failing stage decides the error:
//!
//! 1. **Grammar** — the whole string must match the pattern
//!    ([`ParseError::LessonFormat`]).
//! 2. **Numbers** — every captured group must read as a number
//!    ([`ParseError::InvalidCommandFormat`]). Only ASCII digits and
//!    whitespace pass the grammar, so this stage guards the conversion
//!    rather than user input.
//! 3. **Time bounds** — hours 0–23, minutes 0–59, checked before any
//!    calendar logic ([`ParseError::LessonTimeOutOfRange`]).
//! 4. **Calendar** — the date must exist ([`ParseError::LessonCalendar`]).
//!
//! The scheduling rules (horizon, ordering, past lessons) are then applied by
//! [`LessonWindow::new`] against the `now` captured by the caller.
//!
//! An empty value means "no lesson" and is handled by the command builder
//! before this module is reached.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::{Captures, Regex};
use tracing::debug;
use tutorbook_core::{LessonWindow, NextLessonCommand};

use crate::error::{ParseError, Result};

static LESSON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)^(\d{1,2})/(\d{1,2})/(\d{4})\s(\d{2})(\d{2})-(\d{2})(\d{2})$")
        .expect("static regex must compile")
});

/// Raw numbers pulled out of a lesson string, not yet range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LessonFields {
    day: u32,
    month: u32,
    year: i32,
    start_hour: u32,
    start_minute: u32,
    end_hour: u32,
    end_minute: u32,
}

/// Parses `raw` into a [`LessonWindow`], validated against `now`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tutorbook_parser::{ParseError, parse_lesson_window};
///
/// let now = NaiveDate::from_ymd_opt(2025, 4, 1)
///     .unwrap()
///     .and_hms_opt(8, 0, 0)
///     .unwrap();
///
/// let lesson = parse_lesson_window("15/4/2025 0900-1100", now).unwrap();
/// assert_eq!(lesson.to_string(), "15/4/2025 0900-1100");
///
/// assert_eq!(
///     parse_lesson_window("15/4/2025 2400-2500", now),
///     Err(ParseError::LessonTimeOutOfRange)
/// );
/// ```
pub fn parse_lesson_window(raw: &str, now: NaiveDateTime) -> Result<LessonWindow> {
    let captures = LESSON_RE.captures(raw).ok_or(ParseError::LessonFormat)?;
    let fields = extract_fields(&captures)?;
    check_time_bounds(&fields)?;
    let (date, start, end) = to_calendar(&fields)?;

    let window = LessonWindow::new(date, start, end, now)?;
    debug!(lesson = %window, "Parsed lesson window");
    Ok(window)
}

fn extract_fields(captures: &Captures<'_>) -> Result<LessonFields> {
    Ok(LessonFields {
        day: number(captures, 1)?,
        month: number(captures, 2)?,
        year: number(captures, 3)?,
        start_hour: number(captures, 4)?,
        start_minute: number(captures, 5)?,
        end_hour: number(captures, 6)?,
        end_minute: number(captures, 7)?,
    })
}

/// Reads capture group `group` as a number.
fn number<T: std::str::FromStr>(captures: &Captures<'_>, group: usize) -> Result<T> {
    captures
        .get(group)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| ParseError::invalid_format(NextLessonCommand::MESSAGE_USAGE))
}

fn check_time_bounds(fields: &LessonFields) -> Result<()> {
    if fields.start_hour > 23
        || fields.start_minute > 59
        || fields.end_hour > 23
        || fields.end_minute > 59
    {
        return Err(ParseError::LessonTimeOutOfRange);
    }
    Ok(())
}

fn to_calendar(fields: &LessonFields) -> Result<(NaiveDate, NaiveTime, NaiveTime)> {
    let date = NaiveDate::from_ymd_opt(fields.year, fields.month, fields.day)
        .ok_or(ParseError::LessonCalendar)?;
    let start = NaiveTime::from_hms_opt(fields.start_hour, fields.start_minute, 0)
        .ok_or(ParseError::LessonCalendar)?;
    let end = NaiveTime::from_hms_opt(fields.end_hour, fields.end_minute, 0)
        .ok_or(ParseError::LessonCalendar)?;
    Ok((date, start, end))
}
