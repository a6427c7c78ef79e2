//! Sources of the current date and time.
//!
//! Lesson validation depends on "now". Parsers never read the system time
//! themselves; a [`Clock`] is sampled once per parsed command line and the
//! reading is passed down to every check.

use chrono::{Local, NaiveDateTime};

/// Supplies the current local date and time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system's local time on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same reading.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tutorbook_parser::clock::{Clock, FixedClock};
///
/// let at = NaiveDate::from_ymd_opt(2025, 4, 1)
///     .unwrap()
///     .and_hms_opt(8, 0, 0)
///     .unwrap();
/// let clock = FixedClock::new(at);
/// assert_eq!(clock.now(), at);
/// assert_eq!(clock.now(), at);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    at: NaiveDateTime,
}

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self { at }
    }

    /// Freezes `clock` at its current reading.
    pub fn snapshot(clock: &dyn Clock) -> Self {
        Self::new(clock.now())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.at
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
