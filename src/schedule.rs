//! Weekly time slots and the overlap rule used for schedule conflicts.
//!
//! A slot is a weekday (1 = Monday .. 7 = Sunday), a start time of day and a
//! duration in seconds. Two slots conflict when they share a weekday and their
//! half-open `[start, start + duration)` intervals overlap.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Error raised when a time slot component is out of shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    InvalidWeekday(u8),
    InvalidStartTime(String),
    ZeroDuration,
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::InvalidWeekday(day) => {
                write!(f, "weekday must be between 1 and 7, got {}", day)
            }
            ScheduleError::InvalidStartTime(text) => {
                write!(f, "start time must be HH:MM or HH:MM:SS, got {:?}", text)
            }
            ScheduleError::ZeroDuration => {
                write!(f, "duration must be a positive number of seconds")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

/// Day of the week, 1 = Monday through 7 = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Weekday(u8);

impl Weekday {
    pub fn new(day: u8) -> Result<Self, ScheduleError> {
        if (1..=7).contains(&day) {
            Ok(Self(day))
        } else {
            Err(ScheduleError::InvalidWeekday(day))
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Weekday {
    type Error = ScheduleError;

    fn try_from(day: u8) -> Result<Self, Self::Error> {
        Weekday::new(day)
    }
}

impl From<Weekday> for u8 {
    fn from(day: Weekday) -> Self {
        day.0
    }
}

/// Time of day a slot begins. Accepts `HH:MM` and `HH:MM:SS` (24-hour) and
/// is always written back as `HH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StartTime(NaiveTime);

impl StartTime {
    pub fn seconds_from_midnight(self) -> u32 {
        self.0.num_seconds_from_midnight()
    }
}

impl FromStr for StartTime {
    type Err = ScheduleError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || ScheduleError::InvalidStartTime(text.to_string());
        if !has_clock_shape(text) {
            return Err(invalid());
        }

        let time = NaiveTime::parse_from_str(text, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
            .map_err(|_| invalid())?;
        // chrono keeps a leap second (`:60`) as an extra nanosecond range.
        if time.nanosecond() >= 1_000_000_000 {
            return Err(invalid());
        }
        Ok(StartTime(time))
    }
}

/// One or two hour digits, two minute digits, optionally two second digits.
fn has_clock_shape(text: &str) -> bool {
    let all_digits = |part: &str, widths: std::ops::RangeInclusive<usize>| {
        widths.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };

    let mut parts = text.split(':');
    let (Some(hours), Some(minutes)) = (parts.next(), parts.next()) else {
        return false;
    };
    let seconds = parts.next();
    if parts.next().is_some() {
        return false;
    }

    all_digits(hours, 1..=2)
        && all_digits(minutes, 2..=2)
        && seconds.map_or(true, |s| all_digits(s, 2..=2))
}

impl TryFrom<String> for StartTime {
    type Error = ScheduleError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<StartTime> for String {
    fn from(time: StartTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for StartTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S"))
    }
}

/// A weekly recurring interval attached to a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub weekday: Weekday,
    pub start_time: StartTime,
    /// Length of the slot in seconds.
    pub duration: NonZeroU32,
}

impl TimeSlot {
    /// Build a slot from raw parts, validating each one.
    pub fn new(weekday: u8, start_time: &str, duration_secs: u32) -> Result<Self, ScheduleError> {
        Ok(Self {
            weekday: Weekday::new(weekday)?,
            start_time: start_time.parse()?,
            duration: NonZeroU32::new(duration_secs).ok_or(ScheduleError::ZeroDuration)?,
        })
    }

    /// Seconds since midnight at which the slot starts.
    pub fn start_secs(&self) -> u64 {
        u64::from(self.start_time.seconds_from_midnight())
    }

    /// Seconds since midnight at which the slot ends (exclusive). May run
    /// past 86 400; slots are not wrapped into the next day.
    pub fn end_secs(&self) -> u64 {
        self.start_secs() + u64::from(self.duration.get())
    }

    /// True when both slots fall on the same weekday and their half-open
    /// intervals overlap. Adjacent slots do not conflict.
    pub fn conflicts_with(&self, other: &TimeSlot) -> bool {
        self.weekday == other.weekday
            && self.start_secs() < other.end_secs()
            && other.start_secs() < self.end_secs()
    }
}

/// Conflict between two optional slots; a missing slot never conflicts.
pub fn slots_conflict(a: Option<&TimeSlot>, b: Option<&TimeSlot>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.conflicts_with(b),
        _ => false,
    }
}
