//! Time-of-day intervals and overlap arithmetic.
//!
//! An [`Interval`] is a half-open span `[start, end)` within a single day,
//! built from a pair of `chrono::NaiveTime` values. It is the unit both work
//! sessions and breaks are measured in: the net working time of a day is the
//! raw interval length minus its overlap with each configured break.
//!
//! Overlap is computed in clamp form rather than by enumerating relative
//! positions: disjoint spans yield zero, everything else is
//! `min(end) - max(start)`. The same expression covers a break fully inside
//! the work span, fully outside it, or straddling either edge.
//!
//! Intervals are only created through validating constructors, so any value
//! of this type satisfies `start <= end` and fits inside the working day.

use chrono::{Duration, NaiveTime};
use thiserror::Error;

/// Latest admissible boundary for any interval, 23:59:00.
///
/// Times carrying seconds past this point do not fit the ledger's
/// minute-resolution day and are rejected on construction.
pub const DAY_END: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 0) {
    Some(time) => time,
    None => panic!("23:59:00 is a valid time"),
};

/// Errors produced when constructing or parsing an [`Interval`].
///
/// All variants are recoverable: the caller keeps its state and may ask the
/// user for corrected input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntervalError {
    #[error("end time {end} is earlier than start time {start}")]
    EndBeforeStart { start: NaiveTime, end: NaiveTime },
    #[error("time {0} is outside the working day (latest is 23:59:00)")]
    OutsideDayBounds(NaiveTime),
    #[error("malformed time range '{0}', expected HH:MM-HH:MM")]
    MalformedRange(String),
}

/// A half-open span of wall-clock time within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    start: NaiveTime,
    end: NaiveTime,
}

impl Interval {
    /// Builds an interval, rejecting reversed boundaries and times past
    /// [`DAY_END`]. A zero-length interval (`start == end`) is valid.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, IntervalError> {
        if start > DAY_END {
            return Err(IntervalError::OutsideDayBounds(start));
        }
        if end > DAY_END {
            return Err(IntervalError::OutsideDayBounds(end));
        }
        if end < start {
            return Err(IntervalError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parses a range entered as `HH:MM-HH:MM`, the form break periods are
    /// written in, then validates it through [`Interval::new`].
    pub fn from_range_str(range: &str) -> Result<Self, IntervalError> {
        let (start, end) = range.split_once('-').ok_or_else(|| IntervalError::MalformedRange(range.to_string()))?;
        let start = NaiveTime::parse_from_str(start.trim(), "%H:%M").map_err(|_| IntervalError::MalformedRange(range.to_string()))?;
        let end = NaiveTime::parse_from_str(end.trim(), "%H:%M").map_err(|_| IntervalError::MalformedRange(range.to_string()))?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Raw length of the interval, breaks not considered.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Time shared between two intervals.
    ///
    /// Symmetric, and never larger than either interval's own duration.
    pub fn overlap(&self, other: &Interval) -> Duration {
        if self.end <= other.start || self.start >= other.end {
            return Duration::zero();
        }
        self.end.min(other.end) - self.start.max(other.start)
    }
}
