//! Per-day work records and their display formatting.

use crate::libs::formatter::{format_duration_hms, FormattedDay};
use crate::libs::interval::Interval;
use chrono::{Duration, NaiveDate};

/// A single day's entry in the month ledger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Workday {
    /// The calendar date of the entry.
    pub date: NaiveDate,
    /// The raw work interval as entered, breaks not yet subtracted.
    pub interval: Interval,
    /// Net working time after break subtraction.
    pub worked: Duration,
}

/// A trait for formatting a collection of `Workday` instances.
pub trait FormatWorkdays {
    /// Formats a slice of `Workday` into a vector of `FormattedDay` for display.
    fn format(&self) -> Vec<FormattedDay>;
}

impl FormatWorkdays for [Workday] {
    fn format(&self) -> Vec<FormattedDay> {
        self.iter()
            .map(|day| FormattedDay {
                date: day.date.format("%Y-%m-%d").to_string(),
                start: day.interval.start().format("%H:%M:%S").to_string(),
                end: day.interval.end().format("%H:%M:%S").to_string(),
                worked: format_duration_hms(&day.worked),
            })
            .collect()
    }
}
