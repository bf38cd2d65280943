//! The month ledger: ordered day records plus running totals.
//!
//! A [`MonthLedger`] owns everything persisted for one calendar month: the
//! break schedule captured when the month was first touched, the list of
//! recorded days, and the aggregate totals. The totals are maintained
//! incrementally by [`MonthLedger::record_work`] rather than recomputed, so
//! the type keeps its own invariants:
//!
//! - `total_worked` equals the sum of the day durations
//! - `total_days` equals the number of day entries
//! - days are ordered by date with at most one entry per date
//! - only the last entry is ever mutated
//!
//! Failed operations leave the ledger untouched. Validation happens before
//! any field is written, never halfway through.

use crate::libs::interval::Interval;
use crate::libs::schedule::BreakSchedule;
use crate::libs::workday::Workday;
use chrono::{Duration, NaiveDate};
use thiserror::Error;

/// Errors produced when recording work in a [`MonthLedger`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("date {date} is earlier than the last recorded day {last}")]
    DateOutOfOrder { date: NaiveDate, last: NaiveDate },
}

/// Which branch [`MonthLedger::record_work`] took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordAction {
    /// A new day was appended to the ledger.
    Appended,
    /// The last day carried the same date and was overwritten.
    Replaced,
}

/// Aggregate figures for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerSummary {
    pub total: Duration,
    pub days: u32,
    pub average: Duration,
}

/// One calendar month of work records.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthLedger {
    /// Breaks subtracted from every day recorded in this month.
    pub breaks: BreakSchedule,
    total_worked: Duration,
    total_days: u32,
    days: Vec<Workday>,
}

impl MonthLedger {
    /// An empty ledger with the given break schedule.
    pub fn new(breaks: BreakSchedule) -> Self {
        Self {
            breaks,
            total_worked: Duration::zero(),
            total_days: 0,
            days: Vec::new(),
        }
    }

    /// Reassembles a ledger from persisted parts, trusting the stored totals.
    pub fn from_parts(breaks: BreakSchedule, total_worked: Duration, total_days: u32, days: Vec<Workday>) -> Self {
        Self {
            breaks,
            total_worked,
            total_days,
            days,
        }
    }

    pub fn total_worked(&self) -> Duration {
        self.total_worked
    }

    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    pub fn days(&self) -> &[Workday] {
        &self.days
    }

    /// The most recent entry, the only one that can still change.
    pub fn last(&self) -> Option<&Workday> {
        self.days.last()
    }

    /// Records a day's work interval.
    ///
    /// The net duration is the interval length minus its overlap with the
    /// month's breaks. A date newer than the last entry appends, the same
    /// date overwrites the last entry in place, and an older date is
    /// rejected. The returned action reports which branch was taken.
    pub fn record_work(&mut self, date: NaiveDate, work: Interval) -> Result<RecordAction, LedgerError> {
        let worked = self.breaks.net_duration(&work);

        match self.days.last_mut() {
            Some(last) if last.date == date => {
                self.total_worked = self.total_worked - last.worked + worked;
                *last = Workday {
                    date,
                    interval: work,
                    worked,
                };
                Ok(RecordAction::Replaced)
            }
            Some(last) if date < last.date => Err(LedgerError::DateOutOfOrder { date, last: last.date }),
            _ => {
                self.days.push(Workday {
                    date,
                    interval: work,
                    worked,
                });
                self.total_worked = self.total_worked + worked;
                self.total_days += 1;
                Ok(RecordAction::Appended)
            }
        }
    }

    /// Month totals. An empty ledger reports a zero average instead of
    /// failing on the division.
    pub fn summary(&self) -> LedgerSummary {
        let average = if self.total_days > 0 {
            Duration::seconds(self.total_worked.num_seconds() / self.total_days as i64)
        } else {
            Duration::zero()
        };
        LedgerSummary {
            total: self.total_worked,
            days: self.total_days,
            average,
        }
    }
}
