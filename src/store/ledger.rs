//! Month ledger persistence in plain JSON files.
//!
//! Each calendar month lives in its own file named `YYYY-MM.json` inside the
//! application data directory. The on-disk layout stores durations as whole
//! seconds and times as formatted strings, keeping the files readable and
//! hand-editable:
//!
//! ```json
//! {
//!   "total_working_time": 59400,
//!   "total_working_days": 2,
//!   "lunch_time_start": "12:00",
//!   "lunch_time_end": "13:00",
//!   "dinner_time_start": "18:00",
//!   "dinner_time_end": "18:30",
//!   "working_days": [
//!     {
//!       "date": "2025-09-01",
//!       "start_time": "09:00:00",
//!       "end_time": "18:00:00",
//!       "working_time": 28800
//!     }
//!   ]
//! }
//! ```
//!
//! Loading validates everything on the way in. A file that fails to parse or
//! decode is reported as malformed rather than silently replaced, so a typo
//! in a hand-edited ledger cannot wipe a month of records.

use crate::libs::data_storage::DataStorage;
use crate::libs::interval::Interval;
use crate::libs::ledger::MonthLedger;
use crate::libs::messages::Message;
use crate::libs::schedule::BreakSchedule;
use crate::libs::workday::Workday;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk shape of a single recorded day.
#[derive(Serialize, Deserialize)]
struct PersistedDay {
    date: String,
    start_time: String,
    end_time: String,
    working_time: i64,
}

/// On-disk shape of a month ledger.
#[derive(Serialize, Deserialize)]
struct PersistedLedger {
    total_working_time: i64,
    total_working_days: u32,
    lunch_time_start: String,
    lunch_time_end: String,
    dinner_time_start: String,
    dinner_time_end: String,
    working_days: Vec<PersistedDay>,
}

/// File-backed storage for one month's ledger.
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Creates a store for the month containing the given date.
    ///
    /// Resolves the ledger file path inside the application data directory,
    /// creating the directory if needed. The file itself is not touched.
    pub fn new(month: NaiveDate) -> Result<Self> {
        let file_name = format!("{}.json", month.format("%Y-%m"));
        let path = DataStorage::new().get_path(&file_name)?;
        Ok(Self { path })
    }

    /// The resolved ledger file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the month's ledger from disk.
    ///
    /// Returns `Ok(None)` when no ledger file exists yet. A file that exists
    /// but cannot be parsed or decoded is an error; the caller decides
    /// whether to give up or start fresh, the store never discards data.
    pub fn load(&self) -> Result<Option<MonthLedger>> {
        if !self.path.exists() {
            return Ok(None);
        }

        msg_debug!(format!("Loading ledger from {}", self.path.display()));
        let raw = fs::read_to_string(&self.path)?;
        let persisted: PersistedLedger = match serde_json::from_str(&raw) {
            Ok(persisted) => persisted,
            Err(e) => {
                msg_debug!(format!("Ledger parse failed: {}", e));
                return Err(msg_error_anyhow!(Message::LedgerFileMalformed(self.path.display().to_string())));
            }
        };

        match decode(persisted) {
            Ok(ledger) => Ok(Some(ledger)),
            Err(e) => {
                msg_debug!(format!("Ledger decode failed: {}", e));
                Err(msg_error_anyhow!(Message::LedgerFileMalformed(self.path.display().to_string())))
            }
        }
    }

    /// Saves the ledger to disk atomically.
    ///
    /// The JSON is written to a sibling temporary file first and then renamed
    /// over the target, so the previous ledger stays intact if the write is
    /// interrupted.
    pub fn save(&self, ledger: &MonthLedger) -> Result<()> {
        let json = serde_json::to_string_pretty(&encode(ledger))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Rebuilds the in-memory ledger from its persisted form.
///
/// Every time string is re-parsed and every interval re-validated, so a
/// hand-edited file with an inverted range or an out-of-bounds time is
/// rejected here instead of corrupting later arithmetic.
fn decode(persisted: PersistedLedger) -> Result<MonthLedger> {
    let lunch = Interval::new(
        NaiveTime::parse_from_str(&persisted.lunch_time_start, "%H:%M")?,
        NaiveTime::parse_from_str(&persisted.lunch_time_end, "%H:%M")?,
    )?;
    let dinner = Interval::new(
        NaiveTime::parse_from_str(&persisted.dinner_time_start, "%H:%M")?,
        NaiveTime::parse_from_str(&persisted.dinner_time_end, "%H:%M")?,
    )?;

    let mut days = Vec::with_capacity(persisted.working_days.len());
    for day in &persisted.working_days {
        let interval = Interval::new(
            NaiveTime::parse_from_str(&day.start_time, "%H:%M:%S")?,
            NaiveTime::parse_from_str(&day.end_time, "%H:%M:%S")?,
        )?;
        days.push(Workday {
            date: NaiveDate::parse_from_str(&day.date, "%Y-%m-%d")?,
            interval,
            worked: Duration::seconds(day.working_time),
        });
    }

    Ok(MonthLedger::from_parts(
        BreakSchedule::new(lunch, dinner),
        Duration::seconds(persisted.total_working_time),
        persisted.total_working_days,
        days,
    ))
}

/// Flattens the ledger into its persisted form.
fn encode(ledger: &MonthLedger) -> PersistedLedger {
    PersistedLedger {
        total_working_time: ledger.total_worked().num_seconds(),
        total_working_days: ledger.total_days(),
        lunch_time_start: ledger.breaks.lunch.start().format("%H:%M").to_string(),
        lunch_time_end: ledger.breaks.lunch.end().format("%H:%M").to_string(),
        dinner_time_start: ledger.breaks.dinner.start().format("%H:%M").to_string(),
        dinner_time_end: ledger.breaks.dinner.end().format("%H:%M").to_string(),
        working_days: ledger
            .days()
            .iter()
            .map(|day| PersistedDay {
                date: day.date.format("%Y-%m-%d").to_string(),
                start_time: day.interval.start().format("%H:%M:%S").to_string(),
                end_time: day.interval.end().format("%H:%M:%S").to_string(),
                working_time: day.worked.num_seconds(),
            })
            .collect(),
    }
}
