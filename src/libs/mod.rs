//! Core library modules for the horas application.
//!
//! Serves as the main entry point for all horas library components, providing
//! a centralized access point to the application's core functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Time Arithmetic**: Intervals, break schedules, overlap subtraction
//! - **Ledger Management**: Monthly record keeping with maintained totals
//! - **User Interface**: Console rendering, data export, formatting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use horas::libs::interval::Interval;
//! use horas::libs::ledger::MonthLedger;
//! use horas::libs::schedule::BreakSchedule;
//! use chrono::{NaiveDate, NaiveTime};
//!
//! # fn main() -> anyhow::Result<()> {
//! let lunch = Interval::new(NaiveTime::from_hms_opt(12, 0, 0).unwrap(), NaiveTime::from_hms_opt(13, 0, 0).unwrap())?;
//! let dinner = Interval::new(NaiveTime::from_hms_opt(18, 0, 0).unwrap(), NaiveTime::from_hms_opt(18, 30, 0).unwrap())?;
//! let mut ledger = MonthLedger::new(BreakSchedule::new(lunch, dinner));
//!
//! let work = Interval::new(NaiveTime::from_hms_opt(9, 0, 0).unwrap(), NaiveTime::from_hms_opt(18, 0, 0).unwrap())?;
//! ledger.record_work(NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(), work)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod interval;
pub mod ledger;
pub mod messages;
pub mod schedule;
pub mod view;
pub mod workday;
