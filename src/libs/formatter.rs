//! Time duration formatting utilities for user-friendly display.
//!
//! This module provides formatting functions and types for converting time
//! durations into human-readable string representations. It is used
//! throughout the application for displaying worked hours in tables,
//! summaries, and export payloads.
//!
//! ## Format Specifications
//!
//! Two renderings are provided:
//!
//! - `format_duration` produces "HH:MM", used for monthly totals and
//!   averages where minute precision is enough
//! - `format_duration_hms` produces "HH:MM:SS", used for per-day worked
//!   time where the recorded intervals carry seconds
//!
//! Hours are not wrapped at 24, so a monthly total renders as e.g.
//! "176:30". Negative durations are treated as zero.
//!
//! ## Examples
//!
//! ```rust
//! use horas::libs::formatter::{format_duration, format_duration_hms};
//! use chrono::Duration;
//!
//! let duration = Duration::hours(2) + Duration::minutes(30);
//! assert_eq!(format_duration(&duration), "02:30");
//! assert_eq!(format_duration_hms(&duration), "02:30:00");
//! ```

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// A ledger day with every field pre-rendered to text.
///
/// Rather than storing raw time values and formatting them at display time,
/// this structure pre-formats all values to strings. All consumers (console
/// tables, CSV rows, JSON export) then present identical text without
/// repeating the formatting rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedDay {
    /// The calendar date, "YYYY-MM-DD".
    pub date: String,
    /// The recorded start of work, "HH:MM:SS".
    pub start: String,
    /// The recorded end of work, "HH:MM:SS".
    pub end: String,
    /// Net working time after break subtraction, "HH:MM:SS".
    pub worked: String,
}

/// Formats a chrono::Duration into a standardized "HH:MM" string.
///
/// # Examples
///
/// ```rust
/// use horas::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::hours(8)), "08:00");
/// assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
/// assert_eq!(format_duration(&Duration::zero()), "00:00");
/// assert_eq!(format_duration(&Duration::hours(-1)), "00:00");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    // Negative values clamp to zero rather than rendering a minus sign
    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a chrono::Duration into a "HH:MM:SS" string, same clamping rules
/// as [`format_duration`].
pub fn format_duration_hms(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;
    let secs = duration.num_seconds() % 60;

    format!("{:02}:{:02}:{:02}", hours.max(0), mins.max(0), secs.max(0))
}
