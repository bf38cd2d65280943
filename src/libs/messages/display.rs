//! Display implementation for horas application messages.
//!
//! This module provides the `Display` trait implementation for the `Message`
//! enum, converting structured message data into human-readable text suitable
//! for terminal output. All user-facing text lives here, in one place.
//!
//! ## Message Categories
//!
//! The implementation handles these message categories:
//! - **Ledger Messages**: Day recording, persistence, and lookup results
//! - **Configuration Messages**: Setup and workday default handling
//! - **Summary Messages**: Monthly summary headers
//! - **Export Messages**: Data export operations and format handling
//! - **Break Messages**: Lunch and dinner schedule validation
//! - **Prompt Messages**: Interactive input labels
//! - **Input Validation Messages**: Malformed time and interval reporting
//!
//! ## Parameter Interpolation
//!
//! Messages with dynamic content use safe parameter interpolation:
//! ```text
//! Message::DayRecorded(date) => format!("Workday for {} recorded", date)
//! Message::ExportCompleted(path) => format!("Export completed successfully: {}", path)
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    /// Converts a `Message` enum variant into human-readable text.
    ///
    /// Each variant is handled explicitly, so adding a message type forces
    /// an explicit formatting decision here.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === LEDGER MESSAGES ===
            Message::DayRecorded(date) => format!("Workday for {} recorded", date),
            Message::DayReplaced(date) => format!("Workday for {} replaced", date),
            Message::LedgerSaved(path) => format!("Ledger saved at {}", path),
            Message::LedgerNotFoundForMonth(month) => format!("No ledger found for {}", month),
            Message::LedgerFileMalformed(path) => format!("Ledger file {} is malformed and cannot be loaded", path),
            Message::NewLedgerForMonth(month) => format!("Setting up a new ledger for {}", month),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigReadFailed(error) => format!("Failed to read config: {}", error),
            Message::ConfigModuleWorkday => "Workday defaults".to_string(),
            Message::ConfigNotInitialized => "No configuration found. Run 'horas init' to create one.".to_string(),

            // === SUMMARY MESSAGES ===
            Message::WorkingHoursForMonth(month) => format!("Working hours for {}", month),

            // === EXPORT MESSAGES ===
            Message::ExportingMonth(month, format) => format!("Exporting {} in {} format...", month, format),
            Message::ExportCompleted(path) => format!("Export completed successfully: {}", path),

            // === BREAK MESSAGES ===
            Message::BreaksOverlap => "Lunch and dinner breaks must not overlap".to_string(),
            Message::InvalidBreakRange(error) => format!("Invalid break range: {}", error),

            // === PROMPT MESSAGES ===
            Message::PromptLunchBreak => "Enter lunch break (HH:MM-HH:MM)".to_string(),
            Message::PromptDinnerBreak => "Enter dinner break (HH:MM-HH:MM)".to_string(),
            Message::PromptWorkStart => "Enter work start time (HH:MM:SS)".to_string(),
            Message::PromptWorkEnd => "Enter work end time (HH:MM:SS)".to_string(),
            Message::PromptWorkdayStart => "Enter default workday start (HH:MM:SS)".to_string(),
            Message::PromptWorkdayEnd => "Enter default workday end (HH:MM:SS)".to_string(),

            // === INPUT VALIDATION MESSAGES ===
            Message::InvalidWorkInterval(error) => format!("Invalid work interval: {}", error),
            Message::InvalidTimeFormat => "Enter a time as HH:MM:SS".to_string(),
        };

        write!(f, "{}", text)
    }
}
