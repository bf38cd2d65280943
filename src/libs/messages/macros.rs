//! Convenient macros for application messaging and logging.
//!
//! This module provides a set of macros that simplify message display
//! throughout the application. The macros automatically handle the
//! distinction between debug mode (with structured logging) and normal mode
//! (with simple console output), providing a unified interface for all
//! message display needs.
//!
//! ## Debug Mode Detection
//!
//! The system automatically detects debug mode based on environment variables:
//! - **`HORAS_DEBUG`**: Explicit debug mode enablement
//! - **`RUST_LOG`**: Standard Rust logging configuration
//! - **Caching**: Debug mode detection is cached for performance
//!
//! ## Macro Categories
//!
//! ### Display Macros
//! - **`msg_print!`**: General message display
//! - **`msg_success!`**: Success notifications with ✅ prefix
//! - **`msg_info!`**: Informational messages with ℹ️ prefix
//! - **`msg_warning!`**: Warning messages with ⚠️ prefix
//!
//! ### Error Handling Macros
//! - **`msg_error!`**: Error messages with ❌ prefix
//! - **`msg_error_anyhow!`**: Create anyhow::Error from messages
//! - **`msg_bail_anyhow!`**: Early return with error
//!
//! ### Debug Macros
//! - **`msg_debug!`**: Debug-only messages with 🔍 prefix
//!
//! ## Usage Examples
//!
//! ```rust
//! use horas::{msg_info, msg_success, msg_error};
//! use horas::libs::messages::Message;
//!
//! // Simple success message
//! msg_success!(Message::ConfigSaved);
//!
//! // Informational message with line breaks
//! msg_info!(Message::NewLedgerForMonth("September, 2025".to_string()), true);
//!
//! // Error message
//! msg_error!(Message::ConfigNotInitialized);
//! ```

/// Convenience macros for common message operations with conditional tracing support
use std::sync::OnceLock;

/// Global cache for debug mode detection to avoid repeated environment variable checks.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled, with caching for performance.
///
/// Debug mode is considered enabled if either of these environment variables
/// is set:
/// - **`HORAS_DEBUG`**: Application-specific debug flag
/// - **`RUST_LOG`**: Standard Rust logging configuration
///
/// The result is cached using `OnceLock`, so environment variables are
/// checked only once per application run. All message macros consult this
/// flag to decide between tracing output and plain console output.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| {
        // Check for application-specific debug flag
        std::env::var("HORAS_DEBUG").is_ok() ||
        // Check for standard Rust logging configuration
        std::env::var("RUST_LOG").is_ok()
    })
}

/// Prints a general message with automatic debug mode routing.
///
/// - **Debug Mode**: Uses `tracing::info!` for structured logging
/// - **Normal Mode**: Uses `println!` for simple console output
///
/// The second form adds blank lines around the message, used for section
/// headers:
///
/// ```rust
/// # use horas::msg_print;
/// # use horas::libs::messages::Message;
/// # let month = "September, 2025".to_string();
/// msg_print!(Message::WorkingHoursForMonth(month), true);
/// // Output: "\nWorking hours for September, 2025\n"
/// ```
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix and automatic routing.
///
/// Used for positive confirmations: a recorded day, a saved configuration,
/// a completed export.
///
/// ```rust
/// # use horas::msg_success;
/// # use horas::libs::messages::Message;
/// msg_success!(Message::ConfigSaved);
/// // Output: "✅ Configuration saved successfully"
/// ```
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix and automatic routing.
///
/// - **Debug Mode**: Uses `tracing::error!` for structured error logging
/// - **Normal Mode**: Uses `eprintln!` to write to stderr
///
/// Writing to stderr keeps error text out of normal output, so scripts can
/// redirect the two streams independently.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix and automatic routing.
///
/// Warnings indicate situations requiring user attention that don't prevent
/// operation from continuing, such as rejected interactive input or a missing
/// ledger for a requested month.
///
/// ```rust
/// # use horas::msg_warning;
/// # use horas::libs::messages::Message;
/// msg_warning!(Message::BreaksOverlap);
/// // Output: "⚠️ Lunch and dinner breaks must not overlap"
/// ```
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix and automatic routing.
///
/// Used for status updates: which month is being exported, that a fresh
/// ledger is being set up.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Debug-only message display with 🔍 prefix.
///
/// - **Debug Mode**: Messages are displayed using `tracing::debug!`
/// - **Normal Mode**: Messages are completely suppressed (no output)
///
/// ```rust
/// # use horas::msg_debug;
/// # let path = std::path::PathBuf::from("2025-09.json");
/// msg_debug!(format!("Loading ledger from {:?}", path));
/// // Debug mode output: "🔍 Loading ledger from \"2025-09.json\""
/// // Normal mode output: (nothing)
/// ```
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message with ❌ prefix.
///
/// Useful for error propagation in functions that return
/// `Result<T, anyhow::Error>` and need to convert application messages into
/// proper error types.
///
/// ```rust
/// # use horas::msg_error_anyhow;
/// # use horas::libs::messages::Message;
/// # use anyhow::Result;
/// fn load(path: String, looks_valid: bool) -> Result<()> {
///     if !looks_valid {
///         return Err(msg_error_anyhow!(Message::LedgerFileMalformed(path)));
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Early return with an error created from a message.
///
/// Equivalent to `return Err(msg_error_anyhow!(message))` but more concise.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
