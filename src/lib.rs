//! # Horas - Monthly Working-Hours Ledger
//!
//! A command-line utility for recording daily work intervals and keeping
//! a running monthly account of net working time.
//!
//! ## Features
//!
//! - **Interval Recording**: One work interval per day, re-recordable until right
//! - **Break Subtraction**: Lunch and dinner overlap is deducted automatically
//! - **Monthly Summaries**: Totals, day counts, and per-day averages
//! - **Data Export**: Export a month to CSV, JSON, and Excel formats
//! - **Plain Storage**: One readable JSON file per month
//!
//! ## Usage
//!
//! ```rust,no_run
//! use horas::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod store;
