//! Data export command for external analysis and backup.
//!
//! Extracts a month's ledger into a standalone file for spreadsheet
//! analysis, backup purposes, or integration with other tools.
//!
//! ## Supported Export Formats
//!
//! - **CSV**: Comma-separated values for spreadsheet applications
//! - **JSON**: Structured data for programmatic processing
//! - **Excel**: Native spreadsheet format with formatting

use crate::{
    libs::{
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_bail_anyhow, msg_info,
    store::ledger::LedgerStore,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

/// Command-line arguments for the export command.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format for the exported data
    ///
    /// Controls the structure of the exported file:
    /// - **csv**: Comma-separated values, compatible with spreadsheet tools
    /// - **json**: Structured JSON data, ideal for programmatic processing
    /// - **excel**: Native Excel format with formatting
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path
    ///
    /// When specified, the export is saved to this exact location. If not
    /// provided, a default filename is generated from the exported month
    /// and format, e.g. `horas_export_2025-09.csv`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Month to export as YYYY-MM (defaults to the current month)
    #[arg(short, long)]
    month: Option<String>,
}

/// Executes the data export command.
///
/// Loads the requested month's ledger and hands it to the exporter.
/// A month without a ledger file is an error here, unlike in `sum`,
/// because an empty export file would be indistinguishable from a
/// successful one.
///
/// # Arguments
///
/// * `args` - Parsed command-line arguments specifying export parameters
///
/// # Returns
///
/// Returns `Ok(())` on successful export completion, or an error if the
/// ledger is missing or file writing fails.
///
/// # Examples
///
/// ```bash
/// # Export the current month as CSV
/// horas export
///
/// # Export a specific month as JSON
/// horas export --format json --month 2025-08
///
/// # Export to Excel with a custom filename
/// horas export --format excel --output september.xlsx
/// ```
pub fn cmd(args: ExportArgs) -> Result<()> {
    let month = resolve_month(args.month.as_deref())?;

    let ledger = match LedgerStore::new(month)?.load()? {
        Some(ledger) => ledger,
        None => msg_bail_anyhow!(Message::LedgerNotFoundForMonth(month.format("%Y-%m").to_string())),
    };

    msg_info!(Message::ExportingMonth(month.format("%Y-%m").to_string(), format!("{:?}", args.format)));

    Exporter::new(args.format, args.output, month).export(month, &ledger)?;

    Ok(())
}

fn resolve_month(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(raw) => Ok(NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d")?),
        None => Ok(Local::now().date_naive()),
    }
}
