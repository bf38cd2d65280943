//! Data export functionality for external analysis and backup.
//!
//! Exports a month's ledger in multiple formats for external analysis,
//! backup, or integration with other tools. The exported payload combines
//! the per-day records with the aggregate statistics so a single file tells
//! the whole story of the month.
//!
//! ## Features
//!
//! - **Export Formats**: CSV, JSON, Excel with formatting
//! - **File Naming**: Month-based default names with format-appropriate extensions
//! - **Consistent Presentation**: The same pre-formatted values shown in the
//!   console tables appear in every export format
//!
//! ## Usage
//!
//! ```rust,no_run
//! use horas::libs::export::{Exporter, ExportFormat};
//! use chrono::NaiveDate;
//!
//! # fn main() -> anyhow::Result<()> {
//! # let ledger = unimplemented!();
//! let month = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
//! let exporter = Exporter::new(ExportFormat::Csv, None, month);
//! exporter.export(month, &ledger)?;
//! # Ok(())
//! # }
//! ```

use crate::{
    libs::{
        formatter::{format_duration, FormattedDay},
        ledger::MonthLedger,
        messages::Message,
        workday::FormatWorkdays,
    },
    msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Enumeration of supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values format for universal compatibility.
    ///
    /// CSV exports provide maximum compatibility with spreadsheet
    /// applications, data analysis tools, and simple parsing libraries.
    Csv,

    /// JavaScript Object Notation for structured data exchange.
    ///
    /// JSON exports preserve data structure, making them ideal for
    /// programmatic processing and backup/restore operations. All exports
    /// use pretty-printing for human readability.
    Json,

    /// Microsoft Excel format with formatting capabilities.
    ///
    /// Excel exports provide rich formatting, auto-sizing, and presentation
    /// quality suitable for business reports.
    Excel,
}

/// Serializable structure representing a monthly summary for export.
///
/// Aggregates ledger data for an entire month: overview statistics plus the
/// daily breakdown, with every value pre-formatted for presentation.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportSummary {
    /// Month and year in "Month YYYY" format (e.g., "January 2025")
    pub month: String,
    /// List of daily work records with formatted times
    pub days: Vec<FormattedDay>,
    /// Total working hours for the month formatted as duration
    pub total_hours: String,
    /// Average daily working hours formatted as duration
    pub average_hours: String,
    /// Total number of working days in the month
    pub total_days: u32,
}

/// Main export handler responsible for orchestrating export operations.
///
/// Encapsulates the export format and output destination, and drives the
/// pipeline from data gathering to file generation.
pub struct Exporter {
    /// The desired output format for the export operation
    format: ExportFormat,
    /// The destination path for the exported file
    output_path: PathBuf,
}

impl Exporter {
    /// Creates a new Exporter with the specified format and optional output path.
    ///
    /// When no output path is specified, a default filename is generated from
    /// the exported month and format:
    /// - `horas_export_2025-09.csv`
    /// - `horas_export_2025-09.json`
    /// - `horas_export_2025-09.xlsx`
    ///
    /// # Arguments
    ///
    /// * `format` - The desired export format (CSV, JSON, or Excel)
    /// * `output_path` - Optional custom output path; generates default if None
    /// * `month` - The month being exported, used for default file naming
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, month: NaiveDate) -> Self {
        let default_name = format!("horas_export_{}", month.format("%Y-%m"));

        // Determine appropriate file extension based on format
        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };

        // Use custom path or generate default with appropriate extension
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    /// Exports a month's ledger with its aggregate statistics.
    ///
    /// Gathers the summary payload from the ledger, applies format-specific
    /// processing, and writes the output file.
    ///
    /// # Arguments
    ///
    /// * `month` - The month the ledger covers, used for the export title
    /// * `ledger` - The loaded ledger to export
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` on successful export completion, or an error if
    /// file writing fails.
    pub fn export(&self, month: NaiveDate, ledger: &MonthLedger) -> Result<()> {
        let summary_data = self.gather_summary_data(month, ledger);

        // Apply format-specific processing and generate output file
        match self.format {
            ExportFormat::Csv => self.export_summary_csv(&summary_data)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&summary_data)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
            ExportFormat::Excel => self.export_summary_excel(&summary_data)?,
        }

        // Provide user feedback about successful export completion
        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    /// Gathers monthly summary data from the ledger.
    ///
    /// The per-day rows reuse the same formatting pipeline as the console
    /// tables, and the aggregate values come straight from the ledger's
    /// maintained totals.
    fn gather_summary_data(&self, month: NaiveDate, ledger: &MonthLedger) -> ExportSummary {
        let summary = ledger.summary();

        ExportSummary {
            month: month.format("%B %Y").to_string(), // "January 2025" format
            days: ledger.days().format(),
            total_hours: format_duration(&summary.total),
            average_hours: format_duration(&summary.average),
            total_days: summary.days,
        }
    }

    /// Exports the monthly summary to CSV format with hierarchical structure.
    ///
    /// The file carries a title row, the daily breakdown table, and a
    /// statistics section separated by an empty row for readability in
    /// spreadsheet applications.
    fn export_summary_csv(&self, summary: &ExportSummary) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        // Write title and daily breakdown
        wtr.write_record(&[format!("Working hours for {}", summary.month), "".to_owned(), "".to_owned(), "".to_owned()])?;
        wtr.write_record(&["Date", "Start", "End", "Worked"])?;

        for day in &summary.days {
            wtr.write_record(&[day.date.clone(), day.start.clone(), day.end.clone(), day.worked.clone()])?;
        }

        // Add summary statistics
        wtr.write_record(&["", "", "", ""])?;
        wtr.write_record(&["Total Hours", &summary.total_hours, "", ""])?;
        wtr.write_record(&["Average Hours", &summary.average_hours, "", ""])?;
        wtr.write_record(&["Total Days", &summary.total_days.to_string(), "", ""])?;

        wtr.flush()?;
        Ok(())
    }

    /// Exports the monthly summary to Excel format with title formatting.
    ///
    /// Creates a worksheet with a formatted title, a header row for the
    /// daily breakdown, and a summary statistics section, with columns
    /// auto-sized for readability.
    fn export_summary_excel(&self, summary: &ExportSummary) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        // Create formatting styles
        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        let title_format = Format::new().set_bold().set_font_size(14.0);

        // Write title and daily breakdown
        worksheet.write_string_with_format(0, 0, &format!("Working hours for {}", summary.month), &title_format)?;
        worksheet.write_string_with_format(2, 0, "Date", &header_format)?;
        worksheet.write_string_with_format(2, 1, "Start", &header_format)?;
        worksheet.write_string_with_format(2, 2, "End", &header_format)?;
        worksheet.write_string_with_format(2, 3, "Worked", &header_format)?;

        let mut row = 3;
        for day in &summary.days {
            worksheet.write_string(row, 0, &day.date)?;
            worksheet.write_string(row, 1, &day.start)?;
            worksheet.write_string(row, 2, &day.end)?;
            worksheet.write_string(row, 3, &day.worked)?;
            row += 1;
        }

        // Add summary statistics
        row += 1;
        worksheet.write_string(row, 0, "Total Hours")?;
        worksheet.write_string(row, 1, &summary.total_hours)?;
        row += 1;
        worksheet.write_string(row, 0, "Average Hours")?;
        worksheet.write_string(row, 1, &summary.average_hours)?;
        row += 1;
        worksheet.write_string(row, 0, "Total Days")?;
        worksheet.write_number(row, 1, summary.total_days as f64)?;

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
