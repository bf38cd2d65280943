//! Work interval recording command.
//!
//! Records today's worked interval into the current month's ledger. Start
//! and end times come from command-line flags or interactive prompts, with
//! the configured workday defaults pre-filled. The first recording of a
//! month also sets up the ledger's break schedule through a short wizard.
//!
//! Recording the same day again replaces the previous entry, so a mistyped
//! time is fixed by simply running the command once more.

use crate::{
    libs::{
        config::{Config, WorkdayDefaults},
        interval::Interval,
        ledger::{MonthLedger, RecordAction},
        messages::Message,
        schedule::BreakSchedule,
        view::View,
        workday::FormatWorkdays,
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
    store::ledger::LedgerStore,
};
use anyhow::Result;
use chrono::{Local, NaiveTime};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

/// Command-line arguments for the add command.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Work start time as HH:MM:SS (prompted for when omitted)
    #[arg(long)]
    start: Option<String>,

    /// Work end time as HH:MM:SS (prompted for when omitted)
    #[arg(long)]
    end: Option<String>,
}

/// Executes the add command.
///
/// Loads (or creates) the ledger for the current month, records today's
/// interval, saves the result, and prints the updated monthly summary.
///
/// # Arguments
///
/// * `add_args` - Parsed command-line arguments containing options
///
/// # Returns
///
/// Returns `Ok(())` once the day is recorded and saved, or an error if
/// the ledger cannot be loaded, updated, or written.
pub fn cmd(add_args: AddArgs) -> Result<()> {
    let today = Local::now().date_naive();

    // A broken config must not block recording; fall back to defaults
    let config = match Config::read() {
        Ok(config) => config,
        Err(e) => {
            msg_error!(Message::ConfigReadFailed(e.to_string()));
            Config::default()
        }
    };
    let defaults = config.workday_defaults();

    let store = LedgerStore::new(today)?;
    let mut ledger = match store.load()? {
        Some(ledger) => ledger,
        None => {
            msg_info!(Message::NewLedgerForMonth(today.format("%B, %Y").to_string()));
            MonthLedger::new(BreakSchedule::prompt()?)
        }
    };

    let work = resolve_interval(&add_args, &defaults)?;
    let action = ledger.record_work(today, work)?;
    store.save(&ledger)?;

    match action {
        RecordAction::Appended => msg_success!(Message::DayRecorded(today.to_string())),
        RecordAction::Replaced => msg_success!(Message::DayReplaced(today.to_string())),
    }
    msg_print!(Message::LedgerSaved(store.path().display().to_string()));

    // Show the month as it stands after the new entry
    msg_print!(Message::WorkingHoursForMonth(today.format("%B, %Y").to_string()), true);
    View::days(&ledger.days().format())?;
    View::summary(&ledger.summary())?;

    Ok(())
}

/// Builds the work interval from flags or interactive prompts.
///
/// When both flags are present the times are taken as-is, keeping the
/// command scriptable. Otherwise both boundaries are prompted for, with any
/// provided flag pre-filling its prompt default, and the pair is re-asked
/// until it forms a valid interval.
fn resolve_interval(args: &AddArgs, defaults: &WorkdayDefaults) -> Result<Interval> {
    if let (Some(start), Some(end)) = (&args.start, &args.end) {
        let start = NaiveTime::parse_from_str(start, "%H:%M:%S")?;
        let end = NaiveTime::parse_from_str(end, "%H:%M:%S")?;
        return Ok(Interval::new(start, end)?);
    }

    loop {
        let start = prompt_time(Message::PromptWorkStart, args.start.as_deref().unwrap_or(defaults.start.as_str()))?;
        let end = prompt_time(Message::PromptWorkEnd, args.end.as_deref().unwrap_or(defaults.end.as_str()))?;
        match Interval::new(start, end) {
            Ok(interval) => return Ok(interval),
            Err(e) => msg_warning!(Message::InvalidWorkInterval(e.to_string())),
        }
    }
}

/// Prompts for a single "HH:MM:SS" time with a pre-filled default.
fn prompt_time(prompt: Message, default: &str) -> Result<NaiveTime> {
    let raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(default.to_string())
        .validate_with(|input: &String| match NaiveTime::parse_from_str(input, "%H:%M:%S") {
            Ok(_) => Ok(()),
            Err(_) => Err(Message::InvalidTimeFormat),
        })
        .interact_text()?;

    Ok(NaiveTime::parse_from_str(&raw, "%H:%M:%S")?)
}
