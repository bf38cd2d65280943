use crate::{
    libs::{messages::Message, view::View, workday::FormatWorkdays},
    msg_print, msg_warning,
    store::ledger::LedgerStore,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct SumArgs {
    #[arg(long, help = "Show the break schedule and per-day breakdown")]
    detailed: bool,
    #[arg(long, help = "Month to summarize as YYYY-MM (defaults to the current month)")]
    month: Option<String>,
}

pub fn cmd(sum_args: SumArgs) -> Result<()> {
    let month = resolve_month(sum_args.month.as_deref())?;

    msg_print!(Message::WorkingHoursForMonth(month.format("%B, %Y").to_string()), true);

    let ledger = match LedgerStore::new(month)?.load()? {
        Some(ledger) => ledger,
        None => {
            msg_warning!(Message::LedgerNotFoundForMonth(month.format("%Y-%m").to_string()));
            return Ok(());
        }
    };

    if sum_args.detailed {
        View::breaks(&ledger.breaks)?;
        View::days(&ledger.days().format())?;
    }
    View::summary(&ledger.summary())?;

    Ok(())
}

fn resolve_month(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(raw) => Ok(NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d")?),
        None => Ok(Local::now().date_naive()),
    }
}
