use super::config::WorkdayDefaults;
use super::formatter::{format_duration, FormattedDay};
use super::ledger::LedgerSummary;
use super::schedule::BreakSchedule;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn days(days: &Vec<FormattedDay>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "START", "END", "WORKED"]);
        for day in days {
            table.add_row(row![day.date, day.start, day.end, day.worked]);
        }
        table.printstd();

        Ok(())
    }

    pub fn summary(summary: &LedgerSummary) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TOTAL", "DAYS", "AVERAGE"]);
        table.add_row(row![
            format_duration(&summary.total),
            summary.days,
            format_duration(&summary.average)
        ]);
        table.printstd();

        Ok(())
    }

    pub fn breaks(schedule: &BreakSchedule) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["BREAK", "START", "END"]);
        table.add_row(row![
            "Lunch",
            schedule.lunch.start().format("%H:%M"),
            schedule.lunch.end().format("%H:%M")
        ]);
        table.add_row(row![
            "Dinner",
            schedule.dinner.start().format("%H:%M"),
            schedule.dinner.end().format("%H:%M")
        ]);
        table.printstd();

        Ok(())
    }

    pub fn config(defaults: &WorkdayDefaults) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["SETTING", "VALUE"]);
        table.add_row(row!["Workday start", defaults.start]);
        table.add_row(row!["Workday end", defaults.end]);
        table.printstd();

        Ok(())
    }
}
