//! Lunch and dinner break configuration for a month's ledger.

use crate::libs::interval::Interval;
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use chrono::Duration;
use dialoguer::{theme::ColorfulTheme, Input};

/// The two break periods subtracted from every recorded workday.
///
/// A schedule is captured once, when a month's ledger is first created, and
/// stays fixed for the life of that ledger. Lunch and dinner must not overlap
/// each other: [`BreakSchedule::prompt`] enforces this on entry, and code
/// building a schedule from other sources is expected to uphold it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakSchedule {
    pub lunch: Interval,
    pub dinner: Interval,
}

impl BreakSchedule {
    pub fn new(lunch: Interval, dinner: Interval) -> Self {
        Self { lunch, dinner }
    }

    /// Total break time falling inside the given work interval.
    ///
    /// The two overlaps are computed independently. With disjoint breaks no
    /// minute is counted twice.
    pub fn total_overlap(&self, work: &Interval) -> Duration {
        work.overlap(&self.lunch) + work.overlap(&self.dinner)
    }

    /// Working time left in `work` after subtracting both breaks.
    pub fn net_duration(&self, work: &Interval) -> Duration {
        let net = work.duration() - self.total_overlap(work);
        net.max(Duration::zero())
    }

    /// Interactive wizard collecting both breaks as `HH:MM-HH:MM` ranges.
    ///
    /// Re-prompts until each range parses and the two periods are disjoint.
    pub fn prompt() -> Result<Self> {
        let lunch = Self::prompt_range(Message::PromptLunchBreak, "12:00-13:00")?;
        loop {
            let dinner = Self::prompt_range(Message::PromptDinnerBreak, "18:00-18:30")?;
            if lunch.overlap(&dinner) == Duration::zero() {
                return Ok(Self { lunch, dinner });
            }
            msg_warning!(Message::BreaksOverlap);
        }
    }

    fn prompt_range(prompt: Message, default: &str) -> Result<Interval> {
        loop {
            let raw: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt.to_string())
                .default(default.to_string())
                .interact_text()?;
            match Interval::from_range_str(&raw) {
                Ok(interval) => return Ok(interval),
                Err(e) => msg_warning!(Message::InvalidBreakRange(e.to_string())),
            }
        }
    }
}
