//! Application configuration initialization command.
//!
//! This command provides an interactive setup wizard that guides users
//! through configuring horas for first-time use. It collects the default
//! workday boundaries offered when recording a day.

use crate::{
    libs::{config::Config, messages::Message, view::View},
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the initialization command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Display the current configuration instead of running the wizard
    #[arg(short, long)]
    show: bool,
}

/// Executes the initialization command.
///
/// Runs the interactive configuration wizard and saves the result, or with
/// `--show` prints the stored settings without changing anything.
///
/// # Arguments
///
/// * `init_args` - Parsed command-line arguments containing options
///
/// # Returns
///
/// Returns `Ok(())` on successful configuration, or an error if the setup fails.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    // Display mode - report current settings and exit
    if init_args.show {
        match Config::read()?.workday {
            Some(defaults) => View::config(&defaults)?,
            None => msg_warning!(Message::ConfigNotInitialized),
        }
        return Ok(());
    }

    // Run interactive configuration wizard
    Config::init()?.save()?;

    // Confirm successful configuration
    msg_success!(Message::ConfigSaved);
    Ok(())
}
