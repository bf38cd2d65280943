//! Configuration management system for the horas application.
//!
//! This module handles application settings and the interactive setup wizard.
//! Configuration is intentionally small: the only tunable module holds the
//! default workday boundaries offered when recording a day interactively.
//!
//! ## Configuration Structure
//!
//! - **Workday Config**: Default start and end times ("HH:MM:SS") pre-filled
//!   into the `add` command prompts
//!
//! ## Storage
//!
//! Configuration files are stored in JSON format in platform-specific
//! application data directories:
//! - **Windows**: `%LOCALAPPDATA%\horas\config.json`
//! - **macOS**: `~/Library/Application Support/horas/config.json`
//! - **Linux**: `~/.local/share/horas/config.json`
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use horas::libs::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! // Load existing configuration or create default
//! let config = Config::read()?;
//!
//! // Run interactive configuration setup
//! let updated_config = Config::init()?;
//! updated_config.save()?;
//! # Ok(())
//! # }
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use chrono::NaiveTime;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default workday boundaries offered when recording a day.
///
/// Times are kept as "HH:MM:SS" strings, the same shape they take in the
/// interactive prompts and on disk. They are parsed only at the point a
/// work interval is actually built from them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WorkdayDefaults {
    /// Suggested start of the working day, "HH:MM:SS".
    pub start: String,
    /// Suggested end of the working day, "HH:MM:SS".
    pub end: String,
}

/// Main configuration container for the entire application.
///
/// Each field represents an optional module. The
/// `skip_serializing_if = "Option::is_none"` attribute ensures that
/// unconfigured modules are omitted from the JSON output, keeping
/// configuration files clean and readable.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Default workday boundaries for interactive recording.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workday: Option<WorkdayDefaults>,
}

impl Default for WorkdayDefaults {
    /// A standard nine-to-six office day.
    fn default() -> Self {
        WorkdayDefaults {
            start: "09:00:00".to_string(),
            end: "18:00:00".to_string(),
        }
    }
}

impl Default for Config {
    /// Creates a default configuration with all modules disabled.
    ///
    /// This provides a clean starting point for new installations. The
    /// workday module stays `None` until explicit setup through the
    /// interactive configuration system or manual editing.
    fn default() -> Self {
        Config { workday: None }
    }
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// Attempts to load the configuration file from the platform-specific
    /// application data directory. If no configuration file exists, it
    /// returns a default configuration, allowing the application to function
    /// with minimal setup.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or parsed.
    pub fn read() -> Result<Config> {
        // Resolve the configuration file path using the data storage system
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        // If no configuration file exists, return default configuration
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration to the filesystem.
    ///
    /// Serializes the configuration to pretty-printed JSON so the file stays
    /// readable and hand-editable. The application data directory is created
    /// if it does not exist yet.
    pub fn save(&self) -> Result<()> {
        // Resolve the configuration file path and ensure directory exists
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs an interactive configuration setup wizard.
    ///
    /// Prompts for the default workday boundaries, pre-filling existing
    /// values (or the nine-to-six defaults) so updates only require pressing
    /// enter. Inputs are validated as "HH:MM:SS" before acceptance.
    ///
    /// # Returns
    ///
    /// Returns a fully configured `Config` instance ready for saving.
    pub fn init() -> Result<Self> {
        // Load existing configuration to use as defaults for the setup wizard
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(_) => Config::default(),
        };

        let default = config.workday.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleWorkday);
        config.workday = Some(WorkdayDefaults {
            start: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptWorkdayStart.to_string())
                .default(default.start)
                .validate_with(|input: &String| match NaiveTime::parse_from_str(input, "%H:%M:%S") {
                    Ok(_) => Ok(()),
                    Err(_) => Err(Message::InvalidTimeFormat),
                })
                .interact_text()?,

            end: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptWorkdayEnd.to_string())
                .default(default.end)
                .validate_with(|input: &String| match NaiveTime::parse_from_str(input, "%H:%M:%S") {
                    Ok(_) => Ok(()),
                    Err(_) => Err(Message::InvalidTimeFormat),
                })
                .interact_text()?,
        });

        Ok(config)
    }

    /// Returns the configured workday defaults, or the standard ones when
    /// the module was never set up.
    pub fn workday_defaults(&self) -> WorkdayDefaults {
        self.workday.clone().unwrap_or_default()
    }
}
