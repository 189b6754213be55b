//! Configuration module
//!
//! Global flags shared by every subcommand, and where the settings and
//! state files live.

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Directory under the platform config dir holding both files
pub const APP_DIR: &str = "hover-reader";

/// Default settings file name
pub const SETTINGS_FILE: &str = "settings.toml";

/// Default state file name
pub const STATE_FILE: &str = "state.json";

/// Flags accepted by every subcommand
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Settings file (linesPerPage, textFilePath)
    #[arg(long, global = true, value_name = "FILE", env = "HOVER_READER_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// State file holding the current page and direction
    #[arg(long, global = true, value_name = "FILE", env = "HOVER_READER_STATE")]
    pub state: Option<PathBuf>,

    /// Workspace root that relative text file paths are resolved against
    #[arg(short, long, global = true, value_name = "DIR", env = "HOVER_READER_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Output format for pages and status
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress log output and notices
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Resolved file locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderPaths {
    /// Settings file
    pub settings: PathBuf,
    /// State file
    pub state: PathBuf,
    /// Workspace root, if any
    pub workspace: Option<PathBuf>,
}

impl GlobalArgs {
    /// Fill in default locations for anything not given explicitly
    pub fn resolve_paths(&self) -> Result<ReaderPaths> {
        let needs_default = self.settings.is_none() || self.state.is_none();
        let app_dir = if needs_default {
            Some(default_app_dir()?)
        } else {
            None
        };
        let default_in = |name: &str| app_dir.as_ref().map(|dir| dir.join(name));

        Ok(ReaderPaths {
            settings: self
                .settings
                .clone()
                .or_else(|| default_in(SETTINGS_FILE))
                .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE)),
            state: self
                .state
                .clone()
                .or_else(|| default_in(STATE_FILE))
                .unwrap_or_else(|| PathBuf::from(STATE_FILE)),
            workspace: self.workspace.clone(),
        })
    }

    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A second initialization (e.g. from tests) keeps the first logger.
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

fn default_app_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| {
            CliError::ConfigError(
                "no platform config directory; pass --settings and --state".to_string(),
            )
            .into()
        })
}
