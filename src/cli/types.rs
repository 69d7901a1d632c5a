//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "discovery-lastfm")]
#[command(
    about = "DiscoveryLastFM - check the container configuration",
    long_about = "Loads every DiscoveryLastFM setting from the environment, validates it \
                  and prints a diagnostic summary. Exits non-zero when the configuration \
                  cannot be used."
)]
#[command(version)]
pub struct Cli {
    /// Command to run; `validate` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Also write JSON logs under LOG_PATH
    #[arg(long, global = true)]
    pub log_to_file: bool,

    /// Emit console logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

impl Cli {
    /// Selected command, `validate` when none was given
    pub fn selected_command(&self) -> Commands {
        self.command.unwrap_or(Commands::Validate)
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Validate the configuration and print the container summary (default)
    Validate,

    /// Print the container summary without failing on invalid settings
    Info,

    /// List every environment setting with its effective value
    Settings,
}
