//! DiscoveryLastFM configuration check entry point.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use discovery_lastfm::cli::{commands, handle_error, Cli, Commands};
use discovery_lastfm::infrastructure::config::{ConfigLoader, ProcessEnv};
use discovery_lastfm::infrastructure::logging::{LogConfig, LogFormat, LoggerImpl};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            handle_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    // Installed before loading so override and load events are recorded
    let _logger = LoggerImpl::init(&LogConfig::from_env(
        &ProcessEnv,
        format,
        cli.log_to_file,
    ))?;

    let config = ConfigLoader::load_from(&ProcessEnv)?;

    match cli.selected_command() {
        Commands::Validate => commands::validate::execute(&config, cli.json),
        Commands::Info => commands::info::execute(&config, cli.json),
        Commands::Settings => commands::settings::execute(&config, &ProcessEnv, cli.json),
    }
}
