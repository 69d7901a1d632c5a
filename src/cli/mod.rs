//! Command-line interface

pub mod commands;
pub mod display;
pub mod types;

pub use types::{Cli, Commands};

use display::action_failure;

/// Report a fatal error in the selected output mode
pub fn handle_error(err: &anyhow::Error, json_mode: bool) {
    if json_mode {
        let body = serde_json::json!({
            "valid": false,
            "error": format!("{err:#}"),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );
    } else {
        eprintln!("{}", action_failure(&format!("{err:#}")));
    }
}
