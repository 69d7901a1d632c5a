//! Implementation of the `discovery-lastfm settings` command.

use anyhow::Result;
use comfy_table::Cell;
use serde::Serialize;

use crate::cli::display::{list_table, output, render_list, CommandOutput};
use crate::domain::models::config::Config;
use crate::infrastructure::config::{ConfigLoader, EnvSource, SettingReport, SettingSource};

/// Output of `settings`
#[derive(Debug, Serialize)]
pub struct SettingsOutput {
    /// One row per declared setting, in declaration order
    pub settings: Vec<SettingReport>,
}

impl CommandOutput for SettingsOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["variable", "value", "source"]);
        for row in &self.settings {
            let source = match row.source {
                SettingSource::Environment => "env",
                SettingSource::Default => "default",
            };
            table.add_row(vec![
                Cell::new(row.env),
                Cell::new(&row.value),
                Cell::new(source),
            ]);
        }
        render_list("setting", &table, self.settings.len())
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// List every declared setting with its effective value and origin
pub fn execute<E: EnvSource + ?Sized>(config: &Config, env: &E, json_mode: bool) -> Result<bool> {
    let settings = ConfigLoader::settings_report(config, env)?;
    output(&SettingsOutput { settings }, json_mode);
    Ok(true)
}
