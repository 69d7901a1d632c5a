//! Implementation of the `discovery-lastfm validate` command.

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use super::info::container_view;
use crate::cli::display::{action_failure, action_success, output, CommandOutput};
use crate::domain::models::config::{Config, ContainerInfo};
use crate::infrastructure::config::{ConfigError, ConfigLoader};

/// Output of `validate`
#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    /// Configuration passed every rule
    pub valid: bool,
    /// Diagnostic snapshot, present only when valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerInfo>,
    /// One message per violated rule
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ValidateOutput {
    /// Build the report for a configuration
    pub fn for_config(config: &Config) -> Result<Self> {
        match ConfigLoader::validate(config) {
            Ok(()) => Ok(Self {
                valid: true,
                container: Some(config.container_info()),
                errors: vec![],
            }),
            Err(ConfigError::ValidationFailed(issues)) => Ok(Self {
                valid: false,
                container: None,
                errors: issues.iter().map(ToString::to_string).collect(),
            }),
            Err(other) => Err(other.into()),
        }
    }
}

impl CommandOutput for ValidateOutput {
    fn to_human(&self) -> String {
        if self.valid {
            let mut lines = vec![action_success("Configuration validation passed")];
            if let Some(info) = &self.container {
                lines.push(String::new());
                lines.push(container_view(info));
            }
            return lines.join("\n");
        }

        let mut lines = vec![action_failure("Configuration validation failed:")];
        lines.extend(self.errors.iter().map(|e| format!("  - {e}")));
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Validate and report; returns whether the configuration was accepted.
pub fn execute(config: &Config, json_mode: bool) -> Result<bool> {
    let report = ValidateOutput::for_config(config)?;
    info!(
        valid = report.valid,
        issues = report.errors.len(),
        "configuration checked"
    );
    output(&report, json_mode);
    Ok(report.valid)
}
