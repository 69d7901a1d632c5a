//! Environment loading of [`Config`] and the settings report.

use std::collections::HashMap;
use std::hash::BuildHasher;

use figment::providers::Serialized;
use figment::Figment;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use super::validation::{validate_configuration, ValidationIssue};
use crate::domain::models::config::Config;
use crate::domain::models::settings::{mask_secret, SettingDescriptor, SettingKind, SETTINGS};

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment value could not be coerced to its declared kind
    #[error("Invalid value for {name}: '{value}' is not a valid {expected}")]
    MalformedValue {
        /// Environment variable
        name: &'static str,
        /// Raw value as found
        value: String,
        /// Kind the variable is declared as
        expected: SettingKind,
    },

    /// Defaults and overrides did not form a `Config`
    #[error("Failed to extract configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    /// One or more semantic rules were violated
    #[error("Configuration validation failed:\n- {}", join_issues(.0))]
    ValidationFailed(Vec<ValidationIssue>),
}

impl ConfigError {
    /// Violations carried by a validation failure; empty for load errors
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            Self::ValidationFailed(issues) => issues,
            _ => &[],
        }
    }
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n- ")
}

/// Source of raw environment values
pub trait EnvSource {
    /// Raw value of `name`, `None` when unset
    fn var(&self, name: &str) -> Option<String>;
}

/// The current process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl<S: BuildHasher> EnvSource for HashMap<String, String, S> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Where a setting's effective value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingSource {
    /// Set in the environment
    Environment,
    /// Built-in default
    Default,
}

/// One row of the settings report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingReport {
    /// Environment variable name
    pub env: &'static str,
    /// Effective value, masked for secrets
    pub value: String,
    /// Where the value came from
    pub source: SettingSource,
    /// Whether `value` is masked
    pub secret: bool,
}

/// Configuration loader
///
/// Precedence (lowest to highest):
/// 1. Programmatic defaults (`Config::default()`)
/// 2. Environment variables declared in [`SETTINGS`]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the process environment
    pub fn load() -> Result<Config, ConfigError> {
        Self::load_from(&ProcessEnv)
    }

    /// Load configuration from an arbitrary environment source
    ///
    /// Fails on the first value that cannot be coerced to its declared type.
    /// Semantic checks are left to [`ConfigLoader::validate`].
    pub fn load_from<E: EnvSource + ?Sized>(env: &E) -> Result<Config, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        let mut overrides = 0usize;

        for setting in SETTINGS {
            let Some(raw) = env.var(setting.env) else {
                continue;
            };
            let value = setting
                .coerce(&raw)
                .map_err(|err| ConfigError::MalformedValue {
                    name: setting.env,
                    value: err.raw,
                    expected: err.kind,
                })?;

            debug!(env = setting.env, key = setting.key, "environment override");
            figment = figment.merge(Serialized::default(setting.key, value));
            overrides += 1;
        }

        let config: Config = figment.extract().map_err(Box::new)?;

        info!(
            music_service = %config.music_service,
            overrides,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        validate_configuration(config)
    }

    /// Effective value and origin of every declared setting
    pub fn settings_report<E: EnvSource + ?Sized>(
        config: &Config,
        env: &E,
    ) -> Result<Vec<SettingReport>, ConfigError> {
        let figment = Figment::from(Serialized::defaults(config));

        SETTINGS
            .iter()
            .map(|setting| -> Result<SettingReport, ConfigError> {
                let value = figment.find_value(setting.key).map_err(Box::new)?;
                Ok(SettingReport {
                    env: setting.env,
                    value: render_value(setting, &value),
                    source: if env.var(setting.env).is_some() {
                        SettingSource::Environment
                    } else {
                        SettingSource::Default
                    },
                    secret: setting.secret,
                })
            })
            .collect()
    }
}

fn render_value(setting: &SettingDescriptor, value: &figment::value::Value) -> String {
    let rendered = match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => s,
        Ok(other) => other.to_string(),
        Err(_) => String::new(),
    };
    if setting.secret {
        mask_secret(&rendered)
    } else {
        rendered
    }
}
