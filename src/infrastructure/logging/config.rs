//! Logging settings derived from the runtime configuration.

use std::path::PathBuf;
use tracing_appender::rolling::Rotation;

use crate::domain::models::config::RuntimeConfig;
use crate::domain::models::settings::{SettingDescriptor, SettingValue};
use crate::infrastructure::config::EnvSource;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Console format
    pub format: LogFormat,

    /// Directory for log files (optional, if None logs only to stderr)
    pub log_dir: Option<PathBuf>,

    /// Log file rotation policy
    pub rotation: RotationPolicy,
}

/// Console log format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Compact human-readable lines
    #[default]
    Pretty,
}

/// When the log file is rolled over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RotationPolicy {
    /// New file every day
    #[default]
    Daily,
    /// A single file that grows forever
    Never,
}

impl From<RotationPolicy> for Rotation {
    fn from(policy: RotationPolicy) -> Self {
        match policy {
            RotationPolicy::Daily => Self::DAILY,
            RotationPolicy::Never => Self::NEVER,
        }
    }
}

impl LogConfig {
    /// Derive logging from the runtime settings.
    ///
    /// `DEBUG=true` lowers the level to debug; file output goes to
    /// `LOG_PATH` only when requested.
    pub fn from_runtime(runtime: &RuntimeConfig, format: LogFormat, log_to_file: bool) -> Self {
        Self {
            level: if runtime.debug { "debug" } else { "info" }.to_string(),
            format,
            log_dir: log_to_file.then(|| runtime.log_path.clone()),
            rotation: RotationPolicy::Daily,
        }
    }

    /// Read `DEBUG` and `LOG_PATH` directly from the environment.
    ///
    /// Lets the subscriber be installed before the full configuration is
    /// loaded, so loading itself is logged. Unparseable values fall back to
    /// their defaults; the loader reports them afterwards.
    pub fn from_env<E: EnvSource + ?Sized>(env: &E, format: LogFormat, log_to_file: bool) -> Self {
        let mut runtime = RuntimeConfig::default();
        if let Some(SettingValue::Flag(debug)) = raw_setting(env, "DEBUG") {
            runtime.debug = debug;
        }
        if let Some(SettingValue::Text(path)) = raw_setting(env, "LOG_PATH") {
            runtime.log_path = PathBuf::from(path);
        }
        Self::from_runtime(&runtime, format, log_to_file)
    }
}

fn raw_setting<E: EnvSource + ?Sized>(env: &E, name: &str) -> Option<SettingValue> {
    let setting = SettingDescriptor::by_env(name)?;
    setting.coerce(&env.var(setting.env)?).ok()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            log_dir: None,
            rotation: RotationPolicy::default(),
        }
    }
}
