//! Configuration management infrastructure
//!
//! Environment-driven configuration using figment:
//! - Typed defaults from `Config::default()`
//! - Environment variable overrides declared in the settings schema
//! - Aggregated semantic validation

pub mod loader;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader, EnvSource, ProcessEnv, SettingReport, SettingSource};
pub use validation::{collect_issues, validate_configuration, ValidationIssue};
