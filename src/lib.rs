//! DiscoveryLastFM configuration store
//!
//! Loads the environment-driven settings of the DiscoveryLastFM container
//! (Last.fm account, Lidarr or Headphones backend, discovery tuning, rate
//! limits, Redis cache and auto-update policy), validates them and reports a
//! diagnostic snapshot.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): typed configuration model and settings schema
//! - **Infrastructure Layer** (`infrastructure`): environment loading,
//!   validation and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use discovery_lastfm::ConfigLoader;
//!
//! let config = ConfigLoader::load()?;
//! ConfigLoader::validate(&config)?;
//! println!("{}", config.container_info().music_service);
//! # Ok::<(), discovery_lastfm::ConfigError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{
    Config, ContainerInfo, MusicService, SettingDescriptor, SettingKind, SETTINGS,
};
pub use infrastructure::config::{
    validate_configuration, ConfigError, ConfigLoader, EnvSource, ProcessEnv, ValidationIssue,
};
