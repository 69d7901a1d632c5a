//! Configuration model and settings schema.

pub mod config;
pub mod settings;

pub use config::{
    AutoUpdateConfig, Config, ContainerInfo, DiscoveryConfig, FilteringConfig, HeadphonesConfig,
    LastFmConfig, LidarrConfig, MusicService, RateLimitConfig, RedisConfig, RuntimeConfig,
    EXCLUDED_SECONDARY_TYPES,
};
pub use settings::{SettingDescriptor, SettingKind, SettingValue, SETTINGS};
