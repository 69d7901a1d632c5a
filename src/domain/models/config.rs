//! Typed configuration of the DiscoveryLastFM container.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Placeholder shipped for `LASTFM_USERNAME`
pub const PLACEHOLDER_LASTFM_USERNAME: &str = "your_lastfm_username";
/// Placeholder shipped for `LASTFM_API_KEY`
pub const PLACEHOLDER_LASTFM_API_KEY: &str = "your_lastfm_api_key";
/// Placeholder shipped for `LIDARR_API_KEY`
pub const PLACEHOLDER_LIDARR_API_KEY: &str = "your_lidarr_api_key";
/// Placeholder shipped for `HP_API_KEY`
pub const PLACEHOLDER_HEADPHONES_API_KEY: &str = "your_headphones_api_key";
/// Default Lidarr endpoint inside the compose network
pub const DEFAULT_LIDARR_ENDPOINT: &str = "http://lidarr:8686";
/// Default Headphones endpoint inside the compose network
pub const DEFAULT_HEADPHONES_ENDPOINT: &str = "http://headphones:8181";

/// Owner of the repository polled for updates
pub const GITHUB_REPO_OWNER: &str = "MrRobotoGit";
/// Name of the repository polled for updates
pub const GITHUB_REPO_NAME: &str = "DiscoveryLastFM";

/// MusicBrainz secondary release types never picked during album discovery.
pub const EXCLUDED_SECONDARY_TYPES: [&str; 12] = [
    "Compilation",
    "Live",
    "Remix",
    "Soundtrack",
    "DJ-Mix",
    "Mixtape/Street",
    "EP",
    "Single",
    "Interview",
    "Audiobook",
    "Demo",
    "Bootleg",
];

/// Music management backend that receives discovered artists and albums.
///
/// Any string is accepted when loading; values other than `lidarr` and
/// `headphones` are kept as [`MusicService::Unknown`] and rejected by
/// validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MusicService {
    /// Lidarr v1 API
    #[default]
    Lidarr,
    /// Headphones API
    Headphones,
    /// Unrecognized selection, kept verbatim
    Unknown(String),
}

impl MusicService {
    /// Selection as written in `MUSIC_SERVICE`
    pub fn as_str(&self) -> &str {
        match self {
            Self::Lidarr => "lidarr",
            Self::Headphones => "headphones",
            Self::Unknown(raw) => raw,
        }
    }

    /// Whether this selection names a supported backend
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<String> for MusicService {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "lidarr" => Self::Lidarr,
            "headphones" => Self::Headphones,
            _ => Self::Unknown(raw),
        }
    }
}

impl From<MusicService> for String {
    fn from(service: MusicService) -> Self {
        match service {
            MusicService::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MusicService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete runtime configuration for DiscoveryLastFM.
///
/// Built once at startup by [`ConfigLoader`](crate::infrastructure::config::ConfigLoader)
/// and shared by reference afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Selected music management backend
    #[serde(default)]
    pub music_service: MusicService,

    /// Last.fm account used as the listening-history source
    #[serde(default)]
    pub lastfm: LastFmConfig,

    /// Lidarr connection and behaviour
    #[serde(default)]
    pub lidarr: LidarrConfig,

    /// Headphones connection
    #[serde(default)]
    pub headphones: HeadphonesConfig,

    /// Discovery tuning
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Outbound API pacing
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// Process-level toggles and paths
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Album filtering
    #[serde(default)]
    pub filtering: FilteringConfig,

    /// Optional Redis cache backend
    #[serde(default)]
    pub redis: RedisConfig,

    /// Self-update policy
    #[serde(default)]
    pub auto_update: AutoUpdateConfig,
}

impl Config {
    /// API key of the selected backend, if the selection is known
    pub fn service_api_key(&self) -> Option<&str> {
        match self.music_service {
            MusicService::Lidarr => Some(&self.lidarr.api_key),
            MusicService::Headphones => Some(&self.headphones.api_key),
            MusicService::Unknown(_) => None,
        }
    }

    /// Endpoint of the selected backend, if the selection is known
    pub fn service_endpoint(&self) -> Option<&str> {
        match self.music_service {
            MusicService::Lidarr => Some(&self.lidarr.endpoint),
            MusicService::Headphones => Some(&self.headphones.endpoint),
            MusicService::Unknown(_) => None,
        }
    }

    /// Diagnostic snapshot of the operational settings.
    ///
    /// Performs no validation; the marker is set because the snapshot is
    /// meant to be taken from a configuration that already passed it.
    pub fn container_info(&self) -> ContainerInfo {
        ContainerInfo {
            music_service: self.music_service.to_string(),
            container_mode: self.runtime.mode.clone(),
            dry_run: self.runtime.dry_run,
            debug: self.runtime.debug,
            log_path: self.runtime.log_path.clone(),
            cache_path: self.runtime.cache_path.clone(),
            redis_enabled: self.redis.enabled,
            auto_update_enabled: self.auto_update.enabled,
            update_check_interval: self.auto_update.check_interval_hours,
            backup_retention: self.auto_update.backup_retention_days,
            allow_prerelease: self.auto_update.allow_prerelease,
            validation_passed: true,
        }
    }
}

/// Diagnostic view of a loaded [`Config`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerInfo {
    /// Selected backend as configured
    pub music_service: String,
    /// `DISCOVERY_MODE`
    pub container_mode: String,
    /// Discovery runs without adding anything to the backend
    pub dry_run: bool,
    /// Verbose logging enabled
    pub debug: bool,
    /// Log directory
    pub log_path: PathBuf,
    /// Cache directory
    pub cache_path: PathBuf,
    /// Redis cache in use
    pub redis_enabled: bool,
    /// Self-update enabled
    pub auto_update_enabled: bool,
    /// Hours between update checks
    pub update_check_interval: i64,
    /// Days backups are kept
    pub backup_retention: i64,
    /// Pre-release versions are eligible updates
    pub allow_prerelease: bool,
    /// Configuration passed validation
    pub validation_passed: bool,
}

/// Last.fm credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LastFmConfig {
    /// Account whose listening history seeds discovery
    #[serde(default = "default_lastfm_username")]
    pub username: String,

    /// Last.fm API key
    #[serde(default = "default_lastfm_api_key")]
    pub api_key: String,
}

fn default_lastfm_username() -> String {
    PLACEHOLDER_LASTFM_USERNAME.to_string()
}

fn default_lastfm_api_key() -> String {
    PLACEHOLDER_LASTFM_API_KEY.to_string()
}

impl Default for LastFmConfig {
    fn default() -> Self {
        Self {
            username: default_lastfm_username(),
            api_key: default_lastfm_api_key(),
        }
    }
}

/// Lidarr configuration, required when `MUSIC_SERVICE=lidarr`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LidarrConfig {
    /// `X-Api-Key` for the Lidarr API
    #[serde(default = "default_lidarr_api_key")]
    pub api_key: String,

    /// Base URL of the Lidarr server
    #[serde(default = "default_lidarr_endpoint")]
    pub endpoint: String,

    /// Library root new artists are added under
    #[serde(default = "default_lidarr_root_folder")]
    pub root_folder: PathBuf,

    /// Quality profile assigned to added artists
    #[serde(default = "default_profile_id")]
    pub quality_profile_id: u32,

    /// Metadata profile assigned to added artists
    #[serde(default = "default_profile_id")]
    pub metadata_profile_id: u32,

    /// Lidarr monitor mode for added artists (all, future, missing, ...)
    #[serde(default = "default_lidarr_monitor_mode")]
    pub monitor_mode: String,

    /// Trigger a search right after adding an album
    #[serde(default = "default_true")]
    pub search_on_add: bool,

    /// Folder naming template for albums
    #[serde(default = "default_lidarr_album_folder_format")]
    pub album_folder_format: String,

    /// Attempts per request before giving up
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Seconds between retries
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u32,
}

impl LidarrConfig {
    /// Pause between retries
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(u64::from(self.retry_delay_secs))
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_secs))
    }
}

fn default_lidarr_api_key() -> String {
    PLACEHOLDER_LIDARR_API_KEY.to_string()
}

fn default_lidarr_endpoint() -> String {
    DEFAULT_LIDARR_ENDPOINT.to_string()
}

fn default_lidarr_root_folder() -> PathBuf {
    PathBuf::from("/music")
}

const fn default_profile_id() -> u32 {
    1
}

fn default_lidarr_monitor_mode() -> String {
    "all".to_string()
}

fn default_lidarr_album_folder_format() -> String {
    "{Artist Name} - {Album Title}".to_string()
}

const fn default_true() -> bool {
    true
}

const fn default_max_retries() -> u32 {
    3
}

const fn default_retry_delay_secs() -> u32 {
    5
}

const fn default_timeout_secs() -> u32 {
    60
}

impl Default for LidarrConfig {
    fn default() -> Self {
        Self {
            api_key: default_lidarr_api_key(),
            endpoint: default_lidarr_endpoint(),
            root_folder: default_lidarr_root_folder(),
            quality_profile_id: default_profile_id(),
            metadata_profile_id: default_profile_id(),
            monitor_mode: default_lidarr_monitor_mode(),
            search_on_add: default_true(),
            album_folder_format: default_lidarr_album_folder_format(),
            max_retries: default_max_retries(),
            retry_delay_secs: default_retry_delay_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Headphones configuration, required when `MUSIC_SERVICE=headphones`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HeadphonesConfig {
    /// API key for the Headphones server
    #[serde(default = "default_headphones_api_key")]
    pub api_key: String,

    /// Base URL of the Headphones server
    #[serde(default = "default_headphones_endpoint")]
    pub endpoint: String,

    /// Attempts per request before giving up
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Seconds between retries
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u32,
}

impl HeadphonesConfig {
    /// Pause between retries
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(u64::from(self.retry_delay_secs))
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_secs))
    }
}

fn default_headphones_api_key() -> String {
    PLACEHOLDER_HEADPHONES_API_KEY.to_string()
}

fn default_headphones_endpoint() -> String {
    DEFAULT_HEADPHONES_ENDPOINT.to_string()
}

impl Default for HeadphonesConfig {
    fn default() -> Self {
        Self {
            api_key: default_headphones_api_key(),
            endpoint: default_headphones_endpoint(),
            max_retries: default_max_retries(),
            retry_delay_secs: default_retry_delay_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Discovery tuning parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DiscoveryConfig {
    /// Listening-history window in months (1-12)
    #[serde(default = "default_recent_months")]
    pub recent_months: i64,

    /// Minimum scrobbles for an artist to seed discovery (1-1000)
    #[serde(default = "default_min_plays")]
    pub min_plays: i64,

    /// Minimum Last.fm similarity score (0.0-1.0)
    #[serde(default = "default_similar_match_min")]
    pub similar_match_min: f64,

    /// Similar artists fetched per seed artist (1-100)
    #[serde(default = "default_max_similar_per_artist")]
    pub max_similar_per_artist: i64,

    /// Popular albums considered per artist (1-50)
    #[serde(default = "default_max_popular_albums")]
    pub max_popular_albums: i64,

    /// Cache entry lifetime in hours (1-168)
    #[serde(default = "default_cache_ttl_hours")]
    pub cache_ttl_hours: i64,
}

impl DiscoveryConfig {
    /// Zero when the configured hours are not positive
    pub fn cache_ttl(&self) -> Duration {
        hours(self.cache_ttl_hours)
    }
}

const fn default_recent_months() -> i64 {
    3
}

const fn default_min_plays() -> i64 {
    20
}

const fn default_similar_match_min() -> f64 {
    0.46
}

const fn default_max_similar_per_artist() -> i64 {
    20
}

const fn default_max_popular_albums() -> i64 {
    5
}

const fn default_cache_ttl_hours() -> i64 {
    24
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            recent_months: default_recent_months(),
            min_plays: default_min_plays(),
            similar_match_min: default_similar_match_min(),
            max_similar_per_artist: default_max_similar_per_artist(),
            max_popular_albums: default_max_popular_albums(),
            cache_ttl_hours: default_cache_ttl_hours(),
        }
    }
}

/// Delays applied between outbound API calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RateLimitConfig {
    /// Seconds between Last.fm requests
    #[serde(default = "default_request_limit_secs")]
    pub request_limit_secs: f64,

    /// Seconds between MusicBrainz requests
    #[serde(default = "default_musicbrainz_delay_secs")]
    pub musicbrainz_delay_secs: f64,
}

impl RateLimitConfig {
    /// Last.fm pacing; negative or non-finite values collapse to zero
    pub fn request_limit(&self) -> Duration {
        Duration::try_from_secs_f64(self.request_limit_secs).unwrap_or(Duration::ZERO)
    }

    /// MusicBrainz pacing; negative or non-finite values collapse to zero
    pub fn musicbrainz_delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.musicbrainz_delay_secs).unwrap_or(Duration::ZERO)
    }
}

const fn default_request_limit_secs() -> f64 {
    0.2
}

const fn default_musicbrainz_delay_secs() -> f64 {
    1.1
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            request_limit_secs: default_request_limit_secs(),
            musicbrainz_delay_secs: default_musicbrainz_delay_secs(),
        }
    }
}

/// Process toggles and container paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RuntimeConfig {
    /// Verbose diagnostics (`DEBUG`)
    #[serde(default)]
    pub debug: bool,

    /// Log directory (`LOG_PATH`)
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,

    /// Cache directory (`CACHE_PATH`)
    #[serde(default = "default_cache_path")]
    pub cache_path: PathBuf,

    /// Container operation mode (`DISCOVERY_MODE`)
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Report what would be added without touching the backend
    #[serde(default)]
    pub dry_run: bool,
}

fn default_log_path() -> PathBuf {
    PathBuf::from("/app/logs")
}

fn default_cache_path() -> PathBuf {
    PathBuf::from("/app/cache")
}

fn default_mode() -> String {
    "sync".to_string()
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            debug: false,
            log_path: default_log_path(),
            cache_path: default_cache_path(),
            mode: default_mode(),
            dry_run: false,
        }
    }
}

/// Album filtering rules consumed by discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FilteringConfig {
    /// MusicBrainz secondary types never added
    #[serde(default = "default_excluded_secondary_types")]
    pub excluded_secondary_types: BTreeSet<String>,
}

impl FilteringConfig {
    /// Whether a MusicBrainz secondary type disqualifies an album
    pub fn is_excluded(&self, secondary_type: &str) -> bool {
        self.excluded_secondary_types.contains(secondary_type)
    }
}

fn default_excluded_secondary_types() -> BTreeSet<String> {
    EXCLUDED_SECONDARY_TYPES
        .iter()
        .map(|t| (*t).to_string())
        .collect()
}

impl Default for FilteringConfig {
    fn default() -> Self {
        Self {
            excluded_secondary_types: default_excluded_secondary_types(),
        }
    }
}

/// Redis cache backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RedisConfig {
    /// Cache discovery lookups in Redis
    #[serde(default)]
    pub enabled: bool,

    /// Redis server host name
    #[serde(default = "default_redis_host")]
    pub host: String,

    /// Redis server port
    #[serde(default = "default_redis_port")]
    pub port: u16,

    /// Redis database index
    #[serde(default)]
    pub db: u32,
}

impl RedisConfig {
    /// Connection URL in `redis://host:port/db` form
    pub fn url(&self) -> String {
        format!("redis://{}:{}/{}", self.host, self.port, self.db)
    }
}

fn default_redis_host() -> String {
    "redis".to_string()
}

const fn default_redis_port() -> u16 {
    6379
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            host: default_redis_host(),
            port: default_redis_port(),
            db: 0,
        }
    }
}

/// Self-update policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AutoUpdateConfig {
    /// Check for and install new releases
    #[serde(default)]
    pub enabled: bool,

    /// Hours between release checks (1-168)
    #[serde(default = "default_check_interval_hours")]
    pub check_interval_hours: i64,

    /// Days backups are kept before pruning (1-30)
    #[serde(default = "default_backup_retention_days")]
    pub backup_retention_days: i64,

    /// Pre-releases are eligible updates
    #[serde(default)]
    pub allow_prerelease: bool,

    /// Personal access token for higher GitHub rate limits; empty when unset
    #[serde(default)]
    pub github_token: String,
}

impl AutoUpdateConfig {
    /// Zero when the configured hours are not positive
    pub fn check_interval(&self) -> Duration {
        hours(self.check_interval_hours)
    }

    /// Token to authenticate GitHub requests with, if any
    pub fn github_token(&self) -> Option<&str> {
        Some(self.github_token.as_str()).filter(|t| !t.is_empty())
    }

    /// `owner/name` of the repository releases are fetched from
    pub fn repository(&self) -> String {
        format!("{GITHUB_REPO_OWNER}/{GITHUB_REPO_NAME}")
    }
}

fn hours(count: i64) -> Duration {
    u64::try_from(count).map_or(Duration::ZERO, |h| Duration::from_secs(h.saturating_mul(3600)))
}

const fn default_check_interval_hours() -> i64 {
    24
}

const fn default_backup_retention_days() -> i64 {
    7
}

impl Default for AutoUpdateConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            check_interval_hours: default_check_interval_hours(),
            backup_retention_days: default_backup_retention_days(),
            allow_prerelease: false,
            github_token: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_music_service_from_string() {
        assert_eq!(MusicService::from("lidarr".to_string()), MusicService::Lidarr);
        assert_eq!(
            MusicService::from("headphones".to_string()),
            MusicService::Headphones
        );
        assert_eq!(
            MusicService::from("Lidarr".to_string()),
            MusicService::Unknown("Lidarr".to_string())
        );
        assert!(!MusicService::Unknown("spotify".to_string()).is_known());
    }

    #[test]
    fn test_music_service_serializes_as_plain_string() {
        let json = serde_json::to_string(&MusicService::Headphones).unwrap();
        assert_eq!(json, "\"headphones\"");
        let unknown: MusicService = serde_json::from_str("\"spotify\"").unwrap();
        assert_eq!(unknown.as_str(), "spotify");
    }

    #[test]
    fn test_service_accessors_follow_selection() {
        let mut config = Config::default();
        assert_eq!(config.service_endpoint(), Some(DEFAULT_LIDARR_ENDPOINT));

        config.music_service = MusicService::Headphones;
        assert_eq!(config.service_api_key(), Some(PLACEHOLDER_HEADPHONES_API_KEY));

        config.music_service = MusicService::Unknown("spotify".to_string());
        assert_eq!(config.service_endpoint(), None);
    }

    #[test]
    fn test_container_info_snapshot() {
        let mut config = Config::default();
        config.runtime.dry_run = true;
        config.redis.enabled = true;

        let info = config.container_info();
        assert_eq!(info.music_service, "lidarr");
        assert_eq!(info.container_mode, "sync");
        assert!(info.dry_run);
        assert!(!info.debug);
        assert_eq!(info.log_path, PathBuf::from("/app/logs"));
        assert!(info.redis_enabled);
        assert_eq!(info.update_check_interval, 24);
        assert_eq!(info.backup_retention, 7);
        assert!(info.validation_passed);
    }

    #[test]
    fn test_container_info_json_keys() {
        let value = serde_json::to_value(Config::default().container_info()).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        for key in [
            "music_service",
            "container_mode",
            "dry_run",
            "debug",
            "log_path",
            "cache_path",
            "redis_enabled",
            "auto_update_enabled",
            "update_check_interval",
            "backup_retention",
            "allow_prerelease",
            "validation_passed",
        ] {
            assert!(keys.contains(&key), "missing key {key}");
        }
    }

    #[test]
    fn test_derived_accessors() {
        let config = Config::default();
        assert_eq!(config.redis.url(), "redis://redis:6379/0");
        assert_eq!(config.lidarr.timeout(), Duration::from_secs(60));
        assert_eq!(config.discovery.cache_ttl(), Duration::from_secs(24 * 3600));
        assert_eq!(config.rate_limit.request_limit(), Duration::from_millis(200));
        assert_eq!(config.auto_update.github_token(), None);
        assert_eq!(config.auto_update.repository(), "MrRobotoGit/DiscoveryLastFM");
    }

    #[test]
    fn test_negative_delay_collapses_to_zero() {
        let rate_limit = RateLimitConfig {
            request_limit_secs: -1.0,
            musicbrainz_delay_secs: f64::NAN,
        };
        assert_eq!(rate_limit.request_limit(), Duration::ZERO);
        assert_eq!(rate_limit.musicbrainz_delay(), Duration::ZERO);
    }

    #[test]
    fn test_negative_hours_collapse_to_zero() {
        let mut config = Config::default();
        config.discovery.cache_ttl_hours = -3;
        config.auto_update.check_interval_hours = 0;
        assert_eq!(config.discovery.cache_ttl(), Duration::ZERO);
        assert_eq!(config.auto_update.check_interval(), Duration::ZERO);
    }

    #[test]
    fn test_excluded_secondary_types() {
        let filtering = FilteringConfig::default();
        assert_eq!(filtering.excluded_secondary_types.len(), 12);
        assert!(filtering.is_excluded("Live"));
        assert!(filtering.is_excluded("Mixtape/Street"));
        assert!(!filtering.is_excluded("Album"));
    }
}
