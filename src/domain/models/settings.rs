//! Environment variable schema.
//!
//! Every environment variable the application reads is declared once in
//! [`SETTINGS`], together with the configuration key it overrides and the
//! type its raw value is coerced to. Loading walks this table uniformly.

use serde::Serialize;
use std::fmt;

/// Semantic type of a setting's raw environment value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// Taken verbatim
    Text,
    /// Filesystem path, taken verbatim
    Path,
    /// Signed 64-bit integer; range checks happen during validation
    Integer,
    /// Unsigned 32-bit integer
    Count,
    /// TCP port
    Port,
    /// 64-bit float
    Decimal,
    /// Case-insensitive `true`; any other value is false
    Flag,
}

impl SettingKind {
    /// Human description used in coercion errors
    pub const fn expected(self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Path => "path",
            Self::Integer => "integer",
            Self::Count => "non-negative integer",
            Self::Port => "port number (0-65535)",
            Self::Decimal => "number",
            Self::Flag => "boolean",
        }
    }
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expected())
    }
}

/// A coerced environment value, ready to be merged into the configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// Verbatim string or path
    Text(String),
    /// Signed integer
    Integer(i64),
    /// Unsigned integer
    Count(u32),
    /// TCP port
    Port(u16),
    /// Float
    Decimal(f64),
    /// Boolean
    Flag(bool),
}

/// Raw value that could not be coerced to its declared kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercionError {
    /// Kind the value was declared as
    pub kind: SettingKind,
    /// Offending raw value
    pub raw: String,
}

/// Declaration of one environment-driven setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingDescriptor {
    /// Environment variable name
    pub env: &'static str,
    /// Dotted path of the field in [`Config`](super::config::Config)
    pub key: &'static str,
    /// Type the raw value is coerced to
    pub kind: SettingKind,
    /// Value must never be displayed or logged in clear
    pub secret: bool,
}

impl SettingDescriptor {
    const fn new(env: &'static str, key: &'static str, kind: SettingKind) -> Self {
        Self {
            env,
            key,
            kind,
            secret: false,
        }
    }

    const fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    /// Look up a descriptor by environment variable name
    pub fn by_env(env: &str) -> Option<&'static Self> {
        SETTINGS.iter().find(|s| s.env == env)
    }

    /// Coerce a raw environment value to this setting's kind.
    ///
    /// Text and paths are kept verbatim (an empty value stays empty) and
    /// numeric values are trimmed first. Flags never fail: only a
    /// case-insensitive `true` is true.
    pub fn coerce(&self, raw: &str) -> Result<SettingValue, CoercionError> {
        let fail = || CoercionError {
            kind: self.kind,
            raw: raw.to_string(),
        };
        let trimmed = raw.trim();

        match self.kind {
            SettingKind::Text | SettingKind::Path => Ok(SettingValue::Text(raw.to_string())),
            SettingKind::Integer => trimmed
                .parse()
                .map(SettingValue::Integer)
                .map_err(|_| fail()),
            SettingKind::Count => trimmed.parse().map(SettingValue::Count).map_err(|_| fail()),
            SettingKind::Port => trimmed.parse().map(SettingValue::Port).map_err(|_| fail()),
            SettingKind::Decimal => trimmed
                .parse()
                .map(SettingValue::Decimal)
                .map_err(|_| fail()),
            SettingKind::Flag => Ok(SettingValue::Flag(raw.eq_ignore_ascii_case("true"))),
        }
    }
}

use SettingKind::{Count, Decimal, Flag, Integer, Path, Port, Text};

/// Every environment variable read at startup
pub const SETTINGS: &[SettingDescriptor] = &[
    SettingDescriptor::new("MUSIC_SERVICE", "music_service", Text),
    // Last.fm
    SettingDescriptor::new("LASTFM_USERNAME", "lastfm.username", Text),
    SettingDescriptor::new("LASTFM_API_KEY", "lastfm.api_key", Text).secret(),
    // Lidarr
    SettingDescriptor::new("LIDARR_API_KEY", "lidarr.api_key", Text).secret(),
    SettingDescriptor::new("LIDARR_ENDPOINT", "lidarr.endpoint", Text),
    SettingDescriptor::new("LIDARR_ROOT_FOLDER", "lidarr.root_folder", Path),
    SettingDescriptor::new("LIDARR_QUALITY_PROFILE_ID", "lidarr.quality_profile_id", Count),
    SettingDescriptor::new("LIDARR_METADATA_PROFILE_ID", "lidarr.metadata_profile_id", Count),
    SettingDescriptor::new("LIDARR_MONITOR_MODE", "lidarr.monitor_mode", Text),
    SettingDescriptor::new("LIDARR_SEARCH_ON_ADD", "lidarr.search_on_add", Flag),
    SettingDescriptor::new("LIDARR_ALBUM_FOLDER_FORMAT", "lidarr.album_folder_format", Text),
    SettingDescriptor::new("LIDARR_MAX_RETRIES", "lidarr.max_retries", Count),
    SettingDescriptor::new("LIDARR_RETRY_DELAY", "lidarr.retry_delay_secs", Count),
    SettingDescriptor::new("LIDARR_TIMEOUT", "lidarr.timeout_secs", Count),
    // Headphones
    SettingDescriptor::new("HP_API_KEY", "headphones.api_key", Text).secret(),
    SettingDescriptor::new("HP_ENDPOINT", "headphones.endpoint", Text),
    SettingDescriptor::new("HP_MAX_RETRIES", "headphones.max_retries", Count),
    SettingDescriptor::new("HP_RETRY_DELAY", "headphones.retry_delay_secs", Count),
    SettingDescriptor::new("HP_TIMEOUT", "headphones.timeout_secs", Count),
    // Discovery
    SettingDescriptor::new("RECENT_MONTHS", "discovery.recent_months", Integer),
    SettingDescriptor::new("MIN_PLAYS", "discovery.min_plays", Integer),
    SettingDescriptor::new("SIMILAR_MATCH_MIN", "discovery.similar_match_min", Decimal),
    SettingDescriptor::new("MAX_SIMILAR_PER_ART", "discovery.max_similar_per_artist", Integer),
    SettingDescriptor::new("MAX_POP_ALBUMS", "discovery.max_popular_albums", Integer),
    SettingDescriptor::new("CACHE_TTL_HOURS", "discovery.cache_ttl_hours", Integer),
    // Rate limiting
    SettingDescriptor::new("REQUEST_LIMIT", "rate_limit.request_limit_secs", Decimal),
    SettingDescriptor::new("MBZ_DELAY", "rate_limit.musicbrainz_delay_secs", Decimal),
    // Runtime
    SettingDescriptor::new("DEBUG", "runtime.debug", Flag),
    SettingDescriptor::new("LOG_PATH", "runtime.log_path", Path),
    SettingDescriptor::new("CACHE_PATH", "runtime.cache_path", Path),
    SettingDescriptor::new("DISCOVERY_MODE", "runtime.mode", Text),
    SettingDescriptor::new("DRY_RUN", "runtime.dry_run", Flag),
    // Redis
    SettingDescriptor::new("ENABLE_REDIS_CACHE", "redis.enabled", Flag),
    SettingDescriptor::new("REDIS_HOST", "redis.host", Text),
    SettingDescriptor::new("REDIS_PORT", "redis.port", Port),
    SettingDescriptor::new("REDIS_DB", "redis.db", Count),
    // Auto-update
    SettingDescriptor::new("AUTO_UPDATE_ENABLED", "auto_update.enabled", Flag),
    SettingDescriptor::new(
        "UPDATE_CHECK_INTERVAL_HOURS",
        "auto_update.check_interval_hours",
        Integer,
    ),
    SettingDescriptor::new(
        "BACKUP_RETENTION_DAYS",
        "auto_update.backup_retention_days",
        Integer,
    ),
    SettingDescriptor::new("ALLOW_PRERELEASE_UPDATES", "auto_update.allow_prerelease", Flag),
    SettingDescriptor::new("GITHUB_TOKEN", "auto_update.github_token", Text).secret(),
];

/// Mask a secret for display, keeping at most its last four characters.
pub fn mask_secret(value: &str) -> String {
    let count = value.chars().count();
    if count == 0 {
        return String::new();
    }
    if count <= 8 {
        return "****".to_string();
    }
    let tail: String = value.chars().skip(count - 4).collect();
    format!("****{tail}")
}
