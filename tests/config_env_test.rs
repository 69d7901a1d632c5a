//! Loading and validating configuration from the process environment.

mod common;

use common::{isolated_env, valid_env_with, VALID_ENV};
use discovery_lastfm::{Config, ConfigError, ConfigLoader, MusicService, ValidationIssue};
use std::path::PathBuf;

fn load_with(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
    temp_env::with_vars(isolated_env(vars), ConfigLoader::load)
}

fn issue_fields(config: &Config) -> Vec<&'static str> {
    match ConfigLoader::validate(config) {
        Ok(()) => vec![],
        Err(err) => err.issues().iter().map(ValidationIssue::field).collect(),
    }
}

#[test]
fn test_unset_environment_yields_documented_defaults() {
    let config = load_with(&[]).expect("defaults should load");

    assert_eq!(config.music_service, MusicService::Lidarr);
    assert_eq!(config.lastfm.username, "your_lastfm_username");
    assert_eq!(config.lastfm.api_key, "your_lastfm_api_key");
    assert_eq!(config.lidarr.api_key, "your_lidarr_api_key");
    assert_eq!(config.lidarr.endpoint, "http://lidarr:8686");
    assert_eq!(config.lidarr.root_folder, PathBuf::from("/music"));
    assert_eq!(config.lidarr.quality_profile_id, 1);
    assert_eq!(config.lidarr.metadata_profile_id, 1);
    assert_eq!(config.lidarr.monitor_mode, "all");
    assert!(config.lidarr.search_on_add);
    assert_eq!(config.lidarr.max_retries, 3);
    assert_eq!(config.lidarr.retry_delay_secs, 5);
    assert_eq!(config.lidarr.timeout_secs, 60);
    assert_eq!(config.headphones.api_key, "your_headphones_api_key");
    assert_eq!(config.headphones.endpoint, "http://headphones:8181");
    assert_eq!(config.discovery.recent_months, 3);
    assert_eq!(config.discovery.min_plays, 20);
    assert!((config.discovery.similar_match_min - 0.46).abs() < f64::EPSILON);
    assert_eq!(config.discovery.max_similar_per_artist, 20);
    assert_eq!(config.discovery.max_popular_albums, 5);
    assert_eq!(config.discovery.cache_ttl_hours, 24);
    assert!((config.rate_limit.request_limit_secs - 0.2).abs() < f64::EPSILON);
    assert!((config.rate_limit.musicbrainz_delay_secs - 1.1).abs() < f64::EPSILON);
    assert!(!config.runtime.debug);
    assert_eq!(config.runtime.log_path, PathBuf::from("/app/logs"));
    assert_eq!(config.runtime.cache_path, PathBuf::from("/app/cache"));
    assert_eq!(config.runtime.mode, "sync");
    assert!(!config.runtime.dry_run);
    assert!(!config.redis.enabled);
    assert_eq!(config.redis.host, "redis");
    assert_eq!(config.redis.port, 6379);
    assert_eq!(config.redis.db, 0);
    assert!(!config.auto_update.enabled);
    assert_eq!(config.auto_update.check_interval_hours, 24);
    assert_eq!(config.auto_update.backup_retention_days, 7);
    assert!(!config.auto_update.allow_prerelease);
    assert_eq!(config.auto_update.github_token, "");
    assert_eq!(config, Config::default());
}

#[test]
fn test_realistic_environment_validates() {
    let config = load_with(VALID_ENV).unwrap();
    assert!(ConfigLoader::validate(&config).is_ok());
}

#[test]
fn test_missing_credentials_are_all_reported() {
    let config = load_with(&[("MUSIC_SERVICE", "lidarr")]).unwrap();
    let fields = issue_fields(&config);
    assert!(fields.len() >= 3);
    assert!(fields.contains(&"LASTFM_USERNAME"));
    assert!(fields.contains(&"LASTFM_API_KEY"));
    assert!(fields.contains(&"LIDARR_API_KEY"));
}

#[test]
fn test_placeholder_credential_is_rejected() {
    let config = load_with(&valid_env_with(&[("LASTFM_USERNAME", "your_lastfm_username")])).unwrap();
    let err = ConfigLoader::validate(&config).unwrap_err();
    assert_eq!(err.issues().len(), 1);
    assert!(err.to_string().contains("LASTFM_USERNAME"));
}

#[test]
fn test_unknown_service_is_named() {
    let config = load_with(&valid_env_with(&[("MUSIC_SERVICE", "spotify")])).unwrap();
    let err = ConfigLoader::validate(&config).unwrap_err();
    assert!(err
        .to_string()
        .contains("Unknown MUSIC_SERVICE: spotify (must be 'lidarr' or 'headphones')"));
}

#[test]
fn test_headphones_selection() {
    let config = load_with(&valid_env_with(&[
        ("MUSIC_SERVICE", "headphones"),
        ("HP_API_KEY", "0011223344556677"),
        ("HP_ENDPOINT", "http://nas.local:8181"),
    ]))
    .unwrap();
    assert_eq!(config.service_endpoint(), Some("http://nas.local:8181"));
    assert!(ConfigLoader::validate(&config).is_ok());
}

#[test]
fn test_out_of_range_values_are_batched() {
    let config = load_with(&valid_env_with(&[
        ("RECENT_MONTHS", "0"),
        ("MIN_PLAYS", "1001"),
        ("SIMILAR_MATCH_MIN", "1.01"),
        ("MAX_SIMILAR_PER_ART", "101"),
        ("MAX_POP_ALBUMS", "51"),
        ("CACHE_TTL_HOURS", "169"),
        ("UPDATE_CHECK_INTERVAL_HOURS", "0"),
        ("BACKUP_RETENTION_DAYS", "31"),
    ]))
    .unwrap();

    assert_eq!(
        issue_fields(&config),
        vec![
            "RECENT_MONTHS",
            "MIN_PLAYS",
            "SIMILAR_MATCH_MIN",
            "MAX_SIMILAR_PER_ART",
            "MAX_POP_ALBUMS",
            "CACHE_TTL_HOURS",
            "UPDATE_CHECK_INTERVAL_HOURS",
            "BACKUP_RETENTION_DAYS",
        ]
    );
}

#[test]
fn test_malformed_value_stops_loading() {
    let err = load_with(&valid_env_with(&[("CACHE_TTL_HOURS", "a day")])).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MalformedValue {
            name: "CACHE_TTL_HOURS",
            ..
        }
    ));

    let err = load_with(&[("REDIS_PORT", "-1")]).unwrap_err();
    assert!(err.to_string().contains("REDIS_PORT"));
}

#[test]
fn test_negative_ranged_values_are_reported_together() {
    let config = load_with(&valid_env_with(&[("MIN_PLAYS", "-5"), ("RECENT_MONTHS", "0")])).unwrap();
    let err = ConfigLoader::validate(&config).unwrap_err();
    assert_eq!(err.issues().len(), 2);
    assert_eq!(
        err.to_string(),
        "Configuration validation failed:\n\
         - RECENT_MONTHS must be between 1 and 12\n\
         - MIN_PLAYS must be between 1 and 1000"
    );
}

#[test]
fn test_compose_style_flags_do_not_stop_startup() {
    let config = load_with(&valid_env_with(&[("DEBUG", "1"), ("DRY_RUN", "yes")])).unwrap();
    assert!(!config.runtime.debug);
    assert!(!config.runtime.dry_run);
    assert!(ConfigLoader::validate(&config).is_ok());
}

#[test]
fn test_validation_is_idempotent() {
    let config = load_with(&[("MUSIC_SERVICE", "spotify"), ("MIN_PLAYS", "0")]).unwrap();
    let first = ConfigLoader::validate(&config).unwrap_err().to_string();
    let second = ConfigLoader::validate(&config).unwrap_err().to_string();
    assert_eq!(first, second);
}

#[test]
fn test_container_info_reflects_environment() {
    let config = load_with(&valid_env_with(&[
        ("DISCOVERY_MODE", "cron"),
        ("DRY_RUN", "true"),
        ("DEBUG", "True"),
        ("ENABLE_REDIS_CACHE", "true"),
        ("AUTO_UPDATE_ENABLED", "true"),
        ("UPDATE_CHECK_INTERVAL_HOURS", "12"),
        ("BACKUP_RETENTION_DAYS", "14"),
        ("ALLOW_PRERELEASE_UPDATES", "true"),
        ("CACHE_PATH", "/data/cache"),
    ]))
    .unwrap();

    let info = config.container_info();
    assert_eq!(info.container_mode, "cron");
    assert!(info.dry_run);
    assert!(info.debug);
    assert!(info.redis_enabled);
    assert!(info.auto_update_enabled);
    assert_eq!(info.update_check_interval, 12);
    assert_eq!(info.backup_retention, 14);
    assert!(info.allow_prerelease);
    assert_eq!(info.cache_path, PathBuf::from("/data/cache"));
    assert!(info.validation_passed);
}
