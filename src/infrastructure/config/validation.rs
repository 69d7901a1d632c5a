//! Semantic validation of a loaded [`Config`].
//!
//! Every rule runs; problems are collected and reported together so an
//! operator can fix the whole environment in one pass.

use std::fmt::Debug;
use std::ops::RangeInclusive;

use thiserror::Error;
use tracing::{debug, warn};

use super::loader::ConfigError;
use crate::domain::models::config::{
    Config, MusicService, DEFAULT_HEADPHONES_ENDPOINT, DEFAULT_LIDARR_ENDPOINT,
    PLACEHOLDER_HEADPHONES_API_KEY, PLACEHOLDER_LASTFM_API_KEY, PLACEHOLDER_LASTFM_USERNAME,
    PLACEHOLDER_LIDARR_API_KEY,
};

/// A single violated configuration constraint
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Last.fm credential empty or left at its placeholder
    #[error("{field} is required")]
    MissingCredential {
        /// Environment variable
        field: &'static str,
    },

    /// Credential of the selected backend empty or left at its placeholder
    #[error("{field} is required when using {service}")]
    MissingServiceCredential {
        /// Environment variable
        field: &'static str,
        /// Backend display name
        service: &'static str,
    },

    /// Backend endpoint empty or left at its default
    #[error("{field} should be configured")]
    UnconfiguredEndpoint {
        /// Environment variable
        field: &'static str,
    },

    /// `MUSIC_SERVICE` names neither backend
    #[error("Unknown MUSIC_SERVICE: {0} (must be 'lidarr' or 'headphones')")]
    UnknownService(String),

    /// Numeric setting outside its inclusive bounds
    #[error("{field} must be between {min} and {max}{unit}")]
    OutOfRange {
        /// Environment variable
        field: &'static str,
        /// Value found
        value: String,
        /// Lower bound
        min: String,
        /// Upper bound
        max: String,
        /// Suffix appended to the message
        unit: &'static str,
    },
}

impl ValidationIssue {
    /// Environment variable the issue is about
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingCredential { field }
            | Self::MissingServiceCredential { field, .. }
            | Self::UnconfiguredEndpoint { field }
            | Self::OutOfRange { field, .. } => *field,
            Self::UnknownService(_) => "MUSIC_SERVICE",
        }
    }
}

/// Validate a loaded configuration.
///
/// Returns [`ConfigError::ValidationFailed`] carrying every violated rule.
pub fn validate_configuration(config: &Config) -> Result<(), ConfigError> {
    let issues = collect_issues(config);
    if issues.is_empty() {
        debug!("configuration validation passed");
        return Ok(());
    }

    warn!(issues = issues.len(), "configuration validation failed");
    Err(ConfigError::ValidationFailed(issues))
}

/// Run every rule and return the violations in a stable order
pub fn collect_issues(config: &Config) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if is_unset(&config.lastfm.username, PLACEHOLDER_LASTFM_USERNAME) {
        issues.push(ValidationIssue::MissingCredential {
            field: "LASTFM_USERNAME",
        });
    }
    if is_unset(&config.lastfm.api_key, PLACEHOLDER_LASTFM_API_KEY) {
        issues.push(ValidationIssue::MissingCredential {
            field: "LASTFM_API_KEY",
        });
    }

    check_service(config, &mut issues);

    let discovery = &config.discovery;
    check_range(&mut issues, "RECENT_MONTHS", discovery.recent_months, 1..=12, "");
    check_range(&mut issues, "MIN_PLAYS", discovery.min_plays, 1..=1000, "");
    check_range(
        &mut issues,
        "SIMILAR_MATCH_MIN",
        discovery.similar_match_min,
        0.0..=1.0,
        "",
    );
    check_range(
        &mut issues,
        "MAX_SIMILAR_PER_ART",
        discovery.max_similar_per_artist,
        1..=100,
        "",
    );
    check_range(&mut issues, "MAX_POP_ALBUMS", discovery.max_popular_albums, 1..=50, "");
    check_range(
        &mut issues,
        "CACHE_TTL_HOURS",
        discovery.cache_ttl_hours,
        1..=168,
        " (1 week)",
    );

    let update = &config.auto_update;
    check_range(
        &mut issues,
        "UPDATE_CHECK_INTERVAL_HOURS",
        update.check_interval_hours,
        1..=168,
        " hours",
    );
    check_range(
        &mut issues,
        "BACKUP_RETENTION_DAYS",
        update.backup_retention_days,
        1..=30,
        " days",
    );

    issues
}

fn check_service(config: &Config, issues: &mut Vec<ValidationIssue>) {
    match &config.music_service {
        MusicService::Lidarr => {
            if is_unset(&config.lidarr.api_key, PLACEHOLDER_LIDARR_API_KEY) {
                issues.push(ValidationIssue::MissingServiceCredential {
                    field: "LIDARR_API_KEY",
                    service: "Lidarr",
                });
            }
            if is_unset(&config.lidarr.endpoint, DEFAULT_LIDARR_ENDPOINT) {
                issues.push(ValidationIssue::UnconfiguredEndpoint {
                    field: "LIDARR_ENDPOINT",
                });
            }
        }
        MusicService::Headphones => {
            if is_unset(&config.headphones.api_key, PLACEHOLDER_HEADPHONES_API_KEY) {
                issues.push(ValidationIssue::MissingServiceCredential {
                    field: "HP_API_KEY",
                    service: "Headphones",
                });
            }
            if is_unset(&config.headphones.endpoint, DEFAULT_HEADPHONES_ENDPOINT) {
                issues.push(ValidationIssue::UnconfiguredEndpoint {
                    field: "HP_ENDPOINT",
                });
            }
        }
        MusicService::Unknown(raw) => issues.push(ValidationIssue::UnknownService(raw.clone())),
    }
}

/// Empty or still holding the shipped placeholder
fn is_unset(value: &str, placeholder: &str) -> bool {
    value.is_empty() || value == placeholder
}

// NaN is never contained in a range, so it is reported like any other miss.
fn check_range<T: PartialOrd + Debug>(
    issues: &mut Vec<ValidationIssue>,
    field: &'static str,
    value: T,
    range: RangeInclusive<T>,
    unit: &'static str,
) {
    if !range.contains(&value) {
        issues.push(ValidationIssue::OutOfRange {
            field,
            value: format!("{value:?}"),
            min: format!("{:?}", range.start()),
            max: format!("{:?}", range.end()),
            unit,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.lastfm.username = "rj".to_string();
        config.lastfm.api_key = "0123456789abcdef0123456789abcdef".to_string();
        config.lidarr.api_key = "fedcba9876543210".to_string();
        config.lidarr.endpoint = "http://192.168.1.10:8686".to_string();
        config
    }

    fn fields(issues: &[ValidationIssue]) -> Vec<&'static str> {
        issues.iter().map(ValidationIssue::field).collect()
    }

    #[test]
    fn test_valid_config_has_no_issues() {
        let config = valid_config();
        assert!(collect_issues(&config).is_empty());
        assert!(validate_configuration(&config).is_ok());
    }

    #[test]
    fn test_default_config_reports_every_placeholder() {
        let issues = collect_issues(&Config::default());
        assert_eq!(
            fields(&issues),
            vec![
                "LASTFM_USERNAME",
                "LASTFM_API_KEY",
                "LIDARR_API_KEY",
                "LIDARR_ENDPOINT"
            ]
        );
    }

    #[test]
    fn test_empty_credential_is_missing() {
        let mut config = valid_config();
        config.lastfm.username = String::new();
        let issues = collect_issues(&config);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].to_string(), "LASTFM_USERNAME is required");
    }

    #[test]
    fn test_lidarr_messages() {
        let mut config = valid_config();
        config.lidarr.api_key = PLACEHOLDER_LIDARR_API_KEY.to_string();
        config.lidarr.endpoint = DEFAULT_LIDARR_ENDPOINT.to_string();
        let messages: Vec<String> = collect_issues(&config)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            messages,
            vec![
                "LIDARR_API_KEY is required when using Lidarr",
                "LIDARR_ENDPOINT should be configured"
            ]
        );
    }

    #[test]
    fn test_headphones_requires_its_own_credentials() {
        let mut config = valid_config();
        config.music_service = MusicService::Headphones;
        assert_eq!(
            fields(&collect_issues(&config)),
            vec!["HP_API_KEY", "HP_ENDPOINT"]
        );

        config.headphones.api_key = "hp-key-0123456789".to_string();
        config.headphones.endpoint = "http://nas:8181".to_string();
        assert!(collect_issues(&config).is_empty());
    }

    #[test]
    fn test_unselected_service_is_not_checked() {
        let mut config = valid_config();
        config.headphones.api_key = String::new();
        assert!(collect_issues(&config).is_empty());
    }

    #[test]
    fn test_unknown_service() {
        let mut config = valid_config();
        config.music_service = MusicService::Unknown("spotify".to_string());
        let issues = collect_issues(&config);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].to_string(),
            "Unknown MUSIC_SERVICE: spotify (must be 'lidarr' or 'headphones')"
        );
        assert_eq!(issues[0].field(), "MUSIC_SERVICE");
    }

    #[test]
    fn test_range_messages() {
        let mut config = valid_config();
        config.discovery.recent_months = 13;
        config.discovery.cache_ttl_hours = 0;
        config.auto_update.backup_retention_days = 31;
        config.discovery.similar_match_min = 1.5;
        let messages: Vec<String> = collect_issues(&config)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            messages,
            vec![
                "RECENT_MONTHS must be between 1 and 12",
                "SIMILAR_MATCH_MIN must be between 0.0 and 1.0",
                "CACHE_TTL_HOURS must be between 1 and 168 (1 week)",
                "BACKUP_RETENTION_DAYS must be between 1 and 30 days"
            ]
        );
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let mut config = valid_config();
        config.discovery.recent_months = 1;
        config.discovery.min_plays = 1000;
        config.discovery.similar_match_min = 0.0;
        config.discovery.max_similar_per_artist = 100;
        config.discovery.max_popular_albums = 1;
        config.discovery.cache_ttl_hours = 168;
        config.auto_update.check_interval_hours = 1;
        config.auto_update.backup_retention_days = 30;
        assert!(collect_issues(&config).is_empty());

        config.discovery.similar_match_min = 1.0;
        config.discovery.min_plays = 1;
        assert!(collect_issues(&config).is_empty());
    }

    #[test]
    fn test_nan_similarity_is_rejected() {
        let mut config = valid_config();
        config.discovery.similar_match_min = f64::NAN;
        let issues = collect_issues(&config);
        assert_eq!(fields(&issues), vec!["SIMILAR_MATCH_MIN"]);
        match &issues[0] {
            ValidationIssue::OutOfRange { value, .. } => assert_eq!(value, "NaN"),
            other => panic!("Expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_failure_aggregates_all_messages() {
        let err = validate_configuration(&Config::default()).unwrap_err();
        assert_eq!(err.issues().len(), 4);
        let rendered = err.to_string();
        assert!(rendered.starts_with("Configuration validation failed:\n- "));
        assert!(rendered.contains("\n- LASTFM_API_KEY is required"));
        assert!(rendered.contains("\n- LIDARR_ENDPOINT should be configured"));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let mut config = valid_config();
        config.discovery.max_popular_albums = 0;
        assert_eq!(collect_issues(&config), collect_issues(&config));
    }
}
