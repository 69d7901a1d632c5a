//! Common test utilities for integration tests

#![allow(dead_code)]

use discovery_lastfm::SETTINGS;

/// Realistic environment of an operator who filled in every required field
pub const VALID_ENV: &[(&str, &str)] = &[
    ("MUSIC_SERVICE", "lidarr"),
    ("LASTFM_USERNAME", "rj"),
    ("LASTFM_API_KEY", "0123456789abcdef0123456789abcdef"),
    ("LIDARR_API_KEY", "fedcba98765432100123456789abcdef"),
    ("LIDARR_ENDPOINT", "http://192.168.1.10:8686"),
    ("RECENT_MONTHS", "3"),
    ("MIN_PLAYS", "20"),
    ("SIMILAR_MATCH_MIN", "0.46"),
];

/// Assignment for every declared setting: `overrides` are set, the rest unset.
///
/// Feed to `temp_env::with_vars` so the host environment cannot leak in.
pub fn isolated_env<'a>(overrides: &[(&'a str, &'a str)]) -> Vec<(&'a str, Option<&'a str>)> {
    SETTINGS
        .iter()
        .map(|setting| {
            let value = overrides
                .iter()
                .rev()
                .find(|(name, _)| *name == setting.env)
                .map(|(_, value)| *value);
            (setting.env, value)
        })
        .collect()
}

/// `VALID_ENV` with some entries replaced or added
pub fn valid_env_with<'a>(changes: &[(&'a str, &'a str)]) -> Vec<(&'a str, &'a str)> {
    let mut vars: Vec<(&str, &str)> = VALID_ENV.to_vec();
    vars.extend_from_slice(changes);
    vars
}
