//! Runtime configuration read from environment variables.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::INITIAL_DELAY_MS;

pub const DEFAULT_PROFILE_PATH: &str = "snake_profiles.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Skip the username prompt when set.
    pub username: Option<String>,
    /// JSON profile store. `None` keeps profiles in memory for this run only.
    pub profile_path: Option<String>,
    /// Fixed RNG seed for reproducible games.
    pub seed: Option<u32>,
    /// Tracing output file. Logging is off when unset.
    pub log_path: Option<String>,
    pub start_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            username: None,
            profile_path: Some(DEFAULT_PROFILE_PATH.to_string()),
            seed: None,
            log_path: None,
            start_delay_ms: INITIAL_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// Load config from environment variables.
    ///
    /// - `SNAKE_USERNAME`
    /// - `SNAKE_PROFILE_PATH` (empty string disables the file store)
    /// - `SNAKE_SEED`
    /// - `SNAKE_LOG_PATH`
    /// - `SNAKE_START_DELAY_MS`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let profile_path = match lookup("SNAKE_PROFILE_PATH") {
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => Some(raw.trim().to_string()),
            None => Some(DEFAULT_PROFILE_PATH.to_string()),
        };

        let seed = lookup("SNAKE_SEED").and_then(|s| s.trim().parse().ok());

        let start_delay_ms = lookup("SNAKE_START_DELAY_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(INITIAL_DELAY_MS);

        Self {
            username: non_empty("SNAKE_USERNAME"),
            profile_path,
            seed,
            log_path: non_empty("SNAKE_LOG_PATH"),
            start_delay_ms,
        }
    }

    /// Configured seed, or one derived from the wall clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}
