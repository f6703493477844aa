use serde::{Deserialize, Serialize};

use crate::types::MAX_LEVEL;

/// Persisted per-player record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub high_score: u32,
    pub level: u32,
}

impl Profile {
    /// Profile of a player that has never saved
    pub fn new_player(username: &str) -> Self {
        Self {
            username: username.to_string(),
            high_score: 0,
            level: 1,
        }
    }

    /// Level to start a session at, always inside `1..=MAX_LEVEL`
    pub fn start_level(&self) -> u32 {
        self.level.clamp(1, MAX_LEVEL)
    }
}

/// Monotone merge of a finished or saved session into the stored profile.
///
/// The level never decreases and never exceeds `MAX_LEVEL`; the high score never decreases.
pub fn merge(existing: Option<&Profile>, username: &str, score: u32, level: u32) -> Profile {
    match existing {
        Some(stored) => Profile {
            username: username.to_string(),
            high_score: stored.high_score.max(score),
            level: stored.level.max(level).min(MAX_LEVEL),
        },
        None => Profile {
            username: username.to_string(),
            high_score: score,
            level: level.min(MAX_LEVEL),
        },
    }
}
