//! Glue between one game session and the profile store.
//!
//! Kept separate from the terminal loop so the load and save rules can be
//! tested without a TTY.

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::core::GameEngine;
use crate::store::{JsonFileStore, MemoryStore, Profile, ProfileStore, StoreError};
use crate::types::GameOverReason;

/// How a session left the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Player asked to save and exit
    Saved,
    GameOver(GameOverReason),
    /// Quit key
    Quit,
}

impl SessionEnd {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionEnd::Saved => "saved",
            SessionEnd::GameOver(_) => "game over",
            SessionEnd::Quit => "quit",
        }
    }
}

/// Store selected by configuration
pub fn open_store(config: &AppConfig) -> Box<dyn ProfileStore> {
    match &config.profile_path {
        Some(path) => Box::new(JsonFileStore::new(path)),
        None => Box::new(MemoryStore::new()),
    }
}

/// Load the player's profile, falling back to a fresh one if the store fails.
pub fn load_profile(store: &dyn ProfileStore, username: &str) -> Profile {
    match store.load(username) {
        Ok(profile) => {
            info!(username, high_score = profile.high_score, level = profile.level, "profile loaded");
            profile
        }
        Err(err) => {
            warn!(username, error = %err, "profile load failed, starting fresh");
            Profile::new_player(username)
        }
    }
}

/// Persist the engine's final score and level.
pub fn finish_session(
    store: &mut dyn ProfileStore,
    username: &str,
    engine: &GameEngine,
    end: SessionEnd,
) -> Result<Profile, StoreError> {
    info!(
        username,
        end = end.as_str(),
        score = engine.score(),
        level = engine.level(),
        ticks = engine.ticks(),
        "session finished"
    );
    store.save(username, engine.score(), engine.level())
}
