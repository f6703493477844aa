//! Player profile storage.
//!
//! The engine never persists anything itself. The game loop hands
//! `(username, score, level)` to a [`ProfileStore`] when the player saves or the
//! game ends, and asks the store for the starting level when a session begins.
//!
//! # Merge Rule
//!
//! Saving is a monotone merge with whatever is already stored:
//!
//! - `high_score = max(existing, new)`
//! - `level = min(max(existing, new), MAX_LEVEL)`
//!
//! so a profile never regresses and never records a level the table can't load.
//! Unknown usernames load as `high_score = 0, level = 1`.
//!
//! # Backends
//!
//! - [`MemoryStore`]: `HashMap` backed, for tests and `SNAKE_PROFILE_PATH=""`
//! - [`JsonFileStore`]: one JSON document keyed by username

pub mod file;
pub mod memory;
pub mod profile;

pub use tui_snake_types as types;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use profile::{merge, Profile};

use thiserror::Error;

/// Errors surfaced by a profile backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("profile store I/O failed at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("profile store at {path} is not valid JSON: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load/save contract of the storage collaborator
pub trait ProfileStore {
    /// Stored profile, or the defaults `(0, 1)` for an unknown username.
    fn load(&self, username: &str) -> Result<Profile, StoreError>;

    /// Merge `score`/`level` into the stored profile and return what was persisted.
    fn save(&mut self, username: &str, score: u32, level: u32) -> Result<Profile, StoreError>;
}

pub(crate) fn validate_username(username: &str) -> Result<&str, StoreError> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(StoreError::EmptyUsername);
    }
    Ok(trimmed)
}
