use std::collections::HashMap;

use crate::profile::{merge, Profile};
use crate::{validate_username, ProfileStore, StoreError};

/// In-process profile store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    profiles: HashMap<String, Profile>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self, username: &str) -> Result<Profile, StoreError> {
        let username = validate_username(username)?;
        Ok(self
            .profiles
            .get(username)
            .cloned()
            .unwrap_or_else(|| Profile::new_player(username)))
    }

    fn save(&mut self, username: &str, score: u32, level: u32) -> Result<Profile, StoreError> {
        let username = validate_username(username)?;
        let merged = merge(self.profiles.get(username), username, score, level);
        self.profiles.insert(username.to_string(), merged.clone());
        Ok(merged)
    }
}
