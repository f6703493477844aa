//! JSON file backend
//!
//! The whole store is a single pretty-printed JSON object keyed by username.
//! A missing file reads as an empty store; writes go to a sibling temp file
//! and are renamed over the old one so a crash never leaves half a document.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::profile::{merge, Profile};
use crate::{validate_username, ProfileStore, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct Record {
    high_score: u32,
    level: u32,
}

type Document = BTreeMap<String, Record>;

/// Profile store persisted as one JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn read_document(&self) -> Result<Document, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "profile store missing, starting empty");
                return Ok(Document::new());
            }
            Err(err) => return Err(self.io_error(err)),
        };
        if raw.trim().is_empty() {
            return Ok(Document::new());
        }
        serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
            path: self.path.display().to_string(),
            source,
        })
    }

    fn write_document(&self, doc: &Document) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let json = serde_json::to_string_pretty(doc).map_err(|source| StoreError::Malformed {
            path: self.path.display().to_string(),
            source,
        })?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), players = doc.len(), "profile store written");
        Ok(())
    }
}

impl ProfileStore for JsonFileStore {
    fn load(&self, username: &str) -> Result<Profile, StoreError> {
        let username = validate_username(username)?;
        let doc = self.read_document()?;
        Ok(match doc.get(username) {
            Some(record) => Profile {
                username: username.to_string(),
                high_score: record.high_score,
                level: record.level,
            },
            None => Profile::new_player(username),
        })
    }

    fn save(&mut self, username: &str, score: u32, level: u32) -> Result<Profile, StoreError> {
        let username = validate_username(username)?;
        let mut doc = self.read_document()?;
        let existing = doc.get(username).map(|r| Profile {
            username: username.to_string(),
            high_score: r.high_score,
            level: r.level,
        });
        let merged = merge(existing.as_ref(), username, score, level);
        doc.insert(
            username.to_string(),
            Record {
                high_score: merged.high_score,
                level: merged.level,
            },
        );
        self.write_document(&doc)?;
        info!(
            username,
            high_score = merged.high_score,
            level = merged.level,
            "profile saved"
        );
        Ok(merged)
    }
}
