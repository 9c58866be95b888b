//! Session handling
//!
//! The real deployment authenticates through external OAuth and a cookie
//! session; the core only ever asks "who is signed in here". This module
//! keeps that answer in a small JSON file under the data directory:
//! sign-in writes it, termination removes it.

use std::path::PathBuf;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::storage::{StoreError, StoreResult};

/// File-backed session record
#[derive(Debug, Clone)]
pub struct Session {
    path: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
struct SessionRecord {
    open_id: String,
    signed_in_at: i64,
}

impl Session {
    /// Create a session handle from configuration
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.session_path(),
        }
    }

    /// Create a session handle over a specific file (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Check whether a session is currently recorded
    pub fn is_signed_in(&self) -> bool {
        self.path.exists()
    }

    /// Get the signed-in OAuth id, if any
    pub fn current(&self) -> StoreResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|source| StoreError::ReadError {
                path: self.path.clone(),
                source,
            })?;

        let record: SessionRecord =
            serde_json::from_str(&content).map_err(|e| StoreError::InvalidFormat {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        Ok(Some(record.open_id))
    }

    /// Record a sign-in for the given OAuth id
    pub fn sign_in(&self, open_id: &str) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::CreateDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let record = SessionRecord {
            open_id: open_id.to_string(),
            signed_in_at: Utc::now().timestamp_millis(),
        };

        let content = serde_json::to_string_pretty(&record).map_err(|e| {
            StoreError::InvalidFormat {
                path: self.path.clone(),
                details: e.to_string(),
            }
        })?;

        std::fs::write(&self.path, content).map_err(|source| StoreError::WriteError {
            path: self.path.clone(),
            source,
        })?;

        Ok(())
    }

    /// Terminate the session
    ///
    /// Terminating an absent session is a no-op, not an error.
    pub fn terminate(&self) -> StoreResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::WriteError {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
