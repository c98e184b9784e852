//! Last-result persistence
//!
//! The most recent `AssessmentResult` is the only state kept across
//! invocations: one pretty-printed JSON blob under the platform data
//! directory, overwritten on each completed assessment and removed when a
//! retake is requested.

use crate::models::AssessmentResult;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// File name of the persisted result blob
pub const RESULT_FILE_NAME: &str = "last_assessment.json";

#[derive(Debug, Error)]
pub enum StoreError {
    /// No persisted result exists yet; handled by pointing the user back
    /// to the start of the assessment, never surfaced as a failure
    #[error("no saved assessment result")]
    NotFound,

    #[error("could not access result store: {0}")]
    Io(#[from] std::io::Error),

    #[error("saved result is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Filesystem store for the most recent assessment result
pub struct ResultStore {
    root: PathBuf,
}

impl ResultStore {
    /// Store rooted at the platform data directory
    /// (`~/.local/share/readyscope` on Linux)
    pub fn open_default() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .map(|h| h.join(".local/share"))
                .unwrap_or_else(|| PathBuf::from("."))
        });
        Self::open(base.join("readyscope"))
    }

    /// Store rooted at an explicit directory (used by tests)
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the persisted result blob
    pub fn result_path(&self) -> PathBuf {
        self.root.join(RESULT_FILE_NAME)
    }

    /// Whether a persisted result exists
    pub fn exists(&self) -> bool {
        self.result_path().exists()
    }

    /// Overwrite the persisted result with a fresh one
    pub fn save(&self, result: &AssessmentResult) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.root)?;
        let path = self.result_path();
        let json = serde_json::to_string_pretty(result)?;
        std::fs::write(&path, json)?;
        debug!("Saved assessment result to {}", path.display());
        Ok(())
    }

    /// Load the persisted result, if any
    pub fn load(&self) -> Result<AssessmentResult, StoreError> {
        let path = self.result_path();
        if !path.exists() {
            return Err(StoreError::NotFound);
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Remove the persisted result. Removing a result that does not exist
    /// is not an error.
    pub fn clear(&self) -> Result<bool, StoreError> {
        let path = self.result_path();
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&path)?;
        debug!("Removed {}", path.display());
        Ok(true)
    }
}
