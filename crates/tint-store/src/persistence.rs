//! Saving and loading store snapshots.
//!
//! [`FileStorage`] keeps the document as pretty-printed JSON on disk and
//! writes atomically (write to `.tmp`, then rename). [`MemoryStorage`] keeps
//! the last saved snapshot in memory.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tint_common::StoreError;
use tracing::{debug, info, warn};

use crate::model::StoreState;

/// A place the store can save snapshots to and load them back from.
pub trait Storage: Send + Sync {
    /// The saved document, or `None` if nothing has been saved yet.
    fn load(&self) -> Result<Option<StoreState>, StoreError>;

    fn save(&self, state: &StoreState) -> Result<(), StoreError>;
}

// =============================================================================
// FILE STORAGE
// =============================================================================

#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    /// Missing fields in the saved JSON take their defaults.
    fn load(&self) -> Result<Option<StoreState>, StoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no saved palettes");
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            StoreError::Storage(format!("failed to read {}: {e}", self.path.display()))
        })?;
        let state: StoreState = serde_json::from_str(&content).map_err(|e| {
            StoreError::Storage(format!("failed to parse {}: {e}", self.path.display()))
        })?;
        info!(
            "loaded {} palettes from {}",
            state.palettes.len(),
            self.path.display()
        );
        Ok(Some(state))
    }

    fn save(&self, state: &StoreState) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| StoreError::Storage(format!("failed to serialize palettes: {e}")))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Storage(format!(
                    "failed to create data directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, &json).map_err(|e| {
            StoreError::Storage(format!("failed to write {}: {e}", tmp_path.display()))
        })?;

        if let Err(e) = std::fs::rename(&tmp_path, &self.path) {
            warn!("atomic rename failed ({}), falling back to direct write", e);
            std::fs::write(&self.path, &json).map_err(|e2| {
                StoreError::Storage(format!("failed to write {}: {e2}", self.path.display()))
            })?;
        }

        debug!(path = %self.path.display(), "palettes saved to disk");
        Ok(())
    }
}

// =============================================================================
// MEMORY STORAGE
// =============================================================================

/// In-memory storage. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<StoreState>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated with `state`.
    pub fn with_state(state: StoreState) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(state))),
        }
    }

    /// The last saved snapshot.
    pub fn snapshot(&self) -> Option<StoreState> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<StoreState>, StoreError> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| StoreError::Storage("memory storage lock poisoned".into()))?;
        Ok(slot.clone())
    }

    fn save(&self, state: &StoreState) -> Result<(), StoreError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| StoreError::Storage("memory storage lock poisoned".into()))?;
        *slot = Some(state.clone());
        Ok(())
    }
}
