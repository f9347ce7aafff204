//! Palette store persistence settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Palette data file. Defaults to `<data dir>/tint/palettes.json`.
    pub data_file: Option<PathBuf>,
    /// Persist after every store mutation.
    pub autosave: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            autosave: true,
        }
    }
}
