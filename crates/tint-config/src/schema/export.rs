//! Figma export settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Variable collection name written into exported files.
    pub collection_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            collection_name: "Color Palette".into(),
        }
    }
}
