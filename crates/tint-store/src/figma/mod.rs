//! Figma variable collection JSON.
//!
//! Export writes one color variable per palette step, named
//! `<palette>/<step>`, with one value per mode. Import groups variables by
//! the folder before the first `/` and rebuilds a palette per folder.
//! Unreadable color values degrade to mid-gray instead of failing the import.

mod export;
mod import;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

pub use export::export_to_figma_json;
pub use import::{import_from_figma_json, FigmaImport};

/// Collection name used when the imported JSON has none.
pub const IMPORTED_COLLECTION_NAME: &str = "Imported Collection";

/// Folder for variables whose name has no `/`.
pub const DEFAULT_GROUP: &str = "Default";

/// Hex used for colors that could not be read.
pub const FALLBACK_HEX: &str = "#808080";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct FigmaCollection {
    pub name: String,
    pub modes: Vec<FigmaMode>,
    pub variables: Vec<FigmaVariable>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct FigmaMode {
    pub name: String,
    #[serde(rename = "modeId")]
    pub mode_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct FigmaVariable {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub values: std::collections::BTreeMap<String, FigmaColor>,
}

/// Channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct FigmaColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// Lowercase, with each whitespace run replaced by `-`.
pub fn mode_id_for(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
        } else {
            out.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    out
}
