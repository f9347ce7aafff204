//! Palette generation defaults.

use serde::{Deserialize, Serialize};

/// Defaults applied to newly created palettes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Steps per ramp (valid range: 2-20).
    pub color_count: usize,
    /// Lightness distribution skew (valid range: -1.0-1.0, 0 = linear).
    pub lightness_curve: f64,
    /// Background used for light-mode contrast checks.
    pub light_bg: String,
    /// Background used for dark-mode contrast checks.
    pub dark_bg: String,
    /// Base color of the palette created when the store starts empty.
    pub default_base: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            color_count: 11,
            lightness_curve: 0.3,
            light_bg: "#ffffff".into(),
            dark_bg: "#1a1a1a".into(),
            default_base: "#6366f1".into(),
        }
    }
}
