//! Palette-level operations: create, select, delete, and regenerate.

use tint_color::convert::normalize_hex;
use tint_color::limits::{clamp_count, clamp_curve};
use tint_color::{color_name, random_color, RampKind};
use tint_common::{PaletteId, StoreError};
use tracing::info;

use crate::model::{default_step_names, unique_name, Palette};

use super::PaletteStore;

impl PaletteStore {
    /// Create a lightness palette and select it.
    ///
    /// Without a base color a random one is picked. The palette is named
    /// after the base color's hue, with a counter appended on collision.
    pub fn create_palette(&mut self, base_hex: Option<&str>) -> Result<PaletteId, StoreError> {
        let hex = match base_hex {
            Some(hex) => normalize_hex(hex)?,
            None => random_color(&mut rand::thread_rng()),
        };
        let name = self.palette_name_for(&hex, "")?;
        let palette = Palette::lightness(name, &hex, &self.defaults)?;
        Ok(self.insert_palette(palette, "create_palette"))
    }

    /// Create an alpha palette of `base_hex` and select it.
    pub fn create_alpha_palette(&mut self, base_hex: &str) -> Result<PaletteId, StoreError> {
        let hex = normalize_hex(base_hex)?;
        let name = self.palette_name_for(&hex, " alpha")?;
        let palette = Palette::alpha(name, &hex, &self.defaults)?;
        Ok(self.insert_palette(palette, "create_alpha_palette"))
    }

    /// Select a palette, or clear the selection with `None`.
    pub fn select_palette(&mut self, id: Option<&PaletteId>) -> Result<(), StoreError> {
        let mut next = self.draft();
        if let Some(id) = id {
            if next.palette(id).is_none() {
                return Err(StoreError::PaletteNotFound(id.to_string()));
            }
        }
        next.selected_palette_id = id.cloned();
        self.commit(next, "select_palette");
        Ok(())
    }

    /// Remove a palette. If it was selected, selection moves to the first
    /// remaining palette, or to none.
    pub fn delete_palette(&mut self, id: &PaletteId) -> Result<(), StoreError> {
        let mut next = self.draft();
        let before = next.palettes.len();
        next.palettes.retain(|p| &p.id != id);
        if next.palettes.len() == before {
            return Err(StoreError::PaletteNotFound(id.to_string()));
        }
        if next.selected_palette_id.as_ref() == Some(id) {
            next.selected_palette_id = next.palettes.first().map(|p| p.id.clone());
        }
        info!(palette = %id, "deleted palette");
        self.commit(next, "delete_palette");
        Ok(())
    }

    pub fn update_palette_name(&mut self, id: &PaletteId, name: &str) -> Result<(), StoreError> {
        self.edit_palette(id, "update_palette_name", |palette, _| {
            palette.name = name.to_string();
            Ok(())
        })
    }

    /// Change the base color and regenerate every mode.
    pub fn update_palette_base_color(&mut self, id: &PaletteId, hex: &str) -> Result<(), StoreError> {
        let hex = normalize_hex(hex)?;
        self.edit_palette(id, "update_palette_base_color", |palette, _| {
            palette.base_color = hex;
            palette.regenerate()?;
            Ok(())
        })
    }

    /// Change the step count (clamped to the supported range) and regenerate.
    /// Step names are reset to the default hundreds.
    pub fn update_palette_color_count(&mut self, id: &PaletteId, count: usize) -> Result<(), StoreError> {
        let count = clamp_count(count);
        self.edit_palette(id, "update_palette_color_count", |palette, _| {
            palette.color_count = count;
            palette.step_names = default_step_names(count);
            palette.regenerate()?;
            Ok(())
        })
    }

    /// Change the lightness curve (clamped to `[-1, 1]`) and regenerate.
    pub fn update_lightness_curve(&mut self, id: &PaletteId, curve: f64) -> Result<(), StoreError> {
        let curve = clamp_curve(curve);
        self.edit_palette(id, "update_lightness_curve", |palette, _| {
            palette.lightness_curve = curve;
            palette.regenerate()?;
            Ok(())
        })
    }

    pub fn update_light_bg(&mut self, id: &PaletteId, hex: &str) -> Result<(), StoreError> {
        let hex = normalize_hex(hex)?;
        self.edit_palette(id, "update_light_bg", |palette, _| {
            palette.light_bg = hex;
            Ok(())
        })
    }

    pub fn update_dark_bg(&mut self, id: &PaletteId, hex: &str) -> Result<(), StoreError> {
        let hex = normalize_hex(hex)?;
        self.edit_palette(id, "update_dark_bg", |palette, _| {
            palette.dark_bg = hex;
            Ok(())
        })
    }

    /// Append palettes and select the first of them.
    pub fn import_palettes(&mut self, palettes: Vec<Palette>) {
        let mut next = self.draft();
        if let Some(first) = palettes.first() {
            next.selected_palette_id = Some(first.id.clone());
        }
        info!(count = palettes.len(), "imported palettes");
        next.palettes.extend(palettes);
        self.commit(next, "import_palettes");
    }

    /// Replace every palette and select the first new one, or none.
    pub fn replace_all_palettes(&mut self, palettes: Vec<Palette>) {
        let mut next = self.draft();
        next.selected_palette_id = palettes.first().map(|p| p.id.clone());
        info!(count = palettes.len(), "replaced all palettes");
        next.palettes = palettes;
        self.commit(next, "replace_all_palettes");
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn palette_name_for(&self, hex: &str, suffix: &str) -> Result<String, StoreError> {
        let base = format!("{}{suffix}", color_name(hex)?);
        Ok(unique_name(
            &base,
            self.state.palettes.iter().map(|p| p.name.as_str()),
        ))
    }

    fn insert_palette(&mut self, palette: Palette, op: &'static str) -> PaletteId {
        let id = palette.id.clone();
        let mut next = self.draft();
        info!(
            palette = %id,
            name = %palette.name,
            base = %palette.base_color,
            alpha = palette.kind == RampKind::Alpha,
            "created palette"
        );
        next.palettes.push(palette);
        next.selected_palette_id = Some(id.clone());
        self.commit(next, op);
        id
    }
}
