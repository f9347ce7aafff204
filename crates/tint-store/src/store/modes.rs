//! Mode operations: activate, add, delete, rename.

use tint_common::{ModeId, PaletteId, StoreError};

use crate::model::{unique_name, Mode};

use super::PaletteStore;

impl PaletteStore {
    pub fn set_active_mode(&mut self, palette_id: &PaletteId, mode_id: &ModeId) -> Result<(), StoreError> {
        self.edit_palette(palette_id, "set_active_mode", |palette, _| {
            if palette.mode(mode_id).is_none() {
                return Err(StoreError::ModeNotFound(mode_id.to_string()));
            }
            palette.active_mode_id = Some(mode_id.clone());
            Ok(())
        })
    }

    /// Add a mode generated with the palette's own curve and make it active.
    ///
    /// `name` defaults to the store's new-mode name; either way a counter is
    /// appended if another mode already uses it.
    pub fn add_mode(&mut self, palette_id: &PaletteId, name: Option<&str>) -> Result<ModeId, StoreError> {
        let mut added = None;
        self.edit_palette(palette_id, "add_mode", |palette, defaults| {
            let base = name.unwrap_or(&defaults.new_mode_name);
            let name = unique_name(base, palette.modes.iter().map(|m| m.name.as_str()));
            let mode = Mode::new(name, palette.fresh_mode_colors()?);
            palette.active_mode_id = Some(mode.id.clone());
            added = Some(mode.id.clone());
            palette.modes.push(mode);
            Ok(())
        })?;
        added.ok_or_else(|| StoreError::PaletteNotFound(palette_id.to_string()))
    }

    /// Remove a mode. The last remaining mode cannot be deleted; if the
    /// active mode is removed the first remaining mode becomes active.
    ///
    /// Returns `false` (and changes nothing) when only one mode is left.
    pub fn delete_mode(&mut self, palette_id: &PaletteId, mode_id: &ModeId) -> Result<bool, StoreError> {
        let palette = self
            .state
            .palette(palette_id)
            .ok_or_else(|| StoreError::PaletteNotFound(palette_id.to_string()))?;
        if palette.mode(mode_id).is_none() {
            return Err(StoreError::ModeNotFound(mode_id.to_string()));
        }
        if palette.modes.len() <= 1 {
            return Ok(false);
        }
        self.edit_palette(palette_id, "delete_mode", |palette, _| {
            palette.modes.retain(|m| &m.id != mode_id);
            if palette.active_mode_id.as_ref() == Some(mode_id) {
                palette.active_mode_id = palette.modes.first().map(|m| m.id.clone());
            }
            Ok(())
        })?;
        Ok(true)
    }

    pub fn update_mode_name(
        &mut self,
        palette_id: &PaletteId,
        mode_id: &ModeId,
        name: &str,
    ) -> Result<(), StoreError> {
        self.edit_palette(palette_id, "update_mode_name", |palette, _| {
            let mode = palette
                .mode_mut(mode_id)
                .ok_or_else(|| StoreError::ModeNotFound(mode_id.to_string()))?;
            mode.name = name.to_string();
            Ok(())
        })
    }
}
