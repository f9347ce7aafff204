//! Per-step edits inside one mode, plus step renaming.

use tint_color::{gamut_map_oklch, ColorRecord, RampKind};
use tint_common::{ModeId, PaletteId, StoreError};

use crate::model::Palette;

use super::PaletteStore;

impl PaletteStore {
    /// Replace one step with a hex color. L/C/h are re-derived from the hex;
    /// the step's alpha is kept.
    ///
    /// Alpha ramps hold a single color, so there the hex is applied to every
    /// step of the mode and each step keeps its own alpha.
    pub fn update_mode_color(
        &mut self,
        palette_id: &PaletteId,
        mode_id: &ModeId,
        index: usize,
        hex: &str,
    ) -> Result<(), StoreError> {
        let record = ColorRecord::from_hex(hex)?;
        self.edit_palette(palette_id, "update_mode_color", |palette, _| {
            let kind = palette.kind;
            let colors = mode_colors_mut(palette, mode_id)?;
            let len = colors.len();
            if index >= len {
                return Err(StoreError::StepOutOfRange { index, len });
            }
            match kind {
                RampKind::Lightness => {
                    let slot = &mut colors[index];
                    *slot = record.with_alpha(slot.alpha);
                }
                RampKind::Alpha => {
                    for slot in colors.iter_mut() {
                        *slot = record.clone().with_alpha(slot.alpha);
                    }
                }
            }
            Ok(())
        })
    }

    /// Move one step to lightness `l` (clamped to `[0, 1]`), keeping its hue
    /// and reducing chroma as needed to stay in sRGB. Lightness palettes only.
    pub fn update_color_lightness(
        &mut self,
        palette_id: &PaletteId,
        mode_id: &ModeId,
        index: usize,
        l: f64,
    ) -> Result<(), StoreError> {
        let l = if l.is_nan() { 0.0 } else { l.clamp(0.0, 1.0) };
        self.edit_palette(palette_id, "update_color_lightness", |palette, _| {
            require_kind(palette, RampKind::Lightness, "update_color_lightness")?;
            let slot = step_mut(palette, mode_id, index)?;
            let mapped = gamut_map_oklch(l, slot.c, slot.h);
            *slot = ColorRecord::from_oklch(mapped).with_alpha(slot.alpha);
            Ok(())
        })
    }

    /// Set one step's opacity, clamped to `[0, 1]` and rounded to two decimals.
    /// Only alpha palettes vary opacity.
    pub fn update_color_alpha(
        &mut self,
        palette_id: &PaletteId,
        mode_id: &ModeId,
        index: usize,
        alpha: f64,
    ) -> Result<(), StoreError> {
        let alpha = if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) };
        let alpha = (alpha * 100.0).round() / 100.0;
        self.edit_palette(palette_id, "update_color_alpha", |palette, _| {
            require_kind(palette, RampKind::Alpha, "update_color_alpha")?;
            step_mut(palette, mode_id, index)?.alpha = alpha;
            Ok(())
        })
    }

    /// Rename step `index` across all modes of the palette.
    pub fn update_step_name(&mut self, palette_id: &PaletteId, index: usize, name: &str) -> Result<(), StoreError> {
        self.edit_palette(palette_id, "update_step_name", |palette, _| {
            let len = palette.color_count;
            if index >= len {
                return Err(StoreError::StepOutOfRange { index, len });
            }
            if palette.step_names.len() < len {
                let names: Vec<String> = (0..len).map(|i| palette.step_name(i)).collect();
                palette.step_names = names;
            }
            palette.step_names[index] = name.to_string();
            Ok(())
        })
    }
}

fn require_kind(palette: &Palette, kind: RampKind, operation: &str) -> Result<(), StoreError> {
    if palette.kind == kind {
        Ok(())
    } else {
        Err(StoreError::KindMismatch {
            operation: operation.to_string(),
            kind: palette.kind.as_str().to_string(),
        })
    }
}

fn mode_colors_mut<'a>(
    palette: &'a mut Palette,
    mode_id: &ModeId,
) -> Result<&'a mut Vec<ColorRecord>, StoreError> {
    palette
        .mode_mut(mode_id)
        .map(|mode| &mut mode.colors)
        .ok_or_else(|| StoreError::ModeNotFound(mode_id.to_string()))
}

fn step_mut<'a>(
    palette: &'a mut Palette,
    mode_id: &ModeId,
    index: usize,
) -> Result<&'a mut ColorRecord, StoreError> {
    let colors = mode_colors_mut(palette, mode_id)?;
    let len = colors.len();
    colors
        .get_mut(index)
        .ok_or(StoreError::StepOutOfRange { index, len })
}
