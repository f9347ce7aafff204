//! Store-level data model: palettes, modes, and the session snapshot.

use serde::{Deserialize, Serialize};
use tint_color::{ColorRecord, Ramp, RampKind};
use tint_common::{ColorError, ModeId, PaletteId};

/// Defaults applied to newly created palettes and to a fresh store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreDefaults {
    pub color_count: usize,
    pub lightness_curve: f64,
    pub light_bg: String,
    pub dark_bg: String,
    pub collection_name: String,
    pub light_mode_name: String,
    pub dark_mode_name: String,
    pub new_mode_name: String,
}

impl Default for StoreDefaults {
    fn default() -> Self {
        Self {
            color_count: 11,
            lightness_curve: 0.3,
            light_bg: "#ffffff".into(),
            dark_bg: "#1a1a1a".into(),
            collection_name: "Color Palette".into(),
            light_mode_name: "Light".into(),
            dark_mode_name: "Dark".into(),
            new_mode_name: "New Mode".into(),
        }
    }
}

/// UI theme preference carried with the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

/// Which background palette previews are drawn against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundPreview {
    #[default]
    Light,
    Dark,
}

/// A named set of colors for one appearance (e.g. "Light", "Dark").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mode {
    pub id: ModeId,
    pub name: String,
    pub colors: Vec<ColorRecord>,
}

impl Mode {
    pub fn new(name: impl Into<String>, colors: Vec<ColorRecord>) -> Self {
        Self {
            id: ModeId::new(),
            name: name.into(),
            colors,
        }
    }
}

/// One palette: a base color, its generation parameters, and its modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub id: PaletteId,
    pub name: String,
    pub base_color: String,
    pub color_count: usize,
    pub lightness_curve: f64,
    pub light_bg: String,
    pub dark_bg: String,
    pub base_color_index: usize,
    #[serde(default)]
    pub kind: RampKind,
    #[serde(default)]
    pub step_names: Vec<String>,
    pub modes: Vec<Mode>,
    pub active_mode_id: Option<ModeId>,
}

impl Palette {
    /// A lightness palette with a "Light" mode at the configured curve and a
    /// "Dark" mode at `-|curve|`.
    pub fn lightness(
        name: impl Into<String>,
        base_hex: &str,
        defaults: &StoreDefaults,
    ) -> Result<Self, ColorError> {
        let count = tint_color::limits::clamp_count(defaults.color_count);
        let curve = tint_color::limits::clamp_curve(defaults.lightness_curve);
        let light = Ramp::lightness(base_hex, count, curve)?;
        let dark = Ramp::lightness(base_hex, count, -curve.abs())?;
        let modes = vec![
            Mode::new(defaults.light_mode_name.clone(), light.colors),
            Mode::new(defaults.dark_mode_name.clone(), dark.colors),
        ];
        Ok(Self::assemble(
            name,
            base_hex,
            count,
            curve,
            defaults,
            RampKind::Lightness,
            light.base_index,
            modes,
        ))
    }

    /// An alpha palette: one mode of the base color at rising opacity.
    pub fn alpha(
        name: impl Into<String>,
        base_hex: &str,
        defaults: &StoreDefaults,
    ) -> Result<Self, ColorError> {
        let count = tint_color::limits::clamp_count(defaults.color_count);
        let ramp = Ramp::alpha(base_hex, count)?;
        let modes = vec![Mode::new(defaults.light_mode_name.clone(), ramp.colors)];
        Ok(Self::assemble(
            name,
            base_hex,
            count,
            0.0,
            defaults,
            RampKind::Alpha,
            ramp.base_index,
            modes,
        ))
    }

    #[allow(clippy::too_many_arguments)]
    fn assemble(
        name: impl Into<String>,
        base_hex: &str,
        count: usize,
        curve: f64,
        defaults: &StoreDefaults,
        kind: RampKind,
        base_color_index: usize,
        modes: Vec<Mode>,
    ) -> Self {
        let active_mode_id = modes.first().map(|m| m.id.clone());
        Self {
            id: PaletteId::new(),
            name: name.into(),
            base_color: base_hex.to_string(),
            color_count: count,
            lightness_curve: curve,
            light_bg: defaults.light_bg.clone(),
            dark_bg: defaults.dark_bg.clone(),
            base_color_index,
            kind,
            step_names: default_step_names(count),
            modes,
            active_mode_id,
        }
    }

    pub fn mode(&self, id: &ModeId) -> Option<&Mode> {
        self.modes.iter().find(|m| &m.id == id)
    }

    pub fn mode_mut(&mut self, id: &ModeId) -> Option<&mut Mode> {
        self.modes.iter_mut().find(|m| &m.id == id)
    }

    /// The active mode, falling back to the first one.
    pub fn active_mode(&self) -> Option<&Mode> {
        self.active_mode_id
            .as_ref()
            .and_then(|id| self.mode(id))
            .or_else(|| self.modes.first())
    }

    /// Display name of step `index`, defaulting to `(index + 1) * 100`.
    pub fn step_name(&self, index: usize) -> String {
        self.step_names
            .get(index)
            .cloned()
            .unwrap_or_else(|| ((index + 1) * 100).to_string())
    }

    /// Rebuild every mode's colors from the base color, count and curve.
    ///
    /// Lightness palettes use the curve for the first mode and `-|curve|`
    /// for the rest. Alpha palettes get the same alpha ramp in every mode.
    pub fn regenerate(&mut self) -> Result<(), ColorError> {
        match self.kind {
            RampKind::Lightness => {
                let primary = Ramp::lightness(&self.base_color, self.color_count, self.lightness_curve)?;
                let secondary = Ramp::lightness(
                    &self.base_color,
                    self.color_count,
                    -self.lightness_curve.abs(),
                )?;
                self.base_color_index = primary.base_index;
                for (i, mode) in self.modes.iter_mut().enumerate() {
                    mode.colors = if i == 0 {
                        primary.colors.clone()
                    } else {
                        secondary.colors.clone()
                    };
                }
            }
            RampKind::Alpha => {
                let ramp = Ramp::alpha(&self.base_color, self.color_count)?;
                self.base_color_index = ramp.base_index;
                for mode in &mut self.modes {
                    mode.colors = ramp.colors.clone();
                }
            }
        }
        Ok(())
    }

    /// Colors for a freshly added mode.
    pub(crate) fn fresh_mode_colors(&self) -> Result<Vec<ColorRecord>, ColorError> {
        let ramp = match self.kind {
            RampKind::Lightness => {
                Ramp::lightness(&self.base_color, self.color_count, self.lightness_curve)?
            }
            RampKind::Alpha => Ramp::alpha(&self.base_color, self.color_count)?,
        };
        Ok(ramp.colors)
    }
}

/// The whole document at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreState {
    pub palettes: Vec<Palette>,
    pub selected_palette_id: Option<PaletteId>,
    pub theme: Theme,
    pub collection_name: String,
    pub background_preview: BackgroundPreview,
}

impl Default for StoreState {
    fn default() -> Self {
        Self::with_defaults(&StoreDefaults::default())
    }
}

impl StoreState {
    pub fn with_defaults(defaults: &StoreDefaults) -> Self {
        Self {
            palettes: Vec::new(),
            selected_palette_id: None,
            theme: Theme::default(),
            collection_name: defaults.collection_name.clone(),
            background_preview: BackgroundPreview::default(),
        }
    }

    pub fn palette(&self, id: &PaletteId) -> Option<&Palette> {
        self.palettes.iter().find(|p| &p.id == id)
    }

    pub(crate) fn palette_mut(&mut self, id: &PaletteId) -> Option<&mut Palette> {
        self.palettes.iter_mut().find(|p| &p.id == id)
    }

    pub fn selected_palette(&self) -> Option<&Palette> {
        self.selected_palette_id
            .as_ref()
            .and_then(|id| self.palette(id))
    }
}

/// `"100"`, `"200"`, ... for `count` steps.
pub fn default_step_names(count: usize) -> Vec<String> {
    (1..=count).map(|i| (i * 100).to_string()).collect()
}

/// `base` if unused, otherwise the first free `"base N"` with N >= 2.
pub(crate) fn unique_name<'a>(base: &str, existing: impl Iterator<Item = &'a str> + Clone) -> String {
    let taken = |candidate: &str| existing.clone().any(|n| n == candidate);
    if !taken(base) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{base} {n}"))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| base.to_string())
}
