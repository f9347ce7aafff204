use serde_json::Value;
use tint_color::limits::clamp_count;
use tint_color::{ColorRecord, RampKind};
use tint_common::{ModeId, PaletteId, Rgb8, StoreError};
use tracing::warn;

use super::{mode_id_for, DEFAULT_GROUP, FALLBACK_HEX, IMPORTED_COLLECTION_NAME};
use crate::model::{default_step_names, Mode, Palette, StoreDefaults};

const IMPORTED_CURVE: f64 = 0.3;

/// Palettes rebuilt from a Figma collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FigmaImport {
    pub palettes: Vec<Palette>,
    pub collection_name: String,
    /// Number of colors that could not be read and were replaced by mid-gray.
    pub warnings: usize,
    /// Groups truncated or padded to fit the 2..=20 step range.
    pub resized_groups: usize,
}

/// Parse a Figma variable collection into palettes.
///
/// Fails only when the document is not JSON or lacks a `variables` or
/// non-empty `modes` array. Individual unreadable colors become `#808080`
/// and are counted in [`FigmaImport::warnings`].
///
/// Every palette holds 2..=20 steps. A larger group keeps its first 20
/// steps in step order; a single-variable group repeats its color as a
/// second step. Both are counted in [`FigmaImport::resized_groups`].
pub fn import_from_figma_json(json: &str) -> Result<FigmaImport, StoreError> {
    let data: Value = serde_json::from_str(json)
        .map_err(|e| StoreError::Import(format!("invalid JSON: {e}")))?;

    let (Some(variables), Some(modes)) = (
        data.get("variables").and_then(Value::as_array),
        data.get("modes").and_then(Value::as_array),
    ) else {
        return Err(StoreError::Import(
            "invalid Figma JSON format: missing variables or modes".into(),
        ));
    };
    if modes.is_empty() {
        return Err(StoreError::Import("collection has no modes".into()));
    }

    let modes: Vec<(String, String)> = modes
        .iter()
        .enumerate()
        .map(|(i, mode)| {
            let name = mode
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Mode {}", i + 1));
            let id = mode
                .get("modeId")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| mode_id_for(&name));
            (name, id)
        })
        .collect();

    let defaults = StoreDefaults::default();
    let mut warnings = 0;
    let mut resized_groups = 0;
    let mut palettes = Vec::new();
    for (group, mut members) in group_by_folder(variables) {
        members.sort_by_key(|v| leading_number(last_segment(variable_name(v))));

        let step_count = clamp_count(members.len());
        if members.len() != step_count {
            warn!(
                group = %group,
                variables = members.len(),
                "resizing imported group to {step_count} steps"
            );
            members.truncate(step_count);
            resized_groups += 1;
        }

        let palette_modes: Vec<Mode> = modes
            .iter()
            .map(|(name, mode_id)| {
                let mut colors: Vec<ColorRecord> = members
                    .iter()
                    .map(|v| {
                        read_color(v, mode_id).unwrap_or_else(|| {
                            warnings += 1;
                            fallback_color()
                        })
                    })
                    .collect();
                pad_with_last(&mut colors, step_count);
                Mode {
                    id: ModeId::new(),
                    name: name.clone(),
                    colors,
                }
            })
            .collect();

        let mut step_names: Vec<String> = members
            .iter()
            .map(|v| last_segment(variable_name(v)).to_string())
            .collect();
        step_names.extend(default_step_names(step_count).into_iter().skip(members.len()));

        let mid = step_count / 2;
        let base_color = palette_modes
            .first()
            .and_then(|m| m.colors.get(mid))
            .map(|c| c.hex.clone())
            .unwrap_or_else(|| FALLBACK_HEX.to_string());

        palettes.push(Palette {
            id: PaletteId::new(),
            name: group,
            base_color,
            color_count: step_count,
            lightness_curve: IMPORTED_CURVE,
            light_bg: defaults.light_bg.clone(),
            dark_bg: defaults.dark_bg.clone(),
            base_color_index: mid,
            kind: RampKind::Lightness,
            step_names,
            active_mode_id: palette_modes.first().map(|m| m.id.clone()),
            modes: palette_modes,
        });
    }

    if warnings > 0 {
        warn!(warnings, "replaced unreadable Figma colors with {FALLBACK_HEX}");
    }

    let collection_name = data
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or(IMPORTED_COLLECTION_NAME)
        .to_string();

    Ok(FigmaImport {
        palettes,
        collection_name,
        warnings,
        resized_groups,
    })
}

fn variable_name(v: &Value) -> &str {
    v.get("name").and_then(Value::as_str).unwrap_or("")
}

fn last_segment(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

/// Folder name and member variables, in order of first appearance.
fn group_by_folder(variables: &[Value]) -> Vec<(String, Vec<&Value>)> {
    let mut groups: Vec<(String, Vec<&Value>)> = Vec::new();
    for variable in variables {
        let name = variable_name(variable);
        let folder = match name.split_once('/') {
            Some((folder, _)) if !folder.is_empty() => folder,
            _ => DEFAULT_GROUP,
        };
        match groups.iter_mut().find(|(g, _)| g == folder) {
            Some((_, members)) => members.push(variable),
            None => groups.push((folder.to_string(), vec![variable])),
        }
    }
    groups
}

/// Integer value of the leading digits, or 0 when there are none.
fn leading_number(s: &str) -> u64 {
    let digits: String = s.trim_start().chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// The variable's value for `mode_id`, falling back to its first value.
fn read_color(variable: &Value, mode_id: &str) -> Option<ColorRecord> {
    let values = variable.get("values")?.as_object()?;
    let value = values.get(mode_id).or_else(|| values.values().next())?;

    let channel = |key: &str| -> Option<u8> {
        let v = value.get(key)?.as_f64()?;
        v.is_finite().then(|| (v * 255.0).round().clamp(0.0, 255.0) as u8)
    };
    let rgb = Rgb8::new(channel("r")?, channel("g")?, channel("b")?);
    let alpha = match value.get("a") {
        None => 1.0,
        Some(a) => {
            let a = a.as_f64().filter(|a| a.is_finite())?;
            (a.clamp(0.0, 1.0) * 100.0).round() / 100.0
        }
    };

    ColorRecord::from_hex(&rgb.to_hex())
        .ok()
        .map(|record| record.with_alpha(alpha))
}

fn pad_with_last(colors: &mut Vec<ColorRecord>, len: usize) {
    while colors.len() < len {
        let last = colors.last().cloned().unwrap_or_else(fallback_color);
        colors.push(last);
    }
}

fn fallback_color() -> ColorRecord {
    ColorRecord {
        l: 0.5,
        c: 0.0,
        h: 0.0,
        hex: FALLBACK_HEX.to_string(),
        alpha: 1.0,
    }
}
