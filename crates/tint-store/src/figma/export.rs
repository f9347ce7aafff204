use tint_common::{Rgb8, StoreError};

use super::{mode_id_for, FigmaCollection, FigmaColor, FigmaMode, FigmaVariable};
use crate::model::Palette;

/// Serialize palettes as a pretty-printed Figma variable collection.
///
/// The collection's modes are the distinct mode names across all palettes,
/// in first-seen order. Each palette contributes one variable per step of
/// its first mode; a palette without a mode of a given name simply has no
/// value for it.
pub fn export_to_figma_json(palettes: &[Palette], collection_name: &str) -> Result<String, StoreError> {
    let mut modes: Vec<FigmaMode> = Vec::new();
    for mode in palettes.iter().flat_map(|p| &p.modes) {
        if !modes.iter().any(|m| m.name == mode.name) {
            modes.push(FigmaMode {
                name: mode.name.clone(),
                mode_id: mode_id_for(&mode.name),
            });
        }
    }

    let mut variables = Vec::new();
    for palette in palettes {
        let Some(first) = palette.modes.first() else {
            continue;
        };
        for index in 0..first.colors.len() {
            let mut values = std::collections::BTreeMap::new();
            for mode in &modes {
                let color = palette
                    .modes
                    .iter()
                    .find(|m| m.name == mode.name)
                    .and_then(|m| m.colors.get(index));
                if let Some(color) = color {
                    let rgb = Rgb8::from_hex(&color.hex)?;
                    let (r, g, b) = rgb.to_unit();
                    values.insert(
                        mode.mode_id.clone(),
                        FigmaColor {
                            r: round3(r),
                            g: round3(g),
                            b: round3(b),
                            a: color.alpha,
                        },
                    );
                }
            }
            variables.push(FigmaVariable {
                name: format!("{}/{}", palette.name, palette.step_name(index)),
                kind: "color".into(),
                values,
            });
        }
    }

    let collection = FigmaCollection {
        name: collection_name.to_string(),
        modes,
        variables,
    };
    serde_json::to_string_pretty(&collection)
        .map_err(|e| StoreError::Storage(format!("failed to serialize Figma collection: {e}")))
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}
