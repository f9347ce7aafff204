//! Tests for Figma export and import.

use super::*;
use crate::model::{Palette, StoreDefaults};
use serde_json::Value;
use tint_common::StoreError;

fn indigo() -> Palette {
    Palette::lightness("indigo", "#6366f1", &StoreDefaults::default()).unwrap()
}

#[test]
fn mode_ids_are_lowercase_and_dashed() {
    assert_eq!(mode_id_for("Light"), "light");
    assert_eq!(mode_id_for("High  Contrast Dark"), "high-contrast-dark");
    assert_eq!(mode_id_for(""), "");
}

#[test]
fn export_has_one_variable_per_step() {
    let json = export_to_figma_json(&[indigo()], "Brand").unwrap();
    let data: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(data["name"], "Brand");
    let modes = data["modes"].as_array().unwrap();
    assert_eq!(modes.len(), 2);
    assert_eq!(modes[0]["name"], "Light");
    assert_eq!(modes[0]["modeId"], "light");
    assert_eq!(modes[1]["modeId"], "dark");

    let variables = data["variables"].as_array().unwrap();
    assert_eq!(variables.len(), 11);
    assert_eq!(variables[0]["name"], "indigo/100");
    assert_eq!(variables[10]["name"], "indigo/1100");
    assert_eq!(variables[0]["type"], "color");
    assert!(variables[0]["values"]["light"].is_object());
    assert!(variables[0]["values"]["dark"].is_object());
}

#[test]
fn export_rounds_channels_to_three_decimals() {
    let mut palette = indigo();
    palette.modes[0].colors[0] = tint_color::ColorRecord::from_hex("#6366f1").unwrap();
    let json = export_to_figma_json(&[palette], "Brand").unwrap();
    let data: Value = serde_json::from_str(&json).unwrap();

    let value = &data["variables"][0]["values"]["light"];
    assert_eq!(value["r"].as_f64().unwrap(), 0.388);
    assert_eq!(value["g"].as_f64().unwrap(), 0.4);
    assert_eq!(value["b"].as_f64().unwrap(), 0.945);
    assert_eq!(value["a"].as_f64().unwrap(), 1.0);
}

#[test]
fn export_carries_alpha_and_custom_step_names() {
    let mut palette = Palette::alpha("ink", "#000000", &StoreDefaults::default()).unwrap();
    palette.step_names[0] = "faint".into();
    let json = export_to_figma_json(&[palette], "Brand").unwrap();
    let data: Value = serde_json::from_str(&json).unwrap();

    let variables = data["variables"].as_array().unwrap();
    assert_eq!(variables[0]["name"], "ink/faint");
    assert_eq!(variables[0]["values"]["light"]["a"].as_f64().unwrap(), 0.05);
    assert_eq!(variables[10]["values"]["light"]["a"].as_f64().unwrap(), 1.0);
}

#[test]
fn export_merges_mode_names_across_palettes() {
    let a = indigo();
    let mut b = Palette::lightness("sky", "#0ea5e9", &StoreDefaults::default()).unwrap();
    b.modes[1].name = "Dim".into();
    let json = export_to_figma_json(&[a, b], "Brand").unwrap();
    let data: Value = serde_json::from_str(&json).unwrap();

    let names: Vec<&str> = data["modes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Light", "Dark", "Dim"]);

    // "sky" has no Dark mode, so its variables carry no value for it.
    let sky = &data["variables"][11];
    assert_eq!(sky["name"], "sky/100");
    assert!(sky["values"].get("dark").is_none());
    assert!(sky["values"]["dim"].is_object());
}

#[test]
fn round_trip_preserves_palette_shape() {
    let original = indigo();
    let json = export_to_figma_json(std::slice::from_ref(&original), "Brand").unwrap();
    let imported = import_from_figma_json(&json).unwrap();

    assert_eq!(imported.collection_name, "Brand");
    assert_eq!(imported.warnings, 0);
    assert_eq!(imported.palettes.len(), 1);

    let palette = &imported.palettes[0];
    assert_eq!(palette.name, "indigo");
    assert_eq!(palette.color_count, 11);
    assert_eq!(palette.step_names, original.step_names);
    assert_eq!(palette.base_color_index, 5);
    assert_eq!(palette.modes.len(), 2);
    for (mode, source) in palette.modes.iter().zip(&original.modes) {
        assert_eq!(mode.name, source.name);
        let hexes: Vec<&str> = mode.colors.iter().map(|c| c.hex.as_str()).collect();
        let expected: Vec<&str> = source.colors.iter().map(|c| c.hex.as_str()).collect();
        assert_eq!(hexes, expected);
    }
    assert_eq!(palette.base_color, palette.modes[0].colors[5].hex);
    assert_eq!(palette.active_mode_id, Some(palette.modes[0].id.clone()));
}

#[test]
fn import_sorts_by_numeric_step() {
    let json = r##"{
        "name": "Sorted",
        "modes": [{"name": "Light", "modeId": "light"}],
        "variables": [
            {"name": "red/900", "type": "color", "values": {"light": {"r": 0.2, "g": 0, "b": 0, "a": 1}}},
            {"name": "red/100", "type": "color", "values": {"light": {"r": 1, "g": 0.9, "b": 0.9, "a": 1}}},
            {"name": "red/500", "type": "color", "values": {"light": {"r": 1, "g": 0, "b": 0, "a": 1}}}
        ]
    }"##;
    let imported = import_from_figma_json(json).unwrap();
    let palette = &imported.palettes[0];
    assert_eq!(palette.step_names, vec!["100", "500", "900"]);
    assert_eq!(palette.modes[0].colors[1].hex, "#ff0000");
    assert_eq!(palette.base_color, "#ff0000");
}

#[test]
fn import_groups_folderless_variables_as_default() {
    let json = r##"{
        "modes": [{"name": "Light", "modeId": "light"}],
        "variables": [
            {"name": "accent", "type": "color", "values": {"light": {"r": 0, "g": 0, "b": 1, "a": 1}}},
            {"name": "brand/100", "type": "color", "values": {"light": {"r": 0, "g": 1, "b": 0, "a": 1}}}
        ]
    }"##;
    let imported = import_from_figma_json(json).unwrap();
    assert_eq!(imported.collection_name, IMPORTED_COLLECTION_NAME);
    let names: Vec<&str> = imported.palettes.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec![DEFAULT_GROUP, "brand"]);
}

#[test]
fn import_falls_back_to_first_value_for_missing_mode() {
    let json = r##"{
        "modes": [
            {"name": "Light", "modeId": "light"},
            {"name": "Dark", "modeId": "dark"}
        ],
        "variables": [
            {"name": "gray/100", "type": "color", "values": {"light": {"r": 1, "g": 1, "b": 1, "a": 1}}}
        ]
    }"##;
    let imported = import_from_figma_json(json).unwrap();
    let palette = &imported.palettes[0];
    assert_eq!(palette.modes[1].colors[0].hex, "#ffffff");
    assert_eq!(imported.warnings, 0);
}

#[test]
fn malformed_colors_degrade_to_mid_gray() {
    let json = r##"{
        "modes": [{"name": "Light", "modeId": "light"}],
        "variables": [
            {"name": "mix/100", "type": "color", "values": {"light": {"r": "red", "g": 0, "b": 0}}},
            {"name": "mix/200", "type": "color", "values": {}},
            {"name": "mix/300", "type": "color", "values": {"light": {"r": 0, "g": 0, "b": 0, "a": 0.5}}}
        ]
    }"##;
    let imported = import_from_figma_json(json).unwrap();
    assert_eq!(imported.warnings, 2);

    let colors = &imported.palettes[0].modes[0].colors;
    for gray in &colors[..2] {
        assert_eq!(gray.hex, FALLBACK_HEX);
        assert_eq!(gray.l, 0.5);
        assert_eq!(gray.c, 0.0);
        assert_eq!(gray.h, 0.0);
    }
    assert_eq!(colors[2].hex, "#000000");
    assert_eq!(colors[2].alpha, 0.5);
}

#[test]
fn out_of_range_channels_are_clamped() {
    let json = r##"{
        "modes": [{"name": "Light", "modeId": "light"}],
        "variables": [
            {"name": "x/100", "type": "color", "values": {"light": {"r": 2.0, "g": -1.0, "b": 0.5}}}
        ]
    }"##;
    let imported = import_from_figma_json(json).unwrap();
    let color = &imported.palettes[0].modes[0].colors[0];
    assert_eq!(color.hex, "#ff0080");
    assert_eq!(color.alpha, 1.0);
}

#[test]
fn missing_sections_are_import_errors() {
    for json in [
        r#"{"modes": []}"#,
        r#"{"variables": []}"#,
        r#"{"variables": [], "modes": []}"#,
        r#"[1, 2, 3]"#,
        "not json",
    ] {
        let err = import_from_figma_json(json).unwrap_err();
        assert!(matches!(err, StoreError::Import(_)), "{json}: {err:?}");
    }
}

#[test]
fn empty_variables_import_no_palettes() {
    let json = r#"{"name": "Empty", "variables": [], "modes": [{"name": "Light", "modeId": "light"}]}"#;
    let imported = import_from_figma_json(json).unwrap();
    assert!(imported.palettes.is_empty());
    assert_eq!(imported.collection_name, "Empty");
}

fn collection_with_steps(group: &str, steps: usize) -> String {
    let variables: Vec<Value> = (1..=steps)
        .map(|i| {
            serde_json::json!({
                "name": format!("{group}/{}", i * 100),
                "type": "color",
                "values": {"light": {"r": i as f64 / steps as f64, "g": 0, "b": 0, "a": 1}}
            })
        })
        .collect();
    serde_json::json!({
        "modes": [{"name": "Light", "modeId": "light"}],
        "variables": variables,
    })
    .to_string()
}

#[test]
fn oversized_groups_keep_the_first_twenty_steps() {
    let imported = import_from_figma_json(&collection_with_steps("big", 25)).unwrap();
    assert_eq!(imported.resized_groups, 1);

    let palette = &imported.palettes[0];
    assert_eq!(palette.color_count, 20);
    assert_eq!(palette.modes[0].colors.len(), 20);
    assert_eq!(palette.step_names.len(), 20);
    assert_eq!(palette.step_names[0], "100");
    assert_eq!(palette.step_names[19], "2000");
    assert_eq!(palette.base_color_index, 10);
}

#[test]
fn single_step_group_is_padded_to_two_steps() {
    let imported = import_from_figma_json(&collection_with_steps("solo", 1)).unwrap();
    assert_eq!(imported.resized_groups, 1);
    assert_eq!(imported.warnings, 0);

    let palette = &imported.palettes[0];
    assert_eq!(palette.color_count, 2);
    assert_eq!(palette.step_names, vec!["100", "200"]);
    let colors = &palette.modes[0].colors;
    assert_eq!(colors.len(), 2);
    assert_eq!(colors[0], colors[1]);
    assert_eq!(palette.base_color, colors[0].hex);
}

#[test]
fn groups_within_range_are_not_resized() {
    let imported = import_from_figma_json(&collection_with_steps("ok", 11)).unwrap();
    assert_eq!(imported.resized_groups, 0);
    assert_eq!(imported.palettes[0].color_count, 11);
}

#[test]
fn imported_palettes_regenerate_within_range() {
    let imported = import_from_figma_json(&collection_with_steps("big", 25)).unwrap();
    let mut palette = imported.palettes[0].clone();
    palette.regenerate().unwrap();
    assert_eq!(palette.modes[0].colors.len(), 20);
}

#[test]
fn empty_folder_name_uses_default_group() {
    let json = r##"{
        "modes": [{"name": "Light", "modeId": "light"}],
        "variables": [
            {"name": "/100", "type": "color", "values": {"light": {"r": 1, "g": 0, "b": 0, "a": 1}}},
            {"name": "/200", "type": "color", "values": {"light": {"r": 0, "g": 0, "b": 1, "a": 1}}}
        ]
    }"##;
    let imported = import_from_figma_json(json).unwrap();
    assert_eq!(imported.palettes.len(), 1);
    assert_eq!(imported.palettes[0].name, DEFAULT_GROUP);
    assert_eq!(imported.palettes[0].step_names, vec!["100", "200"]);
}
