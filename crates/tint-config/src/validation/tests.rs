//! Tests for the full validation pipeline.

use super::*;
use std::path::PathBuf;

#[test]
fn default_config_validates() {
    assert!(validate(&TintConfig::default()).is_ok());
}

#[test]
fn catches_color_count_too_small() {
    let mut config = TintConfig::default();
    config.palette.color_count = 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("palette.color_count"));
}

#[test]
fn catches_color_count_too_large() {
    let mut config = TintConfig::default();
    config.palette.color_count = 21;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("palette.color_count"));
}

#[test]
fn color_count_bounds_are_inclusive() {
    let mut config = TintConfig::default();
    config.palette.color_count = 2;
    assert!(validate(&config).is_ok());
    config.palette.color_count = 20;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_curve_out_of_range() {
    let mut config = TintConfig::default();
    config.palette.lightness_curve = 1.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("palette.lightness_curve"));
}

#[test]
fn catches_nan_curve() {
    let mut config = TintConfig::default();
    config.palette.lightness_curve = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("palette.lightness_curve"));
}

#[test]
fn catches_invalid_background() {
    let mut config = TintConfig::default();
    config.palette.dark_bg = "charcoal".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("palette.dark_bg"));
}

#[test]
fn accepts_rgb_background() {
    let mut config = TintConfig::default();
    config.palette.light_bg = "rgb(250, 250, 250)".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_invalid_default_base() {
    let mut config = TintConfig::default();
    config.palette.default_base = "#12".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("palette.default_base"));
}

#[test]
fn catches_empty_data_file() {
    let mut config = TintConfig::default();
    config.storage.data_file = Some(PathBuf::new());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("storage.data_file"));
}

#[test]
fn catches_blank_collection_name() {
    let mut config = TintConfig::default();
    config.export.collection_name = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("export.collection_name"));
}

#[test]
fn catches_empty_logging_level() {
    let mut config = TintConfig::default();
    config.logging.level = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("logging.level"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = TintConfig::default();
    config.palette.color_count = 0;
    config.palette.lightness_curve = -3.0;
    config.export.collection_name = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("palette.color_count"));
    assert!(err.contains("palette.lightness_curve"));
    assert!(err.contains("export.collection_name"));
    assert_eq!(err.matches("; ").count(), 2);
}
