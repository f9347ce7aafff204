//! Color parsing and validation for config values.
//!
//! Supports `#RGB`, `#RRGGBB`, and `rgb(r,g,b)` formats. Config colors are
//! always opaque; alpha belongs to palette steps, not to backgrounds.

mod parse;


use tint_common::{ConfigError, Rgb8};

use parse::{parse_hex, parse_rgb, HEX_RE};

/// Parse a config color string into an [`Rgb8`].
pub fn parse_color(s: &str) -> Result<Rgb8, ConfigError> {
    let s = s.trim();

    if s.starts_with('#') {
        if let Some(color) = parse_hex(s) {
            return Ok(color);
        }
        return Err(ConfigError::ParseError(format!("invalid hex color: {s}")));
    }

    if s.starts_with("rgb(") {
        if let Some(color) = parse_rgb(s) {
            return Ok(color);
        }
        return Err(ConfigError::ParseError(format!("invalid rgb color: {s}")));
    }

    Err(ConfigError::ParseError(format!(
        "unrecognized color format: {s}"
    )))
}

/// Parse and re-emit as canonical lowercase `#rrggbb`.
pub fn to_hex(s: &str) -> Result<String, ConfigError> {
    parse_color(s).map(Rgb8::to_hex)
}

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    if s.starts_with('#') {
        return HEX_RE.is_match(s);
    }
    if s.starts_with("rgb(") {
        return parse_rgb(s).is_some();
    }
    false
}
