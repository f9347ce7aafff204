//! Internal color parsing helpers.
//!
//! Handles the low-level conversion of hex and rgb string formats
//! into [`Rgb8`] values. Not part of the public API.

use regex::Regex;
use std::sync::LazyLock;
use tint_common::Rgb8;

/// Regex for hex color: #RGB or #RRGGBB.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// Regex for rgb() color with integer channels.
pub(crate) static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").unwrap()
});

/// Parse a hex color string (#RGB or #RRGGBB).
pub(super) fn parse_hex(s: &str) -> Option<Rgb8> {
    if !HEX_RE.is_match(s) {
        return None;
    }
    Rgb8::from_hex(s).ok()
}

/// Parse an `rgb(r,g,b)` color string; channels must be 0-255.
pub(super) fn parse_rgb(s: &str) -> Option<Rgb8> {
    let caps = RGB_RE.captures(s)?;
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;
    Some(Rgb8::new(r, g, b))
}
