//! WCAG 2.1 relative luminance and contrast ratio.

use std::fmt;

use serde::{Deserialize, Serialize};
use tint_common::ColorError;

use crate::convert::{hex_to_srgb, LinearRgb};

/// Relative luminance of a hex color, `[0, 1]`.
pub fn relative_luminance(hex: &str) -> Result<f64, ColorError> {
    let linear = LinearRgb::from(hex_to_srgb(hex)?);
    Ok(0.2126 * linear.r + 0.7152 * linear.g + 0.0722 * linear.b)
}

/// Contrast ratio `(Lmax + 0.05) / (Lmin + 0.05)`. Symmetric, always `>= 1`.
pub fn contrast_ratio(hex_a: &str, hex_b: &str) -> Result<f64, ColorError> {
    let a = relative_luminance(hex_a)?;
    let b = relative_luminance(hex_b)?;
    let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
    Ok((lighter + 0.05) / (darker + 0.05))
}

/// Reporting bucket for a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContrastLevel {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "fail")]
    Fail,
}

impl ContrastLevel {
    pub fn classify(ratio: f64) -> Self {
        if ratio >= 7.0 {
            Self::Aaa
        } else if ratio >= 4.5 {
            Self::Aa
        } else if ratio >= 3.0 {
            Self::A
        } else {
            Self::Fail
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::A => "A",
            Self::Fail => "fail",
        }
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Contrast of one swatch against a palette's light and dark backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastPair {
    pub on_light: f64,
    pub on_light_level: ContrastLevel,
    pub on_dark: f64,
    pub on_dark_level: ContrastLevel,
}

pub fn contrast_against(hex: &str, light_bg: &str, dark_bg: &str) -> Result<ContrastPair, ColorError> {
    let on_light = contrast_ratio(hex, light_bg)?;
    let on_dark = contrast_ratio(hex, dark_bg)?;
    Ok(ContrastPair {
        on_light,
        on_light_level: ContrastLevel::classify(on_light),
        on_dark,
        on_dark_level: ContrastLevel::classify(on_dark),
    })
}
