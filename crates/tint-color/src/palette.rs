//! Ramp generation: lightness ramps, alpha ramps, and base-index lookup.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tint_common::ColorError;

use crate::convert::{hex_to_oklch, normalize_hex, oklch_to_hex, Oklch};
use crate::curve::generate_lightness_values;
use crate::gamut::gamut_map_oklch;

/// Lowest alpha an alpha ramp reaches.
pub const ALPHA_MIN: f64 = 0.05;

/// One swatch. Serializes as `{"L", "C", "h", "hex", "alpha"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRecord {
    #[serde(rename = "L")]
    pub l: f64,
    #[serde(rename = "C")]
    pub c: f64,
    pub h: f64,
    pub hex: String,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

fn default_alpha() -> f64 {
    1.0
}

impl ColorRecord {
    /// Record for an OKLCh color as given (no gamut mapping); hex is clamped.
    pub fn from_oklch(c: Oklch) -> Self {
        Self {
            l: c.l,
            c: c.c,
            h: c.h,
            hex: oklch_to_hex(c.l, c.c, c.h),
            alpha: 1.0,
        }
    }

    /// Record for a direct hex edit: L/C/h are re-derived from the hex.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let c = hex_to_oklch(hex)?;
        Ok(Self {
            l: c.l,
            c: c.c,
            h: c.h,
            hex: normalize_hex(hex)?,
            alpha: 1.0,
        })
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn oklch(&self) -> Oklch {
        Oklch::new(self.l, self.c, self.h)
    }
}

/// What varies along a ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RampKind {
    /// Lightness varies; chroma may be reduced per step by gamut mapping.
    #[default]
    Lightness,
    /// One color at varying opacity.
    Alpha,
}

impl RampKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lightness => "lightness",
            Self::Alpha => "alpha",
        }
    }
}

/// An ordered ramp with its base index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ramp {
    pub kind: RampKind,
    pub colors: Vec<ColorRecord>,
    pub base_index: usize,
}

impl Ramp {
    pub fn lightness(base_hex: &str, count: usize, curve: f64) -> Result<Self, ColorError> {
        let colors = generate_palette(base_hex, count, curve)?;
        let base_index = find_base_color_index(&colors, base_hex)?;
        Ok(Self {
            kind: RampKind::Lightness,
            colors,
            base_index,
        })
    }

    /// Alpha ramps mark the fully opaque last step as the base.
    pub fn alpha(base_hex: &str, count: usize) -> Result<Self, ColorError> {
        let colors = generate_alpha_palette(base_hex, count)?;
        Ok(Self {
            kind: RampKind::Alpha,
            base_index: colors.len().saturating_sub(1),
            colors,
        })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Build a lightness ramp from the hue and chroma of `base_hex`.
///
/// The base color's own lightness is discarded: each step takes its L from
/// [`generate_lightness_values`] and is then gamut-mapped, so chroma may drop
/// per step while hue and L stay exact. Every record has alpha 1.
///
/// Precondition: `count` and `curve` already clamped (see [`crate::limits`]).
pub fn generate_palette(
    base_hex: &str,
    count: usize,
    curve: f64,
) -> Result<Vec<ColorRecord>, ColorError> {
    let base = hex_to_oklch(base_hex)?;
    Ok(generate_lightness_values(count, curve)
        .into_iter()
        .map(|l| ColorRecord::from_oklch(gamut_map_oklch(l, base.c, base.h)))
        .collect())
}

/// Index of the record whose lightness is closest to `base_hex`'s.
///
/// Ties keep the first index. An empty ramp yields 0.
pub fn find_base_color_index(colors: &[ColorRecord], base_hex: &str) -> Result<usize, ColorError> {
    let base = hex_to_oklch(base_hex)?;
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, color) in colors.iter().enumerate() {
        let dist = (color.l - base.l).abs();
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    Ok(best)
}

/// Evenly spaced opacities from 0.05 to 1.0, rounded to two decimals.
pub fn generate_alpha_values(count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![1.0],
        _ => {
            let last = (count - 1) as f64;
            (0..count)
                .map(|i| round2(ALPHA_MIN + (1.0 - ALPHA_MIN) * i as f64 / last))
                .collect()
        }
    }
}

/// One record per alpha step, all sharing `base_hex`'s L/C/h/hex.
pub fn generate_alpha_palette(base_hex: &str, count: usize) -> Result<Vec<ColorRecord>, ColorError> {
    let base = ColorRecord::from_hex(base_hex)?;
    Ok(generate_alpha_values(count)
        .into_iter()
        .map(|alpha| base.clone().with_alpha(alpha))
        .collect())
}

/// A moderately saturated, mid-light color with a random hue, as hex.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    let h = rng.gen_range(0.0..360.0);
    let c = 0.1 + rng.gen::<f64>() * 0.15;
    let l = 0.4 + rng.gen::<f64>() * 0.3;
    let mapped = gamut_map_oklch(l, c, h);
    oklch_to_hex(mapped.l, mapped.c, mapped.h)
}

pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
