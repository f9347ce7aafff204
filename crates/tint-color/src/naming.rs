//! English hue names used for default palette names.

use std::fmt;

use serde::{Deserialize, Serialize};
use tint_common::ColorError;

use crate::convert::{hex_to_oklch, Oklch};

/// Below this chroma a color is named by lightness alone.
pub const ACHROMATIC_CHROMA: f64 = 0.04;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HueName {
    Black,
    White,
    Gray,
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Pink,
}

/// Upper (inclusive) hue bound of each bucket, in order.
const HUE_BUCKETS: [(f64, HueName); 9] = [
    (15.0, HueName::Red),
    (45.0, HueName::Orange),
    (75.0, HueName::Yellow),
    (150.0, HueName::Green),
    (210.0, HueName::Cyan),
    (260.0, HueName::Blue),
    (310.0, HueName::Purple),
    (345.0, HueName::Pink),
    (360.0, HueName::Red),
];

impl HueName {
    pub fn classify(c: Oklch) -> Self {
        if c.c < ACHROMATIC_CHROMA {
            return if c.l < 0.2 {
                Self::Black
            } else if c.l > 0.85 {
                Self::White
            } else {
                Self::Gray
            };
        }
        HUE_BUCKETS
            .iter()
            .find(|(bound, _)| c.h <= *bound)
            .map_or(Self::Red, |(_, name)| *name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
            Self::Gray => "gray",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Pink => "pink",
        }
    }
}

impl fmt::Display for HueName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Name the hue of a hex color.
pub fn color_name(hex: &str) -> Result<HueName, ColorError> {
    Ok(HueName::classify(hex_to_oklch(hex)?))
}
