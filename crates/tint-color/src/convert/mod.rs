//! Colorspace conversions: hex ⇄ sRGB ⇄ linear RGB ⇄ XYZ (D65) ⇄ OKLab ⇄ OKLCh.
//!
//! Each stage is a plain value type with `From` conversions to its
//! neighbours, plus the free functions the rest of the engine calls.

mod matrices;


use serde::{Deserialize, Serialize};
use tint_common::{ColorError, Rgb8};

use matrices::{
    mul3, LINEAR_SRGB_TO_XYZ, LMS_TO_OKLAB, LMS_TO_XYZ, OKLAB_TO_LMS, XYZ_TO_LINEAR_SRGB,
    XYZ_TO_LMS,
};

/// Gamma-encoded sRGB, nominally in `[0, 1]` but unclamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// CIE XYZ relative to the D65 white point, Y of white = 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// Cylindrical OKLab. `h` is in degrees, `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklch {
    #[serde(rename = "L")]
    pub l: f64,
    #[serde(rename = "C")]
    pub c: f64,
    pub h: f64,
}

impl Oklch {
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }
}

// -- Transfer function --

/// IEC 61966-2-1 decode of one channel.
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// IEC 61966-2-1 encode of one channel, clamped to `[0, 1]`.
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0 {
        return 0.0;
    }
    if c >= 1.0 {
        return 1.0;
    }
    linear_to_srgb_unclamped(c)
}

/// Encode without clamping. Negative input stays on the linear segment.
pub fn linear_to_srgb_unclamped(c: f64) -> f64 {
    if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Wrap an angle in degrees into `[0, 360)`.
pub(crate) fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

// -- Stage conversions --

impl From<Srgb> for LinearRgb {
    fn from(c: Srgb) -> Self {
        Self {
            r: srgb_to_linear(c.r),
            g: srgb_to_linear(c.g),
            b: srgb_to_linear(c.b),
        }
    }
}

impl From<LinearRgb> for Xyz {
    fn from(c: LinearRgb) -> Self {
        let [x, y, z] = mul3(&LINEAR_SRGB_TO_XYZ, [c.r, c.g, c.b]);
        Self { x, y, z }
    }
}

impl From<Xyz> for LinearRgb {
    fn from(c: Xyz) -> Self {
        let [r, g, b] = mul3(&XYZ_TO_LINEAR_SRGB, [c.x, c.y, c.z]);
        Self { r, g, b }
    }
}

impl From<Xyz> for Oklab {
    fn from(c: Xyz) -> Self {
        let [l, m, s] = mul3(&XYZ_TO_LMS, [c.x, c.y, c.z]);
        let [l, a, b] = mul3(&LMS_TO_OKLAB, [l.cbrt(), m.cbrt(), s.cbrt()]);
        Self { l, a, b }
    }
}

impl From<Oklab> for Xyz {
    fn from(c: Oklab) -> Self {
        let [l, m, s] = mul3(&OKLAB_TO_LMS, [c.l, c.a, c.b]);
        let [x, y, z] = mul3(&LMS_TO_XYZ, [l * l * l, m * m * m, s * s * s]);
        Self { x, y, z }
    }
}

impl From<Oklab> for Oklch {
    fn from(c: Oklab) -> Self {
        let chroma = (c.a * c.a + c.b * c.b).sqrt();
        let hue = normalize_hue(c.b.atan2(c.a).to_degrees());
        Self {
            l: c.l,
            c: chroma,
            h: hue,
        }
    }
}

impl From<Oklch> for Oklab {
    fn from(c: Oklch) -> Self {
        let h = c.h.to_radians();
        Self {
            l: c.l,
            a: c.c * h.cos(),
            b: c.c * h.sin(),
        }
    }
}

impl LinearRgb {
    /// Encode to sRGB without clamping; out-of-gamut channels leave `[0, 1]`.
    pub fn to_srgb_unclamped(self) -> Srgb {
        Srgb {
            r: linear_to_srgb_unclamped(self.r),
            g: linear_to_srgb_unclamped(self.g),
            b: linear_to_srgb_unclamped(self.b),
        }
    }

    pub fn to_srgb(self) -> Srgb {
        Srgb {
            r: linear_to_srgb(self.r),
            g: linear_to_srgb(self.g),
            b: linear_to_srgb(self.b),
        }
    }
}

impl From<Rgb8> for Srgb {
    fn from(c: Rgb8) -> Self {
        let (r, g, b) = c.to_unit();
        Self { r, g, b }
    }
}

impl From<Srgb> for Rgb8 {
    fn from(c: Srgb) -> Self {
        Rgb8::from_unit(c.r, c.g, c.b)
    }
}

// -- Chains --

pub fn hex_to_srgb(hex: &str) -> Result<Srgb, ColorError> {
    Ok(Rgb8::from_hex(hex)?.into())
}

pub fn hex_to_oklab(hex: &str) -> Result<Oklab, ColorError> {
    let linear = LinearRgb::from(hex_to_srgb(hex)?);
    Ok(Oklab::from(Xyz::from(linear)))
}

/// Parse a 3- or 6-digit hex color (`#` optional) into OKLCh.
pub fn hex_to_oklch(hex: &str) -> Result<Oklch, ColorError> {
    Ok(hex_to_oklab(hex)?.into())
}

/// OKLCh → linear sRGB, the shared prefix of every outbound conversion.
pub fn oklch_to_linear(l: f64, c: f64, h: f64) -> LinearRgb {
    let lab = Oklab::from(Oklch::new(l, c, h));
    LinearRgb::from(Xyz::from(lab))
}

/// Lowercase `#rrggbb`, clamping out-of-gamut channels.
pub fn oklch_to_hex(l: f64, c: f64, h: f64) -> String {
    oklch_to_rgb(l, c, h).to_hex()
}

pub fn oklch_to_rgb(l: f64, c: f64, h: f64) -> Rgb8 {
    oklch_to_linear(l, c, h).to_srgb().into()
}

/// Canonical lowercase 6-digit form of any accepted hex input.
pub fn normalize_hex(hex: &str) -> Result<String, ColorError> {
    Ok(Rgb8::from_hex(hex)?.to_hex())
}
