//! OKLCh color engine for palette design.
//!
//! Conversions between hex, sRGB, linear RGB, CIE XYZ (D65), OKLab and
//! OKLCh; chroma-reducing gamut mapping into sRGB; shaped lightness ramps;
//! WCAG contrast; hue naming.
//!
//! Every function here is pure: no I/O, no shared state, no logging. Count
//! and curve arguments are expected to be pre-clamped by the caller (see
//! [`limits`]); the engine does not re-validate them.
//!
//! ```rust
//! use tint_color::{contrast_ratio, generate_palette};
//!
//! let ramp = generate_palette("#6366f1", 11, 0.3).unwrap();
//! assert_eq!(ramp.len(), 11);
//! let ratio = contrast_ratio(&ramp[0].hex, "#ffffff").unwrap();
//! assert!(ratio > 1.0);
//! ```

pub mod contrast;
pub mod convert;
pub mod curve;
pub mod gamut;
pub mod limits;
pub mod naming;
pub mod palette;

pub use contrast::{contrast_against, contrast_ratio, relative_luminance, ContrastLevel, ContrastPair};
pub use convert::{hex_to_oklch, oklch_to_hex, oklch_to_rgb, LinearRgb, Oklab, Oklch, Srgb, Xyz};
pub use curve::generate_lightness_values;
pub use gamut::{gamut_map_oklch, is_in_gamut};
pub use naming::{color_name, HueName};
pub use palette::{
    find_base_color_index, generate_alpha_palette, generate_alpha_values, generate_palette,
    random_color, ColorRecord, Ramp, RampKind,
};

pub use tint_common::{ColorError, Rgb8};
