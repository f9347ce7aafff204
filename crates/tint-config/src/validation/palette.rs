//! Validation for the `[palette]` section.

use crate::schema::TintConfig;
use tint_color::limits::{MAX_COLOR_COUNT, MAX_CURVE, MIN_COLOR_COUNT, MIN_CURVE};

use super::helpers::{validate_color_field, validate_range, validate_range_f64};

/// Validate palette defaults against the generator's accepted ranges.
pub(crate) fn validate_palette(errors: &mut Vec<String>, config: &TintConfig) {
    let palette = &config.palette;
    validate_range(
        errors,
        "palette.color_count",
        palette.color_count,
        MIN_COLOR_COUNT,
        MAX_COLOR_COUNT,
    );
    validate_range_f64(
        errors,
        "palette.lightness_curve",
        palette.lightness_curve,
        MIN_CURVE,
        MAX_CURVE,
    );
    validate_color_field(errors, "palette.light_bg", &palette.light_bg);
    validate_color_field(errors, "palette.dark_bg", &palette.dark_bg);
    validate_color_field(errors, "palette.default_base", &palette.default_base);
}
