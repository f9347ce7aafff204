//! Domain limits for ramp length and curve shape.
//!
//! Engine functions assume their inputs are already inside these limits.
//! Callers clamp (interactive edits) or validate (config, CLI) here first.

use tint_common::ColorError;

pub const MIN_COLOR_COUNT: usize = 2;
pub const MAX_COLOR_COUNT: usize = 20;
pub const MIN_CURVE: f64 = -1.0;
pub const MAX_CURVE: f64 = 1.0;

pub fn clamp_count(count: usize) -> usize {
    count.clamp(MIN_COLOR_COUNT, MAX_COLOR_COUNT)
}

/// Clamp into `[-1, 1]`. NaN becomes 0 (linear).
pub fn clamp_curve(curve: f64) -> f64 {
    if curve.is_nan() {
        return 0.0;
    }
    curve.clamp(MIN_CURVE, MAX_CURVE)
}

pub fn validate_count(count: usize) -> Result<usize, ColorError> {
    if (MIN_COLOR_COUNT..=MAX_COLOR_COUNT).contains(&count) {
        Ok(count)
    } else {
        Err(ColorError::Range(format!(
            "color count {count} is outside [{MIN_COLOR_COUNT}, {MAX_COLOR_COUNT}]"
        )))
    }
}

pub fn validate_curve(curve: f64) -> Result<f64, ColorError> {
    if (MIN_CURVE..=MAX_CURVE).contains(&curve) {
        Ok(curve)
    } else {
        Err(ColorError::Range(format!(
            "lightness curve {curve} is outside [{MIN_CURVE}, {MAX_CURVE}]"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_count_bounds() {
        assert_eq!(clamp_count(0), 2);
        assert_eq!(clamp_count(11), 11);
        assert_eq!(clamp_count(50), 20);
    }

    #[test]
    fn clamp_curve_bounds() {
        assert_eq!(clamp_curve(-3.0), -1.0);
        assert_eq!(clamp_curve(0.3), 0.3);
        assert_eq!(clamp_curve(7.0), 1.0);
        assert_eq!(clamp_curve(f64::NAN), 0.0);
    }

    #[test]
    fn validate_count_rejects_out_of_range() {
        assert_eq!(validate_count(2).unwrap(), 2);
        assert_eq!(validate_count(20).unwrap(), 20);
        assert!(matches!(validate_count(1), Err(ColorError::Range(_))));
        assert!(matches!(validate_count(21), Err(ColorError::Range(_))));
    }

    #[test]
    fn validate_curve_rejects_out_of_range_and_nan() {
        assert!(validate_curve(-1.0).is_ok());
        assert!(validate_curve(1.0).is_ok());
        assert!(validate_curve(1.01).is_err());
        assert!(validate_curve(f64::NAN).is_err());
        assert!(validate_curve(f64::INFINITY).is_err());
    }
}
