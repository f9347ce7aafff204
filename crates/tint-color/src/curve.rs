//! Shaped lightness sequences for ramps.

/// Darkest lightness a ramp reaches.
pub const LIGHTNESS_MIN: f64 = 0.05;
/// Lightest lightness a ramp reaches.
pub const LIGHTNESS_MAX: f64 = 0.95;
/// Span from darkest to lightest.
pub const LIGHTNESS_SPAN: f64 = 0.90;

/// Smallest exponent the warp may use. Curves above ~0.32 would otherwise
/// drive `1 - 3·curve` to zero or below, which is flat or non-monotonic.
pub const MIN_WARP_EXPONENT: f64 = 0.05;

/// Generate `count` lightness targets in `[0.05, 0.95]`, ordered dark to light.
///
/// `curve = 0` spaces them evenly. Other values warp the spacing around
/// the midpoint with exponent `1 - 3·curve`: positive curves pull the
/// interior steps toward the middle, negative curves push them toward the
/// ends. The output is non-decreasing for every curve.
///
/// Precondition: `count` in `2..=20` and `curve` in `[-1, 1]` (see
/// [`crate::limits`]). `count == 1` yields the midpoint and `count == 0`
/// an empty vector; neither is rejected.
pub fn generate_lightness_values(count: usize, curve: f64) -> Vec<f64> {
    if count == 1 {
        return vec![to_lightness(0.5)];
    }
    let last = count.saturating_sub(1) as f64;
    (0..count)
        .map(|i| {
            let t = i as f64 / last;
            let t = if curve == 0.0 { t } else { warp(t, curve) };
            to_lightness(t)
        })
        .collect()
}

fn to_lightness(t: f64) -> f64 {
    // 0.05 + 0.90 rounds to 0.9500000000000001 in f64.
    (LIGHTNESS_MIN + LIGHTNESS_SPAN * t).clamp(LIGHTNESS_MIN, LIGHTNESS_MAX)
}

/// Symmetric power warp of `t ∈ [0, 1]` around 0.5.
fn warp(t: f64, curve: f64) -> f64 {
    // Endpoints are fixed; this also keeps a zero base away from powf.
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let exponent = (1.0 - curve * 3.0).max(MIN_WARP_EXPONENT);
    if t < 0.5 {
        0.5 * (2.0 * t).powf(exponent)
    } else {
        1.0 - 0.5 * (2.0 * (1.0 - t)).powf(exponent)
    }
}
