//! sRGB gamut test and chroma-reducing gamut mapping.

use crate::convert::{oklch_to_linear, Oklch};

/// Per-channel slack allowed outside `[0, 1]` before a color counts as out of gamut.
pub const GAMUT_EPSILON: f64 = 0.001;

/// Bisection stops once the chroma interval is this narrow.
pub const CHROMA_TOLERANCE: f64 = 1e-4;

/// Whether the OKLCh color encodes to sRGB channels within `[-ε, 1+ε]`.
pub fn is_in_gamut(l: f64, c: f64, h: f64) -> bool {
    let srgb = oklch_to_linear(l, c, h).to_srgb_unclamped();
    [srgb.r, srgb.g, srgb.b]
        .iter()
        .all(|v| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(v))
}

/// Reduce chroma until the color fits in sRGB, holding `l` and `h` fixed.
///
/// In-gamut input is returned unchanged. Otherwise chroma is bisected on
/// `[0, c]`, always keeping the in-gamut end, so the result is in gamut and
/// as saturated as the tolerance allows. This relies on gamut membership
/// being monotone in chroma for fixed lightness and hue.
pub fn gamut_map_oklch(l: f64, c: f64, h: f64) -> Oklch {
    if is_in_gamut(l, c, h) {
        return Oklch::new(l, c, h);
    }
    let mut lo = 0.0;
    let mut hi = c;
    while hi - lo > CHROMA_TOLERANCE {
        let mid = (lo + hi) / 2.0;
        if is_in_gamut(l, mid, h) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Oklch::new(l, lo, h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::hex_to_oklch;

    #[test]
    fn hex_colors_are_in_gamut() {
        for hex in ["#000000", "#ffffff", "#ff0000", "#00ff00", "#0000ff", "#6366f1"] {
            let c = hex_to_oklch(hex).unwrap();
            assert!(is_in_gamut(c.l, c.c, c.h), "{hex} reported out of gamut");
        }
    }

    #[test]
    fn grays_are_in_gamut() {
        for i in 0..=20 {
            let l = i as f64 / 20.0;
            assert!(is_in_gamut(l, 0.0, 0.0), "L = {l}");
        }
    }

    #[test]
    fn extreme_chroma_is_out_of_gamut() {
        assert!(!is_in_gamut(0.7, 0.4, 150.0));
        assert!(!is_in_gamut(0.95, 0.2, 264.0));
    }

    #[test]
    fn in_gamut_input_is_unchanged() {
        let c = hex_to_oklch("#6366f1").unwrap();
        let mapped = gamut_map_oklch(c.l, c.c, c.h);
        assert_eq!(mapped, c);
    }

    #[test]
    fn mapping_reduces_only_chroma() {
        let mapped = gamut_map_oklch(0.7, 0.4, 150.0);
        assert_eq!(mapped.l, 0.7);
        assert_eq!(mapped.h, 150.0);
        assert!(mapped.c < 0.4);
        assert!(mapped.c > 0.0);
        assert!(is_in_gamut(mapped.l, mapped.c, mapped.h));
    }

    #[test]
    fn mapping_lands_near_the_boundary() {
        let mapped = gamut_map_oklch(0.7, 0.4, 150.0);
        assert!(!is_in_gamut(mapped.l, mapped.c + 2.0 * CHROMA_TOLERANCE, mapped.h));
    }

    #[test]
    fn very_light_blue_desaturates() {
        let mapped = gamut_map_oklch(0.95, 0.2, 264.0);
        assert!(mapped.c < 0.1);
        assert!(is_in_gamut(mapped.l, mapped.c, mapped.h));
    }
}
