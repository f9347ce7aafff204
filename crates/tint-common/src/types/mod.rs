mod color;

pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ColorError;

    #[test]
    fn rgb8_from_hex_6() {
        let c = Rgb8::from_hex("#ff8800").unwrap();
        assert_eq!(c, Rgb8::new(255, 136, 0));
    }

    #[test]
    fn rgb8_from_hex_3_expands() {
        let c = Rgb8::from_hex("#f80").unwrap();
        assert_eq!(c, Rgb8::new(255, 136, 0));
    }

    #[test]
    fn rgb8_from_hex_no_hash() {
        let c = Rgb8::from_hex("00ff00").unwrap();
        assert_eq!(c, Rgb8::new(0, 255, 0));
    }

    #[test]
    fn rgb8_from_hex_uppercase() {
        let c = Rgb8::from_hex("#6366F1").unwrap();
        assert_eq!(c, Rgb8::new(0x63, 0x66, 0xf1));
    }

    #[test]
    fn rgb8_from_hex_invalid() {
        assert!(matches!(Rgb8::from_hex("zzzzzz"), Err(ColorError::Parse(_))));
        assert!(Rgb8::from_hex("#12345").is_err());
        assert!(Rgb8::from_hex("#ff880080").is_err());
        assert!(Rgb8::from_hex("").is_err());
        assert!(Rgb8::from_hex("#").is_err());
        assert!(Rgb8::from_hex("+f+f+f").is_err());
        assert!(Rgb8::from_hex("#ééé").is_err());
    }

    #[test]
    fn rgb8_to_hex_is_lowercase() {
        assert_eq!(Rgb8::new(255, 0, 128).to_hex(), "#ff0080");
    }

    #[test]
    fn rgb8_from_unit_clamps() {
        assert_eq!(Rgb8::from_unit(1.2, -0.3, 0.5), Rgb8::new(255, 0, 128));
    }

    #[test]
    fn rgb8_to_unit() {
        let (r, g, b) = Rgb8::new(255, 0, 51).to_unit();
        assert!((r - 1.0).abs() < f64::EPSILON);
        assert!(g.abs() < f64::EPSILON);
        assert!((b - 0.2).abs() < 1e-12);
    }

    #[test]
    fn rgb8_to_rgba_string() {
        assert_eq!(Rgb8::new(10, 20, 30).to_rgba_string(0.35), "rgba(10,20,30,0.35)");
    }

    #[test]
    fn rgb8_roundtrip_hex() {
        let original = Rgb8::new(171, 205, 239);
        let parsed = Rgb8::from_hex(&original.to_hex()).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn rgb8_serialization() {
        let c = Rgb8::new(1, 2, 3);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"r":1,"g":2,"b":3}"#);
        let back: Rgb8 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
