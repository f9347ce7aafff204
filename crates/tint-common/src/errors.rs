use std::path::PathBuf;

/// Errors raised by the color engine for caller contract violations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color: {0}")]
    Parse(String),

    #[error("value out of range: {0}")]
    Range(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("palette not found: {0}")]
    PaletteNotFound(String),

    #[error("mode not found: {0}")]
    ModeNotFound(String),

    #[error("step {index} out of range (palette has {len} steps)")]
    StepOutOfRange { index: usize, len: usize },

    #[error("{operation} does not apply to {kind} palettes")]
    KindMismatch { operation: String, kind: String },

    #[error("storage error: {0}")]
    Storage(String),

    #[error("import error: {0}")]
    Import(String),

    #[error(transparent)]
    Color(#[from] ColorError),
}

#[derive(Debug, thiserror::Error)]
pub enum TintError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_error_display() {
        let err = ColorError::Parse("#12".into());
        assert_eq!(err.to_string(), "invalid hex color: #12");

        let err = ColorError::Range("count = 0".into());
        assert_eq!(err.to_string(), "value out of range: count = 0");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("palette.color_count".into());
        assert_eq!(
            err.to_string(),
            "config validation error: palette.color_count"
        );
    }

    #[test]
    fn store_error_display() {
        let err = StoreError::PaletteNotFound("abc".into());
        assert_eq!(err.to_string(), "palette not found: abc");

        let err = StoreError::StepOutOfRange { index: 12, len: 11 };
        assert_eq!(err.to_string(), "step 12 out of range (palette has 11 steps)");

        let err = StoreError::Import("missing variables".into());
        assert_eq!(err.to_string(), "import error: missing variables");

        let err = StoreError::KindMismatch {
            operation: "update_color_alpha".into(),
            kind: "lightness".into(),
        };
        assert_eq!(
            err.to_string(),
            "update_color_alpha does not apply to lightness palettes"
        );
    }

    #[test]
    fn store_error_from_color() {
        let err: StoreError = ColorError::Parse("zz".into()).into();
        assert!(matches!(err, StoreError::Color(_)));
        assert!(err.to_string().contains("zz"));
    }

    #[test]
    fn tint_error_from_store() {
        let store_err = StoreError::ModeNotFound("dark".into());
        let err: TintError = store_err.into();
        assert!(matches!(err, TintError::Store(_)));
        assert!(err.to_string().contains("dark"));
    }

    #[test]
    fn tint_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: TintError = io_err.into();
        assert!(matches!(err, TintError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }
}
