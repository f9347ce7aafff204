//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod misc;
mod palette;

#[cfg(test)]
mod tests;

use crate::schema::TintConfig;
use tint_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TintConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    palette::validate_palette(&mut errors, config);
    misc::validate_storage(&mut errors, config);
    misc::validate_export(&mut errors, config);
    misc::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
