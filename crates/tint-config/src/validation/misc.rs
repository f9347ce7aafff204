//! Validation for the smaller sections: storage, export, and logging.

use crate::schema::TintConfig;

pub(crate) fn validate_storage(errors: &mut Vec<String>, config: &TintConfig) {
    if let Some(path) = &config.storage.data_file {
        if path.as_os_str().is_empty() {
            errors.push("storage.data_file must not be empty when set".into());
        }
    }
}

pub(crate) fn validate_export(errors: &mut Vec<String>, config: &TintConfig) {
    if config.export.collection_name.trim().is_empty() {
        errors.push("export.collection_name must not be empty".into());
    }
}

/// Validate logging level is a non-empty filter directive.
pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &TintConfig) {
    if config.logging.level.trim().is_empty() {
        errors.push("logging.level must not be empty".into());
    }
}
