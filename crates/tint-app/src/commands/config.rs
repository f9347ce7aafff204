//! `tint config` subcommands.

use std::path::{Path, PathBuf};

use tint_common::{ConfigError, Result, TintError};
use tint_config::toml_loader::{create_default_config, default_config_path, load_from_path};
use tint_config::TintConfig;
use tracing::info;

use crate::cli::ConfigCommand;
use crate::session::Session;

/// Keys accepted by `config set`.
const SETTABLE_KEYS: &[&str] = &[
    "palette.color_count",
    "palette.lightness_curve",
    "palette.light_bg",
    "palette.dark_bg",
    "palette.default_base",
    "storage.data_file",
    "storage.autosave",
    "export.collection_name",
    "logging.level",
];

pub fn run(command: ConfigCommand, session: &Session, config_path: Option<&Path>) -> Result<()> {
    match command {
        ConfigCommand::Init { force } => {
            let path = resolve_path(config_path)?;
            if path.exists() && !force {
                return Err(TintError::Other(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            create_default_config(&path)?;
            println!("wrote {}", path.display());
        }
        ConfigCommand::Show => {
            println!("{}", tint_config::config_to_json(&session.config));
        }
        ConfigCommand::Set { key, value } => {
            let path = set(config_path, &key, &value)?;
            println!("{key} = {value} ({})", path.display());
        }
    }
    Ok(())
}

/// Update one key in the config file and write it back. Returns the path written.
///
/// The file on disk is the starting point, not the session's effective
/// config, so a broken file is reported instead of being replaced by defaults.
pub fn set(config_path: Option<&Path>, key: &str, value: &str) -> Result<PathBuf> {
    let path = resolve_path(config_path)?;
    let mut config = if path.exists() {
        load_from_path(&path)?
    } else {
        TintConfig::default()
    };

    apply_setting(&mut config, key, value)?;
    tint_config::validation::validate(&config)?;

    match config_path {
        Some(path) => tint_config::save_config_to_path(&config, path)?,
        None => tint_config::save_config(&config)?,
    }
    info!(key, value, path = %path.display(), "config updated");
    Ok(path)
}

fn resolve_path(config_path: Option<&Path>) -> Result<PathBuf> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(default_config_path()?),
    }
}

fn apply_setting(config: &mut TintConfig, key: &str, value: &str) -> std::result::Result<(), ConfigError> {
    match key {
        "palette.color_count" => {
            config.palette.color_count = value.parse::<usize>().map_err(|e| invalid(key, e))?;
        }
        "palette.lightness_curve" => {
            config.palette.lightness_curve = value.parse::<f64>().map_err(|e| invalid(key, e))?;
        }
        "palette.light_bg" => config.palette.light_bg = value.to_string(),
        "palette.dark_bg" => config.palette.dark_bg = value.to_string(),
        "palette.default_base" => config.palette.default_base = value.to_string(),
        // An empty value goes back to the platform data directory.
        "storage.data_file" => {
            config.storage.data_file = (!value.is_empty()).then(|| PathBuf::from(value));
        }
        "storage.autosave" => {
            config.storage.autosave = value.parse::<bool>().map_err(|e| invalid(key, e))?;
        }
        "export.collection_name" => config.export.collection_name = value.to_string(),
        "logging.level" => config.logging.level = value.to_string(),
        _ => {
            return Err(ConfigError::ValidationError(format!(
                "unknown config key: {key} (expected one of {})",
                SETTABLE_KEYS.join(", ")
            )))
        }
    }
    Ok(())
}

fn invalid(key: &str, e: impl std::fmt::Display) -> ConfigError {
    ConfigError::ParseError(format!("{key}: {e}"))
}
