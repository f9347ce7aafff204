//! Resolved runtime context: effective config, data file, store defaults.

use std::path::{Path, PathBuf};

use tint_common::TintError;
use tint_config::TintConfig;
use tint_store::{FileStorage, PaletteStore, StoreDefaults};
use tracing::{debug, info, warn};

pub struct Session {
    pub config: TintConfig,
    pub data_path: PathBuf,
    pub defaults: StoreDefaults,
}

impl Session {
    /// `--data` wins over `[storage] data_file`, which wins over the
    /// platform data directory.
    pub fn new(config: TintConfig, data_override: Option<PathBuf>) -> Result<Self, TintError> {
        let data_path = match data_override.or_else(|| config.storage.data_file.clone()) {
            Some(path) => path,
            None => tint_config::toml_loader::default_data_path()?,
        };
        debug!(path = %data_path.display(), "palette data file");
        let defaults = store_defaults(&config);
        Ok(Self {
            config,
            data_path,
            defaults,
        })
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Open the store backed by the data file.
    ///
    /// With autosave on, every mutation is written through immediately;
    /// otherwise callers save with [`Session::save`] when done. When there
    /// is no data file yet the store is seeded with one palette built from
    /// `[palette] default_base`.
    pub fn open_store(&self) -> Result<PaletteStore, TintError> {
        let storage = FileStorage::new(&self.data_path);
        let mut store = PaletteStore::new(self.defaults.clone());
        let loaded = store.load_from(&storage)?;
        if self.config.storage.autosave {
            store = store.with_storage(Box::new(storage));
        }
        if !loaded {
            let base = tint_config::colors::to_hex(&self.config.palette.default_base)?;
            store.create_palette(Some(&base))?;
            info!(base = %base, "seeded new palette store");
        }
        Ok(store)
    }

    /// Write the store to the data file when autosave is off.
    pub fn save(&self, store: &PaletteStore) -> Result<(), TintError> {
        if !self.config.storage.autosave {
            use tint_store::Storage;
            FileStorage::new(&self.data_path).save(&store.state())?;
        }
        Ok(())
    }
}

/// Store defaults from the `[palette]` and `[export]` sections.
///
/// Background colors are canonicalized to `#rrggbb`; an unreadable one falls
/// back to the built-in default.
pub fn store_defaults(config: &TintConfig) -> StoreDefaults {
    let builtin = StoreDefaults::default();
    let canonical = |value: &str, fallback: &str| {
        tint_config::colors::to_hex(value).unwrap_or_else(|e| {
            warn!("{e}, using {fallback}");
            fallback.to_string()
        })
    };
    StoreDefaults {
        color_count: config.palette.color_count,
        lightness_curve: config.palette.lightness_curve,
        light_bg: canonical(&config.palette.light_bg, &builtin.light_bg),
        dark_bg: canonical(&config.palette.dark_bg, &builtin.dark_bg),
        collection_name: config.export.collection_name.clone(),
        ..builtin
    }
}
