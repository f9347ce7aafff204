//! Palette documents for tint.
//!
//! [`PaletteStore`] owns the list of palettes and the session settings,
//! hands out immutable [`StoreState`] snapshots, notifies subscribers after
//! every mutation and persists through an optional [`Storage`] backend.
//! The [`figma`] module converts palettes to and from Figma variable
//! collections.

pub mod figma;
pub mod model;
pub mod persistence;
pub mod store;

pub use figma::{export_to_figma_json, import_from_figma_json, FigmaImport};
pub use model::{
    default_step_names, BackgroundPreview, Mode, Palette, StoreDefaults, StoreState, Theme,
};
pub use persistence::{FileStorage, MemoryStorage, Storage};
pub use store::{PaletteStore, SubscriptionId};
