//! The PaletteStore owns the document and applies every edit to it.

mod colors;
mod modes;
mod palettes;
mod settings;
mod types;

pub use types::*;
