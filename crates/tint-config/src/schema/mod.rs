//! Configuration schema types for Tint.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults below.

mod export;
mod logging;
mod palette;
mod storage;

pub use export::*;
pub use logging::*;
pub use palette::*;
pub use storage::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Tint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct TintConfig {
    pub palette: PaletteConfig,
    pub storage: StorageConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
