pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ColorError, ConfigError, StoreError, TintError};
pub use id::{short_id, ModeId, PaletteId};
pub use types::Rgb8;

pub type Result<T> = std::result::Result<T, TintError>;
