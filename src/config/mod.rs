//! Configuration loading.
//!
//! Settings live in a TOML file; every section and field is optional and
//! falls back to defaults that target the public 6 cities backend.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LoggingConfig, StorageConfig};
