//! Layered configuration for Marquee: `.env` file, environment variables,
//! an optional TOML file, then built-in defaults.

pub mod loader;
pub mod models;
pub mod sources;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader};
pub use models::{
    ApiKey, Config, ConfigMetadata, DEFAULT_API_BASE_URL, DEFAULT_LANGUAGE,
    HomeConfig, TmdbConfig,
};
pub use sources::{EnvConfig, FileConfig};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
