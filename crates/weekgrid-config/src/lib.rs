//! weekgrid configuration system.
//!
//! TOML configuration for the visible hour window, the subject color
//! palette, output formatting and logging. Every section has defaults, so
//! a partial (or missing) file works out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use weekgrid_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod colors;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

pub use schema::{WeekgridConfig, CONFIG_SCHEMA_VERSION};
pub use watcher::FileWatcher;

use std::path::Path;
use weekgrid_common::ConfigError;

/// Load config from the platform default path and validate it strictly.
///
/// Creates a commented default file if none exists.
pub fn load_config() -> Result<WeekgridConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it strictly.
pub fn load_config_from(path: &Path) -> Result<WeekgridConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &WeekgridConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
