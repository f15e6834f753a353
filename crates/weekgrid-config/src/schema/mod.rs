//! Configuration schema types for weekgrid.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod palette;
mod system;

pub use palette::*;
pub use system::*;
pub use weekgrid_common::GridConfig;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for weekgrid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct WeekgridConfig {
    /// Visible hour window.
    pub grid: GridConfig,
    pub palette: PaletteConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_eight_to_six_window() {
        let config = WeekgridConfig::default();
        assert_eq!(config.grid.start_hour, 8);
        assert_eq!(config.grid.end_hour, 18);
    }

    #[test]
    fn default_config_has_builtin_palette() {
        let config = WeekgridConfig::default();
        let names: Vec<&str> = config.palette.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "pink", "yellow", "blue", "green", "orange", "purple", "red", "teal", "indigo",
                "deepGray"
            ]
        );
    }

    #[test]
    fn partial_toml_keeps_other_sections() {
        let toml_str = r#"
[grid]
end_hour = 20

[logging]
level = "warning"
"#;
        let config: WeekgridConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.grid.start_hour, 8);
        assert_eq!(config.grid.end_hour, 20);
        assert_eq!(config.logging.level, LogLevel::Warning);
        assert_eq!(config.palette, PaletteConfig::default());
        assert!(!config.output.pretty);
    }

    #[test]
    fn empty_toml_is_default() {
        let config: WeekgridConfig = toml::from_str("").unwrap();
        assert_eq!(config.grid, GridConfig::default());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = WeekgridConfig::default();
        config.grid.start_hour = 7;
        config.output.pretty = true;
        let text = toml::to_string(&config).unwrap();
        let parsed: WeekgridConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.grid.start_hour, 7);
        assert!(parsed.output.pretty);
        assert_eq!(parsed.palette, config.palette);
    }
}
