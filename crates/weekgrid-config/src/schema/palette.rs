//! Subject color palette configuration.

use serde::{Deserialize, Serialize};
use weekgrid_common::{default_palette, PaletteEntry};

/// Ordered palette table. Replacing it changes colors, never the
/// subject-to-row hashing.
///
/// ```toml
/// [[palette.entries]]
/// name = "pink"
/// background = "#FDD8EE"
/// border = "#C7117F"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub entries: Vec<PaletteEntry>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            entries: default_palette(),
        }
    }
}
