use serde::{Deserialize, Serialize};

/// Visible hour window of the weekly grid.
///
/// `start_hour` anchors column mapping; `end_hour` only affects the header
/// labels and the grid width. Sessions outside the window are not clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub start_hour: i32,
    pub end_hour: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start_hour: 8,
            end_hour: 18,
        }
    }
}

impl GridConfig {
    pub fn new(start_hour: i32, end_hour: i32) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }
}

/// Fill and border styling for one rendered session block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorPair {
    pub background: String,
    pub border: String,
}

/// One row of the subject color palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    pub background: String,
    pub border: String,
}

impl PaletteEntry {
    pub fn new(
        name: impl Into<String>,
        background: impl Into<String>,
        border: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            background: background.into(),
            border: border.into(),
        }
    }

    pub fn colors(&self) -> ColorPair {
        ColorPair {
            background: self.background.clone(),
            border: self.border.clone(),
        }
    }
}

/// The built-in ten-color subject palette.
pub fn default_palette() -> Vec<PaletteEntry> {
    [
        ("pink", "#FDD8EE", "#C7117F"),
        ("yellow", "#FFF2C4", "#EB9C03"),
        ("blue", "#DAEFFE", "#0C5A93"),
        ("green", "#D1FEB6", "#4B991C"),
        ("orange", "#FFE2BF", "#D67F19"),
        ("purple", "#F3D6FD", "#681A83"),
        ("red", "#FDDBDB", "#B10C0C"),
        ("teal", "#D9FFF6", "#349A82"),
        ("indigo", "#DCD7FF", "#211090"),
        ("deepGray", "#E3E5F8", "#2A2D48"),
    ]
    .into_iter()
    .map(|(name, background, border)| PaletteEntry::new(name, background, border))
    .collect()
}
