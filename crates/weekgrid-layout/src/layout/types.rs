//! Layout engine types: the per-session render record and the week result.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use weekgrid_common::{ColorPair, CourseSession, DayKey, DayOfWeek, GridConfig};

use crate::palette::Palette;

/// A course session placed on the grid.
///
/// Always rebuilt from its [`CourseSession`] by [`LayoutEngine::compute`];
/// nothing mutates a placed session after the fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualSession {
    #[serde(flatten)]
    pub session: CourseSession,
    /// First grid column covered (inclusive).
    pub start_col: i32,
    /// Column at which the session ends (exclusive).
    pub end_col: i32,
    /// Lane among overlapping sessions of the same day, from 0.
    pub stack_index: usize,
    pub color: ColorPair,
}

impl VisualSession {
    /// Half-open `[start_col, end_col)` intersection test.
    pub fn overlaps(&self, other: &VisualSession) -> bool {
        self.start_col < other.end_col && other.start_col < self.end_col
    }
}

/// Maps course sessions onto the weekly grid.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    /// Visible hour window.
    pub grid: GridConfig,
    /// Subject color table.
    pub palette: Palette,
}

impl LayoutEngine {
    pub fn new(grid: GridConfig, palette: Palette) -> Self {
        Self { grid, palette }
    }
}

/// Render-ready result of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekLayout {
    pub grid: GridConfig,
    /// Lane-packed sessions per normalized day, each list in placement order.
    pub days: BTreeMap<DayKey, Vec<VisualSession>>,
    /// `"Day/Time"` followed by one `"{hour}:00"` label per visible hour.
    pub headers: Vec<String>,
    /// Total grid columns including the label region.
    pub grid_columns: u32,
    /// Mon-Fri, plus Sat and Sun when any input session falls on them.
    pub visible_days: Vec<DayOfWeek>,
    /// Sessions left out because their start column was not positive.
    pub dropped: usize,
}

/// One visible day of a [`WeekLayout`], ready to render as a grid row group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayRow<'a> {
    pub day: DayOfWeek,
    pub sessions: &'a [VisualSession],
    pub max_rows: usize,
}
