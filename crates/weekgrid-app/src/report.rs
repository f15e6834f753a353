//! JSON report emitted by `layout` and `watch`.

use serde::Serialize;
use weekgrid_common::DayOfWeek;
use weekgrid_layout::{VisualSession, WeekLayout};

/// Render-ready view of a [`WeekLayout`]: only the visible days, in
/// display order, each with its row count.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutReport<'a> {
    pub headers: &'a [String],
    pub grid_columns: u32,
    pub grid_template_columns: String,
    pub visible_days: &'a [DayOfWeek],
    pub days: Vec<DayReport<'a>>,
    pub dropped: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayReport<'a> {
    pub day: DayOfWeek,
    pub max_rows: usize,
    pub sessions: &'a [VisualSession],
}

impl<'a> LayoutReport<'a> {
    pub fn new(layout: &'a WeekLayout) -> Self {
        Self {
            headers: &layout.headers,
            grid_columns: layout.grid_columns,
            grid_template_columns: layout.grid_template_columns(),
            visible_days: &layout.visible_days,
            days: layout
                .rows()
                .map(|row| DayReport {
                    day: row.day,
                    max_rows: row.max_rows,
                    sessions: row.sessions,
                })
                .collect(),
            dropped: layout.dropped,
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
