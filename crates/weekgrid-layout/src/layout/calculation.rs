//! Layout calculation: group by day, map columns, pack lanes.

use std::collections::BTreeMap;

use tracing::debug;
use weekgrid_common::{CourseSession, DayKey, GridConfig};

use crate::column::column_for;
use crate::lanes::assign_lanes;
use crate::palette::Palette;

use super::views::{grid_column_count, headers, visible_days};
use super::{LayoutEngine, VisualSession, WeekLayout};

impl LayoutEngine {
    /// Build the full week layout from scratch.
    ///
    /// Pure: the same sessions and engine settings always produce the same
    /// layout, and no state carries over between calls.
    pub fn compute(&self, sessions: &[CourseSession]) -> WeekLayout {
        let mut days: BTreeMap<DayKey, Vec<VisualSession>> = BTreeMap::new();
        let mut dropped = 0;

        for session in sessions {
            let Some(placed) = self.place(session) else {
                debug!(
                    id = %session.id,
                    subject = %session.subject_code,
                    time_from = %session.time_from,
                    "dropping session with unplaceable start time"
                );
                dropped += 1;
                continue;
            };
            days.entry(session.day_key()).or_default().push(placed);
        }

        for placed in days.values_mut() {
            *placed = assign_lanes(std::mem::take(placed));
        }

        debug!(
            sessions = sessions.len(),
            days = days.len(),
            dropped,
            "computed week layout"
        );

        WeekLayout {
            grid: self.grid,
            days,
            headers: headers(&self.grid),
            grid_columns: grid_column_count(&self.grid),
            visible_days: visible_days(sessions),
            dropped,
        }
    }

    /// Attach grid coordinates and color. `None` when the start column is
    /// unparseable or not positive.
    fn place(&self, session: &CourseSession) -> Option<VisualSession> {
        let start_col = column_for(&session.time_from, &self.grid).filter(|col| *col > 0)?;
        let end_col = column_for(&session.time_to, &self.grid).unwrap_or(0);
        Some(VisualSession {
            session: session.clone(),
            start_col,
            end_col,
            stack_index: 0,
            color: self.palette.color_for(&session.subject_code),
        })
    }
}

/// One-shot layout without holding on to an engine.
pub fn build_layout(
    sessions: &[CourseSession],
    grid: &GridConfig,
    palette: &Palette,
) -> WeekLayout {
    LayoutEngine::new(*grid, palette.clone()).compute(sessions)
}
