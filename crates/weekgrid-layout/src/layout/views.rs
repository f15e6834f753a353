//! Derived presentation views of a layout pass.

use weekgrid_common::{CourseSession, DayKey, DayOfWeek, GridConfig, WEEKDAYS};

use crate::column::{COLUMNS_PER_HOUR, LABEL_REGION_COLUMNS};

use super::{DayRow, VisualSession, WeekLayout};

/// Label of the corner cell above the day column.
pub const CORNER_HEADER: &str = "Day/Time";

/// Last hour a header or column can describe.
pub const MAX_CLOCK_HOUR: i32 = 24;

/// The hour window clamped to `0..=24`. Validated configs are already
/// inside it; anything wider would only describe hours no clock shows.
fn clock_window(grid: &GridConfig) -> (i32, i32) {
    (
        grid.start_hour.clamp(0, MAX_CLOCK_HOUR),
        grid.end_hour.clamp(0, MAX_CLOCK_HOUR),
    )
}

/// `"Day/Time"` followed by `"{hour}:00"` for every hour from `start_hour`
/// to `end_hour` inclusive, with both ends clamped to `0..=24`.
pub fn headers(grid: &GridConfig) -> Vec<String> {
    let (start, end) = clock_window(grid);
    std::iter::once(CORNER_HEADER.to_string())
        .chain((start..=end).map(|hour| format!("{hour}:00")))
        .collect()
}

/// `(end_hour - start_hour + 1) * 12 + 12` over the same clamped window as
/// [`headers`]; the hour span never goes below zero.
pub fn grid_column_count(grid: &GridConfig) -> u32 {
    let (start, end) = clock_window(grid);
    let hours = (end - start + 1).max(0);
    (hours * COLUMNS_PER_HOUR + LABEL_REGION_COLUMNS).unsigned_abs()
}

/// Weekdays, then Sat and Sun if any session normalizes to them.
pub fn visible_days(sessions: &[CourseSession]) -> Vec<DayOfWeek> {
    let has = |day: DayOfWeek| sessions.iter().any(|s| s.day_key() == DayKey::Day(day));
    let mut days = WEEKDAYS.to_vec();
    days.extend(
        [DayOfWeek::Sat, DayOfWeek::Sun]
            .into_iter()
            .filter(|day| has(*day)),
    );
    days
}

/// Stacked rows needed for one day: `1 + max(stack_index)`, or `1` when
/// the day is empty.
pub fn max_rows(sessions: &[VisualSession]) -> usize {
    sessions
        .iter()
        .map(|s| s.stack_index + 1)
        .max()
        .unwrap_or(1)
}

impl WeekLayout {
    pub fn sessions_for(&self, day: impl Into<DayKey>) -> &[VisualSession] {
        self.days
            .get(&day.into())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn max_rows(&self, day: impl Into<DayKey>) -> usize {
        max_rows(self.sessions_for(day))
    }

    /// CSS `grid-template-columns` value sized to [`WeekLayout::grid_columns`].
    pub fn grid_template_columns(&self) -> String {
        format!("repeat({}, minmax(0, 1fr))", self.grid_columns)
    }

    /// Visible days in render order with their sessions and row counts.
    pub fn rows(&self) -> impl Iterator<Item = DayRow<'_>> + '_ {
        self.visible_days.iter().map(|&day| {
            let sessions = self.sessions_for(day);
            DayRow {
                day,
                sessions,
                max_rows: max_rows(sessions),
            }
        })
    }

    /// Total placed sessions across all day groups.
    pub fn session_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}
