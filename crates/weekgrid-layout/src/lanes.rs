//! Lane packing for overlapping sessions within a single day.
//!
//! Greedy interval partitioning: sessions are visited by start column and
//! each one takes the lowest lane that is already free, so the number of
//! lanes equals the deepest overlap on that day.

use crate::layout::VisualSession;

/// Assign `stack_index` to every session of one day.
///
/// Sessions are sorted by `start_col` ascending, ties by `end_col`
/// descending, and returned in that order. A lane is free for a session
/// once its last occupant ends at or before the session's start, so
/// touching sessions share a lane.
pub fn assign_lanes(mut sessions: Vec<VisualSession>) -> Vec<VisualSession> {
    sessions.sort_by(|a, b| {
        a.start_col
            .cmp(&b.start_col)
            .then_with(|| b.end_col.cmp(&a.end_col))
    });

    // Column at which each open lane becomes free.
    let mut lane_ends: Vec<i32> = Vec::new();

    for session in &mut sessions {
        let lane = match lane_ends.iter().position(|&end| end <= session.start_col) {
            Some(free) => {
                lane_ends[free] = session.end_col;
                free
            }
            None => {
                lane_ends.push(session.end_col);
                lane_ends.len() - 1
            }
        };
        session.stack_index = lane;
    }

    sessions
}

/// Number of lanes in use, `0` for an empty day.
pub fn lane_count(sessions: &[VisualSession]) -> usize {
    sessions
        .iter()
        .map(|s| s.stack_index + 1)
        .max()
        .unwrap_or(0)
}
