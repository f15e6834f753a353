//! Weekly timetable layout.
//!
//! Turns a flat list of course sessions into grid coordinates: every
//! session gets a start/end column at 5-minute resolution, a lane among
//! same-day overlaps, and a color keyed by its subject code.

pub mod column;
pub mod lanes;
pub mod layout;
pub mod palette;

pub use column::{column_for, map_time_to_column};
pub use lanes::assign_lanes;
pub use layout::{build_layout, DayRow, LayoutEngine, VisualSession, WeekLayout};
pub use palette::{color_for, Palette};
