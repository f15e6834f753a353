//! Week layout: day grouping, column mapping, lane packing and the derived
//! header/size/day views a renderer needs.

mod calculation;
mod types;
pub mod views;


pub use calculation::build_layout;
pub use types::*;
pub use views::{grid_column_count, headers, max_rows, visible_days};
