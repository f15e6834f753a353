mod color;
mod day;
mod grid;
mod session;

pub use color::*;
pub use day::*;
pub use grid::*;
pub use session::*;
