pub mod errors;
pub mod types;

pub use errors::{ConfigError, InputError, WeekgridError};
pub use types::{
    default_palette, Color, ColorPair, CourseSession, DayKey, DayOfWeek, GridConfig, PaletteEntry,
    WEEKDAYS,
};

pub type Result<T> = std::result::Result<T, WeekgridError>;
