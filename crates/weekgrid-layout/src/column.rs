//! Time-to-column mapping.
//!
//! The grid runs at 5-minute resolution: twelve columns per hour, preceded
//! by a fixed label region. Mapping never clamps, so a session outside the
//! visible window lands outside the rendered columns instead of being
//! squashed onto the edge.

use weekgrid_common::GridConfig;

/// Wall-clock minutes covered by one grid column.
pub const MINUTES_PER_COLUMN: i32 = 5;

/// Grid columns per hour of wall-clock time.
pub const COLUMNS_PER_HOUR: i32 = 60 / MINUTES_PER_COLUMN;

/// Added to every mapped column to skip the day-label column and padding.
/// Must stay in sync with [`LABEL_REGION_COLUMNS`].
pub const LABEL_COLUMN_OFFSET: i32 = 13;

/// Columns reserved for the label region when sizing the grid.
pub const LABEL_REGION_COLUMNS: i32 = 12;

/// Column value the legacy mapper returns for unparseable input.
pub const INVALID_COLUMN: i32 = 0;

/// An `HH:MM` reading. Values are not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: i32,
    pub minute: i32,
}

/// Parse `HH:MM`. A trailing `:SS` part is accepted and ignored, and a
/// blank hour or minute reads as `0` (`"08:"` is `08:00`).
///
/// Returns `None` for a missing separator or a non-integer hour or minute.
pub fn parse_clock(text: &str) -> Option<ClockTime> {
    let mut parts = text.split(':');
    let hour = parse_part(parts.next()?)?;
    let minute = parse_part(parts.next()?)?;
    Some(ClockTime { hour, minute })
}

fn parse_part(part: &str) -> Option<i32> {
    match part.trim() {
        "" => Some(0),
        digits => digits.parse().ok(),
    }
}

/// Map a time string to its grid column, or `None` if it cannot be parsed.
///
/// `column = (hour - start_hour) * 12 + floor(minute / 5) + 13`
pub fn column_for(text: &str, config: &GridConfig) -> Option<i32> {
    let time = parse_clock(text)?;
    time.hour
        .checked_sub(config.start_hour)?
        .checked_mul(COLUMNS_PER_HOUR)?
        .checked_add(time.minute.div_euclid(MINUTES_PER_COLUMN))?
        .checked_add(LABEL_COLUMN_OFFSET)
}

/// Sentinel form of [`column_for`]: unparseable input maps to
/// [`INVALID_COLUMN`]. Callers treat any result `<= 0` as unplaceable.
pub fn map_time_to_column(text: &str, config: &GridConfig) -> i32 {
    column_for(text, config).unwrap_or(INVALID_COLUMN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> GridConfig {
        GridConfig::new(8, 18)
    }

    #[test]
    fn start_of_window_is_first_data_column() {
        assert_eq!(map_time_to_column("08:00", &cfg()), 13);
    }

    #[test]
    fn minutes_quantize_down_to_five() {
        assert_eq!(map_time_to_column("08:04", &cfg()), 13);
        assert_eq!(map_time_to_column("08:05", &cfg()), 14);
        assert_eq!(map_time_to_column("08:59", &cfg()), 24);
        assert_eq!(map_time_to_column("09:00", &cfg()), 25);
        assert_eq!(map_time_to_column("10:30", &cfg()), 13 + 24 + 6);
    }

    #[test]
    fn start_hour_shifts_columns() {
        let late = GridConfig::new(9, 17);
        assert_eq!(map_time_to_column("09:00", &late), 13);
        assert_eq!(map_time_to_column("08:00", &late), 1);
    }

    #[test]
    fn no_clamping_outside_window() {
        // An hour before the window still yields a positive column.
        assert_eq!(map_time_to_column("07:00", &cfg()), 1);
        assert_eq!(map_time_to_column("06:55", &cfg()), 0);
        assert_eq!(map_time_to_column("06:00", &cfg()), -11);
        assert_eq!(map_time_to_column("23:00", &cfg()), 13 + 15 * 12);
    }

    #[test]
    fn unparseable_returns_sentinel() {
        for bad in ["", "bad", "ab:cd", "08", "8.5:00", "08h30", "08:x"] {
            assert_eq!(map_time_to_column(bad, &cfg()), INVALID_COLUMN, "{bad:?}");
            assert_eq!(column_for(bad, &cfg()), None, "{bad:?}");
        }
    }

    #[test]
    fn blank_parts_read_as_zero() {
        assert_eq!(parse_clock("08:"), Some(ClockTime { hour: 8, minute: 0 }));
        assert_eq!(map_time_to_column("08:", &cfg()), 13);
        assert_eq!(map_time_to_column("08: ", &cfg()), 13);
        // Hour 0 lands far left of the window.
        assert_eq!(map_time_to_column(":30", &cfg()), -77);
    }

    #[test]
    fn seconds_are_ignored() {
        assert_eq!(
            map_time_to_column("08:30:45", &cfg()),
            map_time_to_column("08:30", &cfg())
        );
    }

    #[test]
    fn whitespace_around_parts_is_tolerated() {
        assert_eq!(parse_clock(" 8 : 05 "), Some(ClockTime { hour: 8, minute: 5 }));
    }

    #[test]
    fn single_digit_hours_parse() {
        assert_eq!(map_time_to_column("9:00", &cfg()), 25);
    }

    #[test]
    fn overflow_is_treated_as_unparseable() {
        assert_eq!(column_for("2147483647:00", &cfg()), None);
    }

    #[test]
    fn strictly_increasing_across_slots() {
        let mut previous = None;
        for minutes in (0..(10 * 60)).step_by(5) {
            let text = format!("{:02}:{:02}", 8 + minutes / 60, minutes % 60);
            let col = map_time_to_column(&text, &cfg());
            if let Some(prev) = previous {
                assert!(col > prev, "{text} mapped to {col}, not after {prev}");
            }
            previous = Some(col);
        }
    }
}
