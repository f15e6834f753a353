//! Grid window validation (hour bounds and ordering).

use crate::schema::WeekgridConfig;

use super::helpers::validate_range;

pub(crate) fn validate_grid(errors: &mut Vec<String>, config: &WeekgridConfig) {
    let grid = &config.grid;
    validate_range(errors, "grid.start_hour", grid.start_hour, 0, 23);
    validate_range(errors, "grid.end_hour", grid.end_hour, 1, 24);
    if grid.start_hour >= grid.end_hour {
        errors.push(format!(
            "grid.start_hour ({}) must be before grid.end_hour ({})",
            grid.start_hour, grid.end_hour
        ));
    }
}
