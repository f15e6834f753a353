//! Palette validation: non-empty, parseable colors, unique names.

use std::collections::HashSet;

use crate::colors::validate_color;
use crate::schema::WeekgridConfig;

pub(crate) fn validate_palette(errors: &mut Vec<String>, config: &WeekgridConfig) {
    let entries = &config.palette.entries;
    if entries.is_empty() {
        errors.push("palette.entries must contain at least one color".into());
        return;
    }

    let mut seen = HashSet::new();
    for (i, entry) in entries.iter().enumerate() {
        if !validate_color(&entry.background) {
            errors.push(format!(
                "palette.entries[{i}].background = {:?} is not a valid color",
                entry.background
            ));
        }
        if !validate_color(&entry.border) {
            errors.push(format!(
                "palette.entries[{i}].border = {:?} is not a valid color",
                entry.border
            ));
        }
        if !seen.insert(entry.name.as_str()) {
            errors.push(format!(
                "palette.entries[{i}].name = {:?} is a duplicate",
                entry.name
            ));
        }
    }
}
