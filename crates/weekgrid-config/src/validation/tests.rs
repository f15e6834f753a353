//! Tests for the full validation pipeline.

use super::*;
use weekgrid_common::PaletteEntry;

#[test]
fn default_config_validates() {
    let config = WeekgridConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn full_day_window_validates() {
    let mut config = WeekgridConfig::default();
    config.grid.start_hour = 0;
    config.grid.end_hour = 24;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_start_hour_out_of_range() {
    let mut config = WeekgridConfig::default();
    config.grid.start_hour = -1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("grid.start_hour = -1"));
}

#[test]
fn catches_end_hour_out_of_range() {
    let mut config = WeekgridConfig::default();
    config.grid.end_hour = 25;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("grid.end_hour = 25"));
}

#[test]
fn catches_inverted_window() {
    let mut config = WeekgridConfig::default();
    config.grid.start_hour = 18;
    config.grid.end_hour = 8;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("must be before grid.end_hour"));
}

#[test]
fn catches_empty_window() {
    let mut config = WeekgridConfig::default();
    config.grid.start_hour = 10;
    config.grid.end_hour = 10;
    assert!(validate(&config).is_err());
}

#[test]
fn catches_empty_palette() {
    let mut config = WeekgridConfig::default();
    config.palette.entries.clear();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("at least one color"));
}

#[test]
fn catches_bad_palette_color() {
    let mut config = WeekgridConfig::default();
    config.palette.entries[3].border = "green".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("palette.entries[3].border"));
}

#[test]
fn catches_duplicate_palette_name() {
    let mut config = WeekgridConfig::default();
    config
        .palette
        .entries
        .push(PaletteEntry::new("pink", "#FFFFFF", "#000000"));
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("palette.entries[10].name"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = WeekgridConfig::default();
    config.grid.end_hour = 30;
    config.palette.entries[0].background = "nope".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("grid.end_hour"));
    assert!(err.contains("palette.entries[0].background"));
    assert!(err.contains("; "));
}
