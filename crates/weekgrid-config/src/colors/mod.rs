//! Palette color parsing and validation.
//!
//! Palette strings are handed to the renderer as-is, so this module only
//! checks that they are CSS colors a renderer will accept: `#RGB`,
//! `#RRGGBB`, `#RRGGBBAA`, `rgb(r,g,b)` or `rgba(r,g,b,a)`.

mod parse;


use weekgrid_common::{Color, ConfigError};

use parse::{parse_functional, HEX_RE, RGB_RE};

/// Parse a palette color string into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();

    if s.starts_with('#') {
        return Color::from_hex(s)
            .ok_or_else(|| ConfigError::ParseError(format!("invalid hex color: {s}")));
    }

    if s.starts_with("rgb") {
        return parse_functional(s)
            .ok_or_else(|| ConfigError::ParseError(format!("invalid rgb color: {s}")));
    }

    Err(ConfigError::ParseError(format!(
        "unrecognized color format: {s}"
    )))
}

/// Whether `s` is a color string [`parse_color`] would accept.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.starts_with('#') {
        return HEX_RE.is_match(s);
    }
    if s.starts_with("rgb") {
        return RGB_RE.is_match(s) && parse_functional(s).is_some();
    }
    false
}
