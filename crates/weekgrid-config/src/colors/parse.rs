//! Regexes and the `rgb()`/`rgba()` parser behind [`super::parse_color`].

use regex::Regex;
use std::sync::LazyLock;
use weekgrid_common::Color;

/// `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

/// `rgb(r,g,b)` or `rgba(r,g,b,a)` with an integer or fractional alpha.
pub(crate) static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
    )
    .unwrap()
});

/// Parse `rgb(...)`/`rgba(...)`. Alpha containing a `.` is a 0.0-1.0
/// fraction, otherwise a 0-255 integer. `rgb` must not carry alpha and
/// `rgba` must.
pub(super) fn parse_functional(s: &str) -> Option<Color> {
    let caps = RGB_RE.captures(s)?;
    let has_alpha = caps.get(4).is_some();
    if s.starts_with("rgba") != has_alpha {
        return None;
    }

    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;

    let a = match caps.get(4).map(|m| m.as_str()) {
        None => 255,
        Some(text) if text.contains('.') => {
            let fraction: f64 = text.parse().ok()?;
            if !(0.0..=1.0).contains(&fraction) {
                return None;
            }
            (fraction * 255.0).round() as u8
        }
        Some(text) => text.parse::<u8>().ok()?,
    };

    Some(Color::from_rgba(r, g, b, a))
}
