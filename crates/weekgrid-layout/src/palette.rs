//! Subject color assignment.
//!
//! A subject code hashes to a fixed palette row, so every session of the
//! same subject shares one color no matter what else is on the timetable.

use weekgrid_common::{default_palette, ColorPair, PaletteEntry};

/// Rolling 31-multiplier hash over UTF-16 code units:
/// `hash = c + ((hash << 5) - hash)`.
///
/// Only the shift is 32-bit: the accumulator is truncated to `i32` before
/// `<< 5` and the shifted value wraps, while the subtraction and addition
/// run on the wide accumulator. Long codes can therefore leave the `i32`
/// range, e.g. `"01418112"` hashes to `4124210200`.
pub fn subject_hash(code: &str) -> i64 {
    code.encode_utf16().fold(0i64, |hash, unit| {
        let shifted = i64::from((hash as i32).wrapping_shl(5));
        i64::from(unit).wrapping_add(shifted).wrapping_sub(hash)
    })
}

/// An ordered, non-empty table of subject colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Returns `None` for an empty table.
    pub fn new(entries: Vec<PaletteEntry>) -> Option<Self> {
        if entries.is_empty() {
            None
        } else {
            Some(Self { entries })
        }
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index_for(&self, subject_code: &str) -> usize {
        let hash = subject_hash(subject_code).unsigned_abs();
        (hash % self.entries.len() as u64) as usize
    }

    pub fn entry_for(&self, subject_code: &str) -> &PaletteEntry {
        &self.entries[self.index_for(subject_code)]
    }

    pub fn color_for(&self, subject_code: &str) -> ColorPair {
        self.entry_for(subject_code).colors()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            entries: default_palette(),
        }
    }
}

/// Free-function form of [`Palette::color_for`].
pub fn color_for(subject_code: &str, palette: &Palette) -> ColorPair {
    palette.color_for(subject_code)
}
